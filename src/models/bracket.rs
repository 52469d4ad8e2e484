//! Elimination bracket: matches, slot references, phases.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a match in the bracket: round (0 = first round) and index within the round.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct NodeRef {
    pub round: usize,
    pub index: usize,
}

impl NodeRef {
    pub fn new(round: usize, index: usize) -> Self {
        Self { round, index }
    }
}

/// Who fills one side of a bracket match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entrant {
    /// 0-based seed, i.e. the position in the cut list (0 = best).
    Seed(usize),
    /// Whoever wins the referenced match.
    Winner(NodeRef),
    /// Whoever loses the referenced match.
    Loser(NodeRef),
}

/// Phase of the elimination a match belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Round with the given number of bracket positions (16, 32, ...).
    Elimination(usize),
    QuarterFinal,
    SemiFinal,
    /// Third-place match between the semi-final losers.
    SmallFinal,
    Final,
}

impl Phase {
    /// Phase for a round that starts with `positions` bracket positions.
    pub fn for_positions(positions: usize) -> Self {
        match positions {
            0..=2 => Phase::Final,
            4 => Phase::SemiFinal,
            8 => Phase::QuarterFinal,
            n => Phase::Elimination(n),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Elimination(n) => write!(f, "Elimination 1/{}", n / 2),
            Phase::QuarterFinal => write!(f, "Quarter-finals"),
            Phase::SemiFinal => write!(f, "Semi-finals"),
            Phase::SmallFinal => write!(f, "Small final"),
            Phase::Final => write!(f, "Final"),
        }
    }
}

/// One match slot of the bracket. `None` on a side denotes a bye.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketMatch {
    pub node: NodeRef,
    pub phase: Phase,
    pub top: Option<Entrant>,
    pub bottom: Option<Entrant>,
}

impl BracketMatch {
    /// True when exactly one side is present; the match needs no score.
    pub fn is_bye(&self) -> bool {
        self.top.is_some() != self.bottom.is_some()
    }

    /// The side a bye advances, if this match is a bye.
    pub fn walkover(&self) -> Option<Entrant> {
        match (self.top, self.bottom) {
            (Some(e), None) | (None, Some(e)) => Some(e),
            _ => None,
        }
    }

    /// Reference to whoever wins this match.
    pub fn winner(&self) -> Entrant {
        Entrant::Winner(self.node)
    }

    /// Reference to whoever loses this match.
    pub fn loser(&self) -> Entrant {
        Entrant::Loser(self.node)
    }
}

/// A match that actually has to be fought (both sides present), in running order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Fight {
    pub node: NodeRef,
    pub phase: Phase,
    pub top: Entrant,
    pub bottom: Entrant,
}

/// Single-elimination bracket for the top `cut` finishers.
///
/// `rounds[0]` holds the seeded first round; every later match takes the
/// winners of two adjacent matches of the previous round. The small final is
/// kept apart from the rounds; it is addressed as index 1 of the last round,
/// next to the final at index 0.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub cut: usize,
    pub num_rounds: usize,
    pub rounds: Vec<Vec<BracketMatch>>,
    pub small_final: BracketMatch,
}

impl Bracket {
    pub fn final_match(&self) -> Option<&BracketMatch> {
        self.rounds.last().and_then(|round| round.first())
    }

    /// Look up a match by position (the small final included).
    pub fn get(&self, node: NodeRef) -> Option<&BracketMatch> {
        if node == self.small_final.node {
            return Some(&self.small_final);
        }
        self.rounds.get(node.round)?.get(node.index)
    }

    /// First-round matches decided by a bye.
    pub fn byes(&self) -> impl Iterator<Item = &BracketMatch> {
        self.rounds
            .first()
            .into_iter()
            .flatten()
            .filter(|m| m.is_bye())
    }

    /// Follow an entrant back to a seed when no score is needed to know it.
    ///
    /// Seeds resolve to themselves and winners of byes to the advanced side;
    /// everything that depends on a played match resolves to `None`.
    pub fn resolve(&self, entrant: Entrant) -> Option<usize> {
        match entrant {
            Entrant::Seed(seed) => Some(seed),
            Entrant::Winner(node) => {
                let m = self.get(node)?;
                self.resolve(m.walkover()?)
            }
            Entrant::Loser(_) => None,
        }
    }

    /// Every match with two sides, round by round; the small final runs just before the final.
    pub fn fights(&self) -> Vec<Fight> {
        let mut fights = Vec::new();
        let last = self.rounds.len().saturating_sub(1);
        for (r, round) in self.rounds.iter().enumerate() {
            if r == last {
                push_fight(&mut fights, &self.small_final);
            }
            for m in round {
                push_fight(&mut fights, m);
            }
        }
        fights
    }
}

fn push_fight(fights: &mut Vec<Fight>, m: &BracketMatch) {
    if let (Some(top), Some(bottom)) = (m.top, m.bottom) {
        fights.push(Fight {
            node: m.node,
            phase: m.phase,
            top,
            bottom,
        });
    }
}
