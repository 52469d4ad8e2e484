//! Elimination bracket: standard seeding with byes, winner progression, small final.

use crate::models::{Bracket, BracketMatch, Entrant, NodeRef, Phase, SchedulingError};

/// Smallest cut a bracket is built for. Below four there are no two semi-finals
/// to feed a small final.
pub const MIN_BRACKET_ENTRANTS: usize = 4;

/// Number of rounds needed for `cut` entrants: `ceil(log2(cut))`.
pub fn bracket_rounds(cut: usize) -> usize {
    cut.next_power_of_two().trailing_zeros() as usize
}

/// First-round seed pairs of a full bracket with `num_rounds` rounds.
///
/// Starts from the final `(0, 1)` and splits every pair `(a, b)` into
/// `(a, M - a)` and `(M - b, b)` one round earlier, `M` being the largest seed
/// of that round. Seed 0 meets the last seed first; seeds 0 and 1 can only
/// meet in the final.
pub fn first_round_seeds(num_rounds: usize) -> Vec<(usize, usize)> {
    if num_rounds <= 1 {
        return vec![(0, 1)];
    }
    let max = (1 << num_rounds) - 1;
    first_round_seeds(num_rounds - 1)
        .into_iter()
        .flat_map(|(a, b)| [(a, max - a), (max - b, b)])
        .collect()
}

/// Build the bracket for the best `cut` finishers (seeds `0..cut`).
///
/// Seeds at or past `cut` are byes: their first-round opponent advances
/// without a score. Every later match takes the winners of two adjacent
/// matches of the round before. The losers of the two semi-finals meet in
/// the small final.
pub fn build_bracket(cut: usize) -> Result<Bracket, SchedulingError> {
    if cut < MIN_BRACKET_ENTRANTS {
        return Err(SchedulingError::InvalidInput(format!(
            "an elimination bracket needs at least {} entrants, got {}",
            MIN_BRACKET_ENTRANTS, cut
        )));
    }

    let num_rounds = bracket_rounds(cut);
    let positions = 1usize << num_rounds;
    let seat = |seed: usize| (seed < cut).then_some(Entrant::Seed(seed));

    let first: Vec<BracketMatch> = first_round_seeds(num_rounds)
        .into_iter()
        .enumerate()
        .map(|(index, (top, bottom))| BracketMatch {
            node: NodeRef::new(0, index),
            phase: Phase::for_positions(positions),
            top: seat(top),
            bottom: seat(bottom),
        })
        .collect();

    let mut rounds = vec![first];
    let mut semi_final_losers = Vec::with_capacity(2);
    for round in 0..num_rounds {
        let previous = &rounds[round];
        if previous.len() == 2 {
            semi_final_losers.extend(previous.iter().map(BracketMatch::loser));
        }
        if round + 1 == num_rounds {
            break;
        }
        let next: Vec<BracketMatch> = previous
            .chunks(2)
            .enumerate()
            .map(|(index, feeders)| BracketMatch {
                node: NodeRef::new(round + 1, index),
                phase: Phase::for_positions(positions >> (round + 1)),
                top: feeders.first().map(BracketMatch::winner),
                bottom: feeders.get(1).map(BracketMatch::winner),
            })
            .collect();
        rounds.push(next);
    }

    let (top, bottom) = match semi_final_losers[..] {
        [top, bottom] => (top, bottom),
        _ => {
            return Err(SchedulingError::InternalInvariantViolation(format!(
                "bracket for {} has no semi-final round",
                cut
            )))
        }
    };
    let small_final = BracketMatch {
        node: NodeRef::new(num_rounds - 1, 1),
        phase: Phase::SmallFinal,
        top: Some(top),
        bottom: Some(bottom),
    };

    let bracket = Bracket {
        cut,
        num_rounds,
        rounds,
        small_final,
    };
    log::debug!(
        "bracket for {}: {} rounds, {} positions, {} byes",
        cut,
        num_rounds,
        positions,
        bracket.byes().count()
    );
    Ok(bracket)
}
