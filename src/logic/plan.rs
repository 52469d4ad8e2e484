//! Whole-tournament plan: groups with their schedules, then the elimination bracket.

use crate::config::TournamentConfig;
use crate::logic::elimination::{build_bracket, MIN_BRACKET_ENTRANTS};
use crate::logic::group_assignment::{assign_groups, Criterion};
use crate::logic::group_sizes::plan_group_sizes;
use crate::logic::round_robin::schedule_round_robin_rounds;
use crate::models::{Bracket, Pairing, Participant, SchedulingError};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One group of the group stage with its round robin.
#[derive(Clone, Debug, Serialize)]
pub struct GroupPlan {
    /// 1-based group number.
    pub number: usize,
    pub members: Vec<Participant>,
    /// Matches by round; indices point into `members`.
    pub rounds: Vec<Vec<Pairing>>,
}

impl GroupPlan {
    pub fn name(&self) -> String {
        format!("Group {}", self.number)
    }

    /// Matches in playing order, as pairs of members.
    pub fn matches(&self) -> impl Iterator<Item = (&Participant, &Participant)> + '_ {
        self.rounds
            .iter()
            .flatten()
            .map(|p| (&self.members[p.first], &self.members[p.second]))
    }
}

/// Everything the host needs to render a tournament.
#[derive(Clone, Debug, Serialize)]
pub struct TournamentPlan {
    pub generated_at: DateTime<Utc>,
    pub config: TournamentConfig,
    pub groups: Vec<GroupPlan>,
    /// Number of group-stage finishers going to the elimination.
    pub cut: usize,
    /// `None` when the cut is too small for a bracket.
    pub bracket: Option<Bracket>,
}

/// Plan groups, group schedules and the bracket for participants sorted best-first.
pub fn plan_tournament<K: PartialEq>(
    participants: &[Participant],
    config: &TournamentConfig,
    criteria: &[Criterion<'_, Participant, K>],
) -> Result<TournamentPlan, SchedulingError> {
    let sizes = plan_group_sizes(
        participants.len(),
        config.max_group_size,
        config.large_groups_first,
    )?;
    let groups = assign_groups(&sizes, participants, criteria)?
        .into_iter()
        .enumerate()
        .map(|(i, members)| {
            let rounds = schedule_round_robin_rounds(members.len())?;
            Ok(GroupPlan {
                number: i + 1,
                members,
                rounds,
            })
        })
        .collect::<Result<Vec<_>, SchedulingError>>()?;

    let cut = config.resolve_cut(participants.len());
    let bracket = if cut < MIN_BRACKET_ENTRANTS {
        log::info!("Cut of {} is too small for an elimination bracket, skipping it", cut);
        None
    } else {
        Some(build_bracket(cut)?)
    };

    log::info!(
        "Planned {} group(s) for {} participants, {} to the elimination",
        groups.len(),
        participants.len(),
        cut
    );
    Ok(TournamentPlan {
        generated_at: Utc::now(),
        config: config.clone(),
        groups,
        cut,
        bracket,
    })
}
