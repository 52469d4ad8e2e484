//! Scheduling logic: group sizes, group assignment, round robins, elimination bracket.

mod elimination;
mod group_assignment;
mod group_sizes;
mod matching;
mod plan;
mod round_robin;

pub use elimination::{bracket_rounds, build_bracket, first_round_seeds, MIN_BRACKET_ENTRANTS};
pub use group_assignment::{assign_groups, Criterion};
pub use group_sizes::{plan_group_sizes, MIN_SUBDIVIDABLE_GROUP_SIZE};
pub use plan::{plan_tournament, GroupPlan, TournamentPlan};
pub use round_robin::{schedule_round_robin, schedule_round_robin_rounds, MAX_FIRST_SLOT_IMBALANCE};
