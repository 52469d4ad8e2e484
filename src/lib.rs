//! Tournament scheduler: library with models and scheduling logic.
//!
//! Splits a ranked field into balanced groups, schedules round robins inside
//! the groups and builds a seeded elimination bracket with a small final.

pub mod config;
pub mod logic;
pub mod models;
pub mod roster;

pub use config::{ConfigError, TournamentConfig};
pub use logic::{
    assign_groups, bracket_rounds, build_bracket, first_round_seeds, plan_group_sizes,
    plan_tournament, schedule_round_robin, schedule_round_robin_rounds, Criterion, GroupPlan,
    TournamentPlan, MAX_FIRST_SLOT_IMBALANCE, MIN_BRACKET_ENTRANTS, MIN_SUBDIVIDABLE_GROUP_SIZE,
};
pub use models::{
    rank_participants, Bracket, BracketMatch, Entrant, Fight, NodeRef, Pairing, Participant,
    ParticipantId, Phase, SchedulingError,
};
pub use roster::{load_roster, load_roster_from_path, RosterError};
