//! Data structures for the scheduler: participants, pairings, brackets, errors.

mod bracket;
mod error;
mod pairing;
mod participant;

pub use bracket::{Bracket, BracketMatch, Entrant, Fight, NodeRef, Phase};
pub use error::SchedulingError;
pub use pairing::Pairing;
pub use participant::{rank_participants, Participant, ParticipantId};
