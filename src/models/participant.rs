//! Participant data structure.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// Unique identifier for a participant (used in groups and lookups).
pub type ParticipantId = Uuid;

/// A participant of the tournament: a fencer, a fighter, or a whole team.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    /// Club, used as the first spread criterion.
    pub club: Option<String>,
    /// Country, used as the second spread criterion.
    pub country: Option<String>,
    /// Ranking key. Lower is better when the rating is a rank.
    pub rating: f64,
}

impl Participant {
    /// Create a participant with no club or country.
    pub fn new(name: impl Into<String>, rating: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            club: None,
            country: None,
            rating,
        }
    }

    pub fn with_club(mut self, club: impl Into<String>) -> Self {
        self.club = non_blank(club.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = non_blank(country.into());
        self
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Sort participants best-first.
///
/// When `rating_is_rank` is set, a lower rating is better (rank 1 first);
/// otherwise a higher rating is better. The sort is stable, so equal ratings
/// keep their roster order.
pub fn rank_participants(mut participants: Vec<Participant>, rating_is_rank: bool) -> Vec<Participant> {
    participants.sort_by(|a, b| {
        let ord = a.rating.partial_cmp(&b.rating).unwrap_or(Ordering::Equal);
        if rating_is_rank {
            ord
        } else {
            ord.reverse()
        }
    });
    participants
}
