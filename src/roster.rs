//! Loading the participant roster from CSV.
//!
//! Expected header: `name,club,country,rating,present`. Only rows marked
//! present take part; rows without a name are skipped. Fields are trimmed
//! and the present mark is case-insensitive, so ` Y ` counts as `y`.

use crate::models::Participant;
use serde::Deserialize;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Cannot read roster: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed roster: {0}")]
    Csv(#[from] csv::Error),

    #[error("Participant {0} has no rating")]
    MissingRating(String),
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    #[serde(default)]
    club: String,
    #[serde(default)]
    country: String,
    rating: Option<f64>,
    #[serde(default)]
    present: String,
}

/// Read present participants, in roster order, from CSV data.
pub fn load_roster<R: io::Read>(reader: R) -> Result<Vec<Participant>, RosterError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut participants = Vec::new();
    for row in reader.deserialize::<RosterRow>() {
        let row = row?;
        if row.name.is_empty() || !row.present.eq_ignore_ascii_case("y") {
            continue;
        }
        let rating = row
            .rating
            .ok_or_else(|| RosterError::MissingRating(row.name.clone()))?;
        participants.push(
            Participant::new(row.name, rating)
                .with_club(row.club)
                .with_country(row.country),
        );
    }
    log::info!("Loaded {} present participant(s)", participants.len());
    Ok(participants)
}

pub fn load_roster_from_path(path: impl AsRef<Path>) -> Result<Vec<Participant>, RosterError> {
    let file = std::fs::File::open(path)?;
    load_roster(io::BufReader::new(file))
}
