//! Host binary: plan a tournament from a roster and print it as JSON.
//! Run with: cargo run --bin schedule -- roster.csv [config.json]
//! Logging goes to stderr; override the level with RUST_LOG (default: info).

use std::process::ExitCode;
use tournament_scheduler::{
    load_roster_from_path, plan_tournament, rank_participants, Criterion, Participant,
    TournamentConfig,
};

fn print_usage() {
    eprintln!("Usage: schedule <roster.csv> [config.json]");
    eprintln!();
    eprintln!("Roster columns: name,club,country,rating,present (present = y)");
    eprintln!("Config fields (all optional): max_group_size, cut, rating_is_rank,");
    eprintln!("  large_groups_first, team_ranking_n");
}

fn run(roster_path: &str, config_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => TournamentConfig::from_path(path)?,
        None => TournamentConfig::default(),
    };

    let participants = load_roster_from_path(roster_path)?;
    if participants.is_empty() {
        return Err("no participants loaded - are present participants marked with 'y'?".into());
    }
    let participants = rank_participants(participants, config.rating_is_rank);

    let club = |p: &Participant| p.club.clone();
    let country = |p: &Participant| p.country.clone();
    let criteria: [Criterion<'_, Participant, String>; 2] = [&club, &country];

    let plan = plan_tournament(&participants, &config, &criteria)?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(roster_path) = args.first() else {
        print_usage();
        return ExitCode::FAILURE;
    };

    match run(roster_path, args.get(1).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
