//! Command-line bracket generator: read a team roster from a CSV file and
//! print the generated match list as JSON for the persistence layer.
//! Run with: cargo run --bin bracket -- teams.csv
//! CSV columns: team_id,title[,image_path]
//! Override the owning tournament id with env: TOUR_ID (default 1).

use foosball_bracket::{generate_bracket, Team, TournamentId};
use serde::Deserialize;

/// One roster row as the external store exports it.
#[derive(Deserialize)]
struct TeamRow {
    team_id: i32,
    title: String,
    #[serde(default)]
    image_path: Option<String>,
}

fn default_tour_id() -> TournamentId {
    1
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let path = std::env::args()
        .nth(1)
        .ok_or("usage: bracket <teams.csv>")?;
    let tour_id: TournamentId = std::env::var("TOUR_ID")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(default_tour_id);

    let mut reader = csv::Reader::from_path(&path)?;
    let mut teams = Vec::new();
    for row in reader.deserialize() {
        let row: TeamRow = row?;
        let mut team = Team::new(row.team_id, row.title);
        team.image_path = row.image_path;
        teams.push(team);
    }
    log::info!("Read {} team(s) from {}", teams.len(), path);

    let matches = generate_bracket(tour_id, teams, &mut rand::thread_rng())?;
    log::info!(
        "Generated {} match(es) for tournament {}",
        matches.len(),
        tour_id
    );

    println!("{}", serde_json::to_string_pretty(&matches)?);
    Ok(())
}
