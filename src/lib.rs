//! Foosball tournament bracket engine: library with models and seeding/bracket logic.

pub mod logic;
pub mod models;

pub use logic::{
    arrange, arrange_slots, assign_seeds, bracket_size, build_bracket, generate_bracket,
    round_count,
};
pub use models::{BracketError, BracketMatch, MatchId, SeededTeam, Slot, Team, TeamId, TournamentId};
