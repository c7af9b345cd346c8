//! Data structures for the bracket engine: teams, slots, matches.

mod game;
mod team;
mod tournament;

pub use game::{BracketMatch, MatchId};
pub use team::{SeededTeam, Slot, Team, TeamId};
pub use tournament::{BracketError, TournamentId};
