//! Tournament id and bracket generation errors.

use std::fmt;

/// Identifier for a tournament, assigned by the external store (serial column).
pub type TournamentId = i32;

/// Errors that can occur during bracket generation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BracketError {
    /// Fewer real teams than the operation requires (2 for a bracket).
    InvalidRoster { found: usize },
    /// The seeding or pairing logic was handed (or produced) a structurally
    /// inconsistent bracket. Never occurs for a valid roster.
    InvariantViolation(&'static str),
}

impl fmt::Display for BracketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketError::InvalidRoster { found } => {
                write!(f, "Need at least 2 teams to build a bracket (got {})", found)
            }
            BracketError::InvariantViolation(msg) => {
                write!(f, "Bracket invariant violated: {}", msg)
            }
        }
    }
}

impl std::error::Error for BracketError {}
