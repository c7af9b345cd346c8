//! BracketMatch: one node of the single-elimination match tree.

use crate::models::team::TeamId;
use crate::models::tournament::TournamentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match. Random so that brackets generated
/// concurrently for different tournaments never collide.
pub type MatchId = Uuid;

/// A single match in the bracket. Sides left `None` are pending: they are
/// filled by the result-reporting layer once the feeding child match
/// completes. `winner_id` is always `None` at creation time.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BracketMatch {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub first_team_id: Option<TeamId>,
    pub second_team_id: Option<TeamId>,
    pub winner_id: Option<TeamId>,
    /// Match this one feeds into. `None` only for the final.
    pub parent_id: Option<MatchId>,
    /// 1-based layer of the tree; round 1 pairs the original slots.
    pub round: u32,
    pub created_at: DateTime<Utc>,
}

impl BracketMatch {
    /// Create a match with both sides pending.
    pub fn new(tournament_id: TournamentId, round: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            first_team_id: None,
            second_team_id: None,
            winner_id: None,
            parent_id: None,
            round,
            created_at: Utc::now(),
        }
    }

    /// Create a round match with both sides already known.
    pub fn with_teams(
        tournament_id: TournamentId,
        round: u32,
        first_team_id: TeamId,
        second_team_id: TeamId,
    ) -> Self {
        Self {
            first_team_id: Some(first_team_id),
            second_team_id: Some(second_team_id),
            ..Self::new(tournament_id, round)
        }
    }

    /// True when this match is the root of the tree.
    pub fn is_final(&self) -> bool {
        self.parent_id.is_none()
    }
}
