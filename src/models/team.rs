//! Team, SeededTeam, and Slot: the roster side of the bracket.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier for a team, assigned by the external store (serial column).
pub type TeamId = i32;

/// A registered team. Immutable input; the engine never creates or edits teams.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub team_id: TeamId,
    pub title: String,
    pub image_path: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Team {
    /// Create a team with the given id and title. No image, created now.
    pub fn new(team_id: TeamId, title: impl Into<String>) -> Self {
        Self {
            team_id,
            title: title.into(),
            image_path: None,
            created_at: Utc::now(),
        }
    }
}

/// A team with its seed number (1..=N, unique within one bracket run).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeededTeam {
    pub team: Team,
    pub seed: u32,
}

impl SeededTeam {
    pub fn team_id(&self) -> TeamId {
        self.team.team_id
    }
}

/// One position in the padded round-1 sequence: a seeded team, or a bye.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Seeded(SeededTeam),
    /// No opponent here; the adjacent team advances without playing.
    Bye,
}

impl Slot {
    pub fn is_bye(&self) -> bool {
        matches!(self, Slot::Bye)
    }

    /// The seeded team in this slot, if it is not a bye.
    pub fn seeded(&self) -> Option<&SeededTeam> {
        match self {
            Slot::Seeded(team) => Some(team),
            Slot::Bye => None,
        }
    }
}
