//! Bracket generation logic: seeding arrangement and match tree construction.

mod bracket;
mod seeding;

pub use bracket::{build_bracket, generate_bracket};
pub use seeding::{arrange, arrange_slots, assign_seeds, bracket_size, round_count};
