//! Seeding arranger: shuffle the roster, number the seeds, and spread them
//! (with byes) into the padded round-1 slot sequence.

use crate::models::{BracketError, SeededTeam, Slot, Team};
use rand::seq::SliceRandom;
use rand::Rng;

/// Smallest power of two that fits `team_count` slots.
pub fn bracket_size(team_count: usize) -> usize {
    team_count.next_power_of_two()
}

/// Number of rounds in a bracket for `team_count` teams: ceil(log2(N)).
pub fn round_count(team_count: usize) -> u32 {
    bracket_size(team_count).trailing_zeros()
}

/// Shuffle the roster with the supplied random source and assign seed
/// numbers 1..=N in the shuffled order. This is the only randomness in the
/// engine; everything downstream is deterministic in the seeded order.
pub fn assign_seeds<R: Rng + ?Sized>(
    mut teams: Vec<Team>,
    rng: &mut R,
) -> Result<Vec<SeededTeam>, BracketError> {
    if teams.is_empty() {
        return Err(BracketError::InvalidRoster { found: 0 });
    }
    teams.shuffle(rng);
    Ok(teams
        .into_iter()
        .enumerate()
        .map(|(i, team)| SeededTeam {
            seed: i as u32 + 1,
            team,
        })
        .collect())
}

/// Mirrored-insertion seeding order for a power-of-two bracket, built by
/// repeated doubling: [1] -> [1,2] -> [1,4,2,3] -> [1,8,4,5,2,7,3,6] -> ...
/// Each pairing sums to (size of the next doubling) + 1, so seed 1 and
/// seed 2 land in opposite halves and cannot meet before the final.
fn seeding_order(size: usize) -> Vec<u32> {
    debug_assert!(size.is_power_of_two());
    let mut order = vec![1u32];
    while order.len() < size {
        let complement = order.len() as u32 * 2 + 1;
        order = order.iter().flat_map(|&s| [s, complement - s]).collect();
    }
    order
}

/// Place seeded teams into the padded slot sequence of length
/// `bracket_size(N)`. Seed numbers past the roster become byes, which puts
/// every bye opposite one of the lowest seeds: two byes never face each
/// other for N >= 2.
///
/// Seeds must be a permutation of 1..=N (as produced by [`assign_seeds`]).
pub fn arrange_slots(seeded: Vec<SeededTeam>) -> Result<Vec<Slot>, BracketError> {
    if seeded.is_empty() {
        return Err(BracketError::InvalidRoster { found: 0 });
    }
    let team_count = seeded.len();
    let size = bracket_size(team_count);

    let mut by_seed: Vec<Option<SeededTeam>> = (0..=team_count).map(|_| None).collect();
    for team in seeded {
        let seed = team.seed as usize;
        if seed == 0 || seed > team_count {
            return Err(BracketError::InvariantViolation(
                "seed numbers must be a permutation of 1..=N",
            ));
        }
        if by_seed[seed].replace(team).is_some() {
            return Err(BracketError::InvariantViolation("duplicate seed number"));
        }
    }

    // Seed numbers above the roster size have no entry and become the padding.
    let slots = seeding_order(size)
        .into_iter()
        .map(|seed| match by_seed.get_mut(seed as usize).and_then(Option::take) {
            Some(team) => Slot::Seeded(team),
            None => Slot::Bye,
        })
        .collect::<Vec<_>>();

    log::debug!(
        "arranged {} team(s) into {} slot(s) ({} bye(s))",
        team_count,
        size,
        size - team_count
    );
    Ok(slots)
}

/// Full seeding arrangement: shuffle, number, and spread into slots.
pub fn arrange<R: Rng + ?Sized>(teams: Vec<Team>, rng: &mut R) -> Result<Vec<Slot>, BracketError> {
    let seeded = assign_seeds(teams, rng)?;
    arrange_slots(seeded)
}
