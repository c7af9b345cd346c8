//! Integration tests for the seeding arranger: padding, seed spread, byes,
//! and determinism under an injected random source.

use foosball_bracket::{
    arrange, arrange_slots, assign_seeds, bracket_size, BracketError, SeededTeam, Slot, Team,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn teams(n: usize) -> Vec<Team> {
    (1..=n)
        .map(|i| Team::new(i as i32, format!("T{i}")))
        .collect()
}

/// Seeded roster where seed i is team id i (the identity shuffle).
fn seeded_identity(n: usize) -> Vec<SeededTeam> {
    teams(n)
        .into_iter()
        .enumerate()
        .map(|(i, team)| SeededTeam {
            seed: i as u32 + 1,
            team,
        })
        .collect()
}

fn seed_order(slots: &[Slot]) -> Vec<Option<u32>> {
    slots.iter().map(|s| s.seeded().map(|t| t.seed)).collect()
}

#[test]
fn slot_count_is_next_power_of_two() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in 1..=33 {
        let slots = arrange(teams(n), &mut rng).unwrap();
        assert_eq!(slots.len(), bracket_size(n), "n={n}");
        assert!(slots.len().is_power_of_two());
        assert!(slots.len() >= n);
    }
}

#[test]
fn known_orders_for_small_power_of_two_sizes() {
    let expect = |seeds: &[u32]| seeds.iter().map(|&s| Some(s)).collect::<Vec<_>>();
    assert_eq!(
        seed_order(&arrange_slots(seeded_identity(2)).unwrap()),
        expect(&[1, 2])
    );
    assert_eq!(
        seed_order(&arrange_slots(seeded_identity(4)).unwrap()),
        expect(&[1, 4, 2, 3])
    );
    assert_eq!(
        seed_order(&arrange_slots(seeded_identity(8)).unwrap()),
        expect(&[1, 8, 4, 5, 2, 7, 3, 6])
    );
    assert_eq!(
        seed_order(&arrange_slots(seeded_identity(16)).unwrap()),
        expect(&[1, 16, 8, 9, 4, 13, 5, 12, 2, 15, 7, 10, 3, 14, 6, 11])
    );
}

#[test]
fn three_teams_put_the_bye_next_to_the_top_seed() {
    let slots = arrange_slots(seeded_identity(3)).unwrap();
    assert_eq!(seed_order(&slots), vec![Some(1), None, Some(2), Some(3)]);
}

#[test]
fn no_two_byes_are_adjacent() {
    for n in [3, 5, 6, 7, 9, 13] {
        let slots = arrange_slots(seeded_identity(n)).unwrap();
        for pair in slots.windows(2) {
            assert!(
                !(pair[0].is_bye() && pair[1].is_bye()),
                "adjacent byes for n={n}"
            );
        }
    }
}

#[test]
fn assigned_seeds_are_a_permutation_of_one_to_n() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in [1usize, 2, 5, 12, 16, 33] {
        let seeded = assign_seeds(teams(n), &mut rng).unwrap();
        let mut seen: Vec<u32> = seeded.iter().map(|t| t.seed).collect();
        seen.sort_unstable();
        assert_eq!(seen, (1..=n as u32).collect::<Vec<_>>());
    }
}

#[test]
fn top_two_seeds_land_in_opposite_halves() {
    for n in [4, 8, 16, 32] {
        let slots = arrange_slots(seeded_identity(n)).unwrap();
        let position = |seed| {
            slots
                .iter()
                .position(|s| s.seeded().map(|t| t.seed) == Some(seed))
                .unwrap()
        };
        assert!(position(1) < n / 2, "n={n}");
        assert!(position(2) >= n / 2, "n={n}");
    }
}

#[test]
fn same_rng_seed_gives_an_identical_arrangement() {
    let roster = teams(11);
    let a = arrange(roster.clone(), &mut StdRng::seed_from_u64(99)).unwrap();
    let b = arrange(roster, &mut StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn single_team_needs_no_padding() {
    let slots = arrange(teams(1), &mut StdRng::seed_from_u64(0)).unwrap();
    assert_eq!(slots.len(), 1);
    assert!(!slots[0].is_bye());
}

#[test]
fn empty_roster_is_rejected() {
    assert!(matches!(
        arrange(Vec::new(), &mut StdRng::seed_from_u64(0)),
        Err(BracketError::InvalidRoster { found: 0 })
    ));
}

#[test]
fn hand_rolled_seed_numbers_must_be_a_permutation() {
    let mut out_of_range = seeded_identity(4);
    out_of_range[3].seed = 9;
    assert!(matches!(
        arrange_slots(out_of_range),
        Err(BracketError::InvariantViolation(_))
    ));

    let mut duplicated = seeded_identity(4);
    duplicated[1].seed = 1;
    assert!(matches!(
        arrange_slots(duplicated),
        Err(BracketError::InvariantViolation(_))
    ));
}
