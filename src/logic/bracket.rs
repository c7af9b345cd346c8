//! Bracket builder: walk the padded slot sequence and grow the match tree
//! round by round, wiring each match to the one its winner feeds into.

use crate::logic::seeding::{arrange, round_count};
use crate::models::{BracketError, BracketMatch, Slot, Team, TeamId, TournamentId};
use rand::Rng;

/// Something that proceeds into the next round's pairing: a team that got a
/// bye, or a match whose winner takes the position. Matches are referenced
/// by index into the accumulating output vector.
enum Advancer {
    Team(TeamId),
    Match(usize),
}

/// Build the full match tree for one tournament from an arranged slot
/// sequence. Matches come back in build order (round 1 first), each one
/// pointing at the match it feeds into; the final has no parent.
///
/// A single slot is the degenerate lone-team case and yields no matches.
/// An empty sequence, a non-power-of-two length, or two byes paired
/// together are construction errors.
pub fn build_bracket(
    tournament_id: TournamentId,
    slots: &[Slot],
) -> Result<Vec<BracketMatch>, BracketError> {
    match slots.len() {
        0 => return Err(BracketError::InvalidRoster { found: 0 }),
        1 => return Ok(Vec::new()),
        n if !n.is_power_of_two() => {
            return Err(BracketError::InvariantViolation(
                "slot count must be a power of two",
            ))
        }
        _ => {}
    }

    let mut matches: Vec<BracketMatch> = Vec::new();
    let mut advancers: Vec<Advancer> = Vec::with_capacity(slots.len() / 2);

    // Round 1: pair adjacent slots. A bye creates no match record; the real
    // team advances and meets its opponent in the next round.
    for pair in slots.chunks_exact(2) {
        match (&pair[0], &pair[1]) {
            (Slot::Seeded(first), Slot::Seeded(second)) => {
                advancers.push(Advancer::Match(matches.len()));
                matches.push(BracketMatch::with_teams(
                    tournament_id,
                    1,
                    first.team_id(),
                    second.team_id(),
                ));
            }
            (Slot::Seeded(team), Slot::Bye) | (Slot::Bye, Slot::Seeded(team)) => {
                advancers.push(Advancer::Team(team.team_id()));
            }
            (Slot::Bye, Slot::Bye) => {
                return Err(BracketError::InvariantViolation(
                    "two byes paired in round one",
                ));
            }
        }
    }

    // Later rounds: pair the previous round's advancers until one remains.
    // A team reference resolves that side now; a match reference leaves it
    // pending and links the child to the new match instead.
    let mut round = 1;
    while advancers.len() > 1 {
        round += 1;
        let previous = std::mem::take(&mut advancers);
        for pair in previous.chunks_exact(2) {
            let mut game = BracketMatch::new(tournament_id, round);
            match pair[0] {
                Advancer::Team(team_id) => game.first_team_id = Some(team_id),
                Advancer::Match(child) => matches[child].parent_id = Some(game.id),
            }
            match pair[1] {
                Advancer::Team(team_id) => game.second_team_id = Some(team_id),
                Advancer::Match(child) => matches[child].parent_id = Some(game.id),
            }
            advancers.push(Advancer::Match(matches.len()));
            matches.push(game);
        }
    }

    // N real teams always produce exactly N-1 matches; anything else means
    // the pairing above dropped or duplicated a slot.
    let real_teams = slots.iter().filter(|s| !s.is_bye()).count();
    if matches.len() != real_teams - 1 {
        return Err(BracketError::InvariantViolation(
            "match count does not equal team count minus one",
        ));
    }

    Ok(matches)
}

/// Generate a complete bracket for a tournament roster: seed, arrange, and
/// build. This is the entry point the surrounding system calls; rosters
/// with fewer than 2 teams are rejected before any match is created.
pub fn generate_bracket<R: Rng + ?Sized>(
    tournament_id: TournamentId,
    teams: Vec<Team>,
    rng: &mut R,
) -> Result<Vec<BracketMatch>, BracketError> {
    if teams.len() < 2 {
        return Err(BracketError::InvalidRoster { found: teams.len() });
    }
    let team_count = teams.len();
    let slots = arrange(teams, rng)?;
    let matches = build_bracket(tournament_id, &slots)?;
    log::debug!(
        "generated {} match(es) over {} round(s) for tournament {}",
        matches.len(),
        round_count(team_count),
        tournament_id
    );
    Ok(matches)
}
