//! End-to-end rule scenarios over the pure domain functions.

use crate::config::RulesConfig;
use crate::domain::cards::CreatureType;
use crate::domain::claims::play_card;
use crate::domain::responses::respond_to_round;
use crate::domain::state::{GameStatus, RoundResponse};
use crate::domain::test_state_helpers::{now, started_game, P1, P2};

// P1 plays a real Cockroach but claims "Mouse". P2 believes the lie:
// guess incorrect, the guesser takes the card.
#[test]
fn believed_lie_stings_the_believer() {
    let (mut game, mut players) = started_game();
    play_card(&mut game, &mut players, P1, 0, CreatureType::Mouse, P2).unwrap();

    let outcome = respond_to_round(
        &mut game,
        &mut players,
        P2,
        RoundResponse::Believe,
        &RulesConfig::default(),
        now(),
    )
    .unwrap();

    let resolution = outcome.resolution.unwrap();
    assert!(!resolution.actual_is_truthful);
    assert!(!resolution.guess_is_correct);
    assert_eq!(resolution.penalty_receiver, P2);
    assert_eq!(players[1].penalties.count(CreatureType::Cockroach), 1);
    assert_eq!(players[0].penalties.total(), 0);
}

// Same setup, but P2 calls the lie: guess correct, the claimant takes the
// card and leads the next round.
#[test]
fn called_lie_stings_the_claimant() {
    let (mut game, mut players) = started_game();
    play_card(&mut game, &mut players, P1, 0, CreatureType::Mouse, P2).unwrap();

    let outcome = respond_to_round(
        &mut game,
        &mut players,
        P2,
        RoundResponse::Disbelieve,
        &RulesConfig::default(),
        now(),
    )
    .unwrap();

    let resolution = outcome.resolution.unwrap();
    assert!(resolution.guess_is_correct);
    assert_eq!(resolution.penalty_receiver, P1);
    assert_eq!(players[0].penalties.count(CreatureType::Cockroach), 1);
    assert_eq!(game.turn, Some(P1));
}

// Three pass-backs exhaust the cap; the fourth is rejected and the holder
// must commit. The card alternates across the table on every pass (a pure
// claimant-retarget would have the claimant passing to themselves after the
// first), so an odd pass count leaves the decision with P1, the claimant.
#[test]
fn fourth_pass_back_is_rejected() {
    let (mut game, mut players) = started_game();
    let rules = RulesConfig::default();
    play_card(&mut game, &mut players, P1, 0, CreatureType::Mouse, P2).unwrap();

    for responder in [P2, P1, P2] {
        respond_to_round(
            &mut game,
            &mut players,
            responder,
            RoundResponse::PassBack,
            &rules,
            now(),
        )
        .unwrap();
    }
    assert_eq!(game.current_round.as_ref().unwrap().pass_count, 3);

    let err = respond_to_round(
        &mut game,
        &mut players,
        P1,
        RoundResponse::PassBack,
        &rules,
        now(),
    )
    .unwrap_err();
    assert_eq!(err.code().as_str(), "MAX_PASS_LIMIT_REACHED");
}

// A third Frog on P2's pile ends the game on that exact transition.
#[test]
fn third_frog_ends_the_game() {
    let (mut game, mut players) = started_game();
    let rules = RulesConfig::default();

    // Seed P2 with two Frog penalties (moved out of their hand).
    for _ in 0..2 {
        let pos = players[1]
            .hand
            .iter()
            .position(|c| c.creature == CreatureType::Frog)
            .unwrap();
        let card = players[1].hand.remove(pos);
        players[1].penalties.push(card);
    }
    assert_eq!(players[1].penalties.count(CreatureType::Frog), 2);
    assert!(!players[1].has_lost);

    // P2 truthfully claims a Frog; P1 believes: correct guess, the claimant
    // (P2) takes their third Frog.
    game.turn = Some(P2);
    let frog_id = players[1]
        .hand
        .iter()
        .find(|c| c.creature == CreatureType::Frog)
        .unwrap()
        .id;
    play_card(&mut game, &mut players, P2, frog_id, CreatureType::Frog, P1).unwrap();
    let outcome = respond_to_round(
        &mut game,
        &mut players,
        P1,
        RoundResponse::Believe,
        &rules,
        now(),
    )
    .unwrap();

    let resolution = outcome.resolution.unwrap();
    assert!(resolution.game_ended);
    assert_eq!(resolution.penalty_receiver, P2);
    assert_eq!(resolution.pile_count, 3);
    assert!(players[1].has_lost);
    assert_eq!(players[1].losing_creature, Some(CreatureType::Frog));
    assert_eq!(game.status, GameStatus::Ended);
    assert_eq!(game.winner, Some(P1));
    assert_eq!(game.turn, None);

    // Terminal: nothing further is accepted.
    let err = respond_to_round(
        &mut game,
        &mut players,
        P1,
        RoundResponse::Believe,
        &rules,
        now(),
    )
    .unwrap_err();
    assert_eq!(err.code().as_str(), "GAME_NOT_ACTIVE");
}
