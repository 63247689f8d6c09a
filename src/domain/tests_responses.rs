use crate::config::RulesConfig;
use crate::domain::cards::CreatureType;
use crate::domain::claims::play_card;
use crate::domain::responses::respond_to_round;
use crate::domain::state::{RoundResponse, RoundStatus};
use crate::domain::test_state_helpers::{now, started_game, P1, P2};

fn rules() -> RulesConfig {
    RulesConfig::default()
}

#[test]
fn respond_requires_an_active_round() {
    let (mut game, mut players) = started_game();
    let err = respond_to_round(
        &mut game,
        &mut players,
        P2,
        RoundResponse::Believe,
        &rules(),
        now(),
    )
    .unwrap_err();
    assert_eq!(err.code().as_str(), "ROUND_NOT_ACTIVE");
}

#[test]
fn respond_rejects_resolved_round() {
    let (mut game, mut players) = started_game();
    play_card(&mut game, &mut players, P1, 0, CreatureType::Cockroach, P2).unwrap();
    respond_to_round(
        &mut game,
        &mut players,
        P2,
        RoundResponse::Believe,
        &rules(),
        now(),
    )
    .unwrap();
    let err = respond_to_round(
        &mut game,
        &mut players,
        P1,
        RoundResponse::Believe,
        &rules(),
        now(),
    )
    .unwrap_err();
    assert_eq!(err.code().as_str(), "ROUND_NOT_ACTIVE");
}

#[test]
fn respond_rejects_non_target_player() {
    let (mut game, mut players) = started_game();
    play_card(&mut game, &mut players, P1, 0, CreatureType::Mouse, P2).unwrap();
    let err = respond_to_round(
        &mut game,
        &mut players,
        P1,
        RoundResponse::Believe,
        &rules(),
        now(),
    )
    .unwrap_err();
    assert_eq!(err.code().as_str(), "NOT_TARGET_PLAYER");
}

#[test]
fn pass_back_flips_target_and_turn_to_claimant() {
    let (mut game, mut players) = started_game();
    play_card(&mut game, &mut players, P1, 0, CreatureType::Mouse, P2).unwrap();

    let outcome = respond_to_round(
        &mut game,
        &mut players,
        P2,
        RoundResponse::PassBack,
        &rules(),
        now(),
    )
    .unwrap();
    assert_eq!(outcome.pass_count, 1);
    assert!(outcome.resolution.is_none());

    let round = game.current_round.as_ref().unwrap();
    assert_eq!(round.status, RoundStatus::Active);
    assert_eq!(round.target_player, P1);
    assert_eq!(game.turn, Some(P1));
    // The claim and the physical card are unchanged across passes.
    assert_eq!(round.claiming_player, P1);
    assert_eq!(round.claimed_creature, CreatureType::Mouse);
    assert_eq!(round.card_in_play.id, 0);
}

#[test]
fn pass_back_is_bounded_by_max_passes() {
    let (mut game, mut players) = started_game();
    play_card(&mut game, &mut players, P1, 0, CreatureType::Mouse, P2).unwrap();

    let rules = rules();
    let mut responder = P2;
    for expected in 1..=rules.max_passes {
        let outcome = respond_to_round(
            &mut game,
            &mut players,
            responder,
            RoundResponse::PassBack,
            &rules,
            now(),
        )
        .unwrap();
        assert_eq!(outcome.pass_count, expected);
        responder = game.current_round.as_ref().unwrap().target_player;
    }

    let err = respond_to_round(
        &mut game,
        &mut players,
        responder,
        RoundResponse::PassBack,
        &rules,
        now(),
    )
    .unwrap_err();
    assert_eq!(err.code().as_str(), "MAX_PASS_LIMIT_REACHED");
    // The round is still active; a believe/disbelieve still works.
    let outcome = respond_to_round(
        &mut game,
        &mut players,
        responder,
        RoundResponse::Disbelieve,
        &rules,
        now(),
    )
    .unwrap();
    assert!(outcome.resolution.is_some());
}

#[test]
fn correct_guess_penalizes_the_claimant() {
    let (mut game, mut players) = started_game();
    // Truthful claim, believed: guess correct, claimant stung.
    play_card(&mut game, &mut players, P1, 0, CreatureType::Cockroach, P2).unwrap();
    let outcome = respond_to_round(
        &mut game,
        &mut players,
        P2,
        RoundResponse::Believe,
        &rules(),
        now(),
    )
    .unwrap();
    let resolution = outcome.resolution.unwrap();
    assert!(resolution.actual_is_truthful);
    assert!(resolution.guess_is_correct);
    assert_eq!(resolution.penalty_receiver, P1);
    assert_eq!(players[0].penalties.count(CreatureType::Cockroach), 1);
    // The stung player leads the next round.
    assert_eq!(game.turn, Some(P1));
}

#[test]
fn incorrect_guess_penalizes_the_responder() {
    let (mut game, mut players) = started_game();
    // Truthful claim, disbelieved: guess wrong, responder stung.
    play_card(&mut game, &mut players, P1, 1, CreatureType::Cockroach, P2).unwrap();
    let outcome = respond_to_round(
        &mut game,
        &mut players,
        P2,
        RoundResponse::Disbelieve,
        &rules(),
        now(),
    )
    .unwrap();
    let resolution = outcome.resolution.unwrap();
    assert!(resolution.actual_is_truthful);
    assert!(!resolution.guess_is_correct);
    assert_eq!(resolution.penalty_receiver, P2);
    assert_eq!(players[1].penalties.count(CreatureType::Cockroach), 1);
    assert_eq!(game.turn, Some(P2));
}

#[test]
fn resolution_records_immutable_history() {
    let (mut game, mut players) = started_game();
    play_card(&mut game, &mut players, P1, 0, CreatureType::Mouse, P2).unwrap();
    respond_to_round(
        &mut game,
        &mut players,
        P2,
        RoundResponse::Believe,
        &rules(),
        now(),
    )
    .unwrap();

    let round = game.current_round.as_ref().unwrap();
    assert_eq!(round.status, RoundStatus::Resolved);
    assert_eq!(round.response, Some(RoundResponse::Believe));
    assert_eq!(round.actual_is_truthful, Some(false));
    assert_eq!(round.penalty_receiver, Some(P2));
}

#[test]
fn version_increases_on_every_accepted_action() {
    let (mut game, mut players) = started_game();
    let mut last = game.version;
    play_card(&mut game, &mut players, P1, 0, CreatureType::Mouse, P2).unwrap();
    assert!(game.version > last);
    last = game.version;
    respond_to_round(
        &mut game,
        &mut players,
        P2,
        RoundResponse::PassBack,
        &rules(),
        now(),
    )
    .unwrap();
    assert!(game.version > last);
    last = game.version;
    respond_to_round(
        &mut game,
        &mut players,
        P1,
        RoundResponse::Believe,
        &rules(),
        now(),
    )
    .unwrap();
    assert!(game.version > last);
}

#[test]
fn rejected_response_leaves_state_untouched() {
    let (mut game, mut players) = started_game();
    play_card(&mut game, &mut players, P1, 0, CreatureType::Mouse, P2).unwrap();
    let snapshot = (game.clone(), players.clone());
    let _ = respond_to_round(
        &mut game,
        &mut players,
        P1,
        RoundResponse::Believe,
        &rules(),
        now(),
    )
    .unwrap_err();
    assert_eq!(game, snapshot.0);
    assert_eq!(players, snapshot.1);
}
