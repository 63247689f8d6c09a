//! Property tests driving whole games through the round state machine.

use proptest::prelude::*;
use time::OffsetDateTime;

use crate::config::RulesConfig;
use crate::domain::cards::CreatureType;
use crate::domain::claims::play_card;
use crate::domain::dealing::{build_deck, deal, shuffle};
use crate::domain::responses::respond_to_round;
use crate::domain::rules::DECK_SIZE;
use crate::domain::state::{Game, GameStatus, Player, PlayerId, RoundResponse};
use crate::domain::validator::validate_game_state;

const P1: PlayerId = 10;
const P2: PlayerId = 20;

fn dealt_game(seed: u64) -> (Game, [Player; 2]) {
    let dealt = deal(&shuffle(&build_deck(), seed)).unwrap();
    let mut game = Game::new(1, [P1, P2], OffsetDateTime::UNIX_EPOCH);
    game.status = GameStatus::InProgress;
    game.turn = Some(if seed % 2 == 0 { P1 } else { P2 });
    game.hidden = dealt.hidden;
    game.version = 1;
    let mut p1 = Player::new(P1);
    p1.hand = dealt.hand_a;
    let mut p2 = Player::new(P2);
    p2.hand = dealt.hand_b;
    (game, [p1, p2])
}

fn pile_totals(players: &[Player; 2]) -> usize {
    players.iter().map(|p| p.penalties.total()).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Drive a full game from a random seed and decision stream; every
    // committed step must preserve the structural invariants.
    #[test]
    fn random_playouts_preserve_invariants(
        seed in any::<u64>(),
        decisions in proptest::collection::vec(any::<u8>(), 200),
    ) {
        let rules = RulesConfig::default();
        let now = OffsetDateTime::UNIX_EPOCH;
        let (mut game, mut players) = dealt_game(seed);

        let mut last_version = game.version;
        let mut last_totals = pile_totals(&players);
        let mut decisions = decisions.into_iter();

        while game.status == GameStatus::InProgress {
            let Some(choice) = decisions.next() else { break };

            if let Some(round) = game.active_round() {
                let responder = round.target_player;
                let can_pass = round.pass_count < rules.max_passes;
                let response = match choice % 3 {
                    0 => RoundResponse::Believe,
                    1 => RoundResponse::Disbelieve,
                    _ if can_pass => RoundResponse::PassBack,
                    _ => RoundResponse::Disbelieve,
                };
                respond_to_round(&mut game, &mut players, responder, response, &rules, now)
                    .unwrap();
            } else {
                let actor = game.turn.unwrap();
                let target = game.opponent_of(actor).unwrap();
                let idx = players.iter().position(|p| p.id == actor).unwrap();
                if players[idx].hand.is_empty() {
                    // Out of cards: the playable game is over for this seed.
                    break;
                }
                let card = players[idx].hand[choice as usize % players[idx].hand.len()];
                let claim = CreatureType::ALL[choice as usize % 4];
                play_card(&mut game, &mut players, actor, card.id, claim, target).unwrap();
            }

            // Version strictly increases on every accepted action.
            prop_assert!(game.version > last_version);
            last_version = game.version;

            // Penalty piles are monotone and bounded by the deck.
            let totals = pile_totals(&players);
            prop_assert!(totals >= last_totals);
            prop_assert!(totals <= DECK_SIZE);
            last_totals = totals;

            let report = validate_game_state(&game, &players);
            prop_assert!(report.valid, "invariants broken: {:?}", report.errors);

            // Loss exactness: has_lost tracks the threshold precisely.
            for player in players.iter() {
                let over = CreatureType::ALL
                    .iter()
                    .any(|&c| player.penalties.count(c) >= rules.win_condition);
                prop_assert_eq!(player.has_lost, over);
                if player.has_lost {
                    let creature = player.losing_creature.unwrap();
                    prop_assert!(player.penalties.count(creature) >= rules.win_condition);
                }
            }
        }

        if game.status == GameStatus::Ended {
            prop_assert!(game.turn.is_none());
            let winner = game.winner.unwrap();
            prop_assert!(game.is_participant(winner));
            let loser = game.opponent_of(winner).unwrap();
            let loser_rec = players.iter().find(|p| p.id == loser).unwrap();
            prop_assert!(loser_rec.has_lost);
        }
    }

    // Turn alternation: the claim hands the turn to the target, a pass-back
    // flips it, and a resolution leaves it with the penalty receiver.
    #[test]
    fn turn_follows_the_card(seed in any::<u64>(), choice in any::<u8>()) {
        let rules = RulesConfig::default();
        let now = OffsetDateTime::UNIX_EPOCH;
        let (mut game, mut players) = dealt_game(seed);

        let actor = game.turn.unwrap();
        let target = game.opponent_of(actor).unwrap();
        let idx = players.iter().position(|p| p.id == actor).unwrap();
        let card = players[idx].hand[choice as usize % players[idx].hand.len()];
        play_card(&mut game, &mut players, actor, card.id, CreatureType::Mouse, target)
            .unwrap();
        prop_assert_eq!(game.turn, Some(target));

        respond_to_round(&mut game, &mut players, target, RoundResponse::PassBack, &rules, now)
            .unwrap();
        prop_assert_eq!(game.turn, Some(actor));

        let outcome = respond_to_round(
            &mut game,
            &mut players,
            actor,
            RoundResponse::Believe,
            &rules,
            now,
        )
        .unwrap();
        let receiver = outcome.resolution.unwrap().penalty_receiver;
        prop_assert_eq!(game.turn, Some(receiver));
    }
}
