//! Presidents: four cards of one month dealt to a hand.

mod common;

use common::{has_event, month, stacked_deck, stacked_game};
use gostop::cards::Card;
use gostop::core::{
    Action, ActionError, DealError, GameConfig, GameEvent, GameStatus, Pending, PlayerId,
    PresidentRedeal,
};
use gostop::game::Game;
use smallvec::smallvec;

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

const ALL_JAN: &[Card] = &[Card::JanBright, Card::JanRedRibbon, Card::JanPi1, Card::JanPi2];
const ALL_MAY: &[Card] = &[Card::MayBridge, Card::MayRibbon, Card::MayPi1, Card::MayPi2];

fn board_only() -> GameConfig {
    GameConfig::new(2).with_president_redeal(PresidentRedeal::BoardOnly)
}

/// Under the default policy a hand president is a misdeal.
#[test]
fn test_hand_president_refused_by_default() {
    let deck = stacked_deck(2, &[ALL_JAN], &[], &[]);
    let result = Game::with_deck(GameConfig::new(2), deck);

    assert_eq!(
        result.err(),
        Some(DealError::President { month: month(1), holder: Some(P0) })
    );
}

/// A board president is a misdeal under either policy.
#[test]
fn test_board_president_always_refused() {
    let deck = stacked_deck(2, &[], ALL_JAN, &[]);
    let result = Game::with_deck(board_only(), deck);

    assert_eq!(
        result.err(),
        Some(DealError::President { month: month(1), holder: None })
    );
}

/// The holder is asked before anyone throws; only go answers are accepted.
#[test]
fn test_president_is_offered() {
    let mut game = stacked_game(board_only(), &[ALL_JAN], &[], &[]);

    assert_eq!(game.status(), GameStatus::AskPresident);
    assert_eq!(game.turn(), P0);
    assert_eq!(
        game.pending(),
        Some(&Pending::President { player: P0, months: smallvec![month(1)] })
    );
    assert_eq!(
        game.legal_actions(),
        vec![Action::Go { go: true }, Action::Go { go: false }]
    );
    assert!(matches!(
        game.try_action(Action::throw(Card::JanBright)),
        Err(ActionError::UnexpectedAction { status: GameStatus::AskPresident, .. })
    ));
    assert!(game.history().is_empty());
}

/// Claiming the president wins the match outright.
#[test]
fn test_president_claim_wins() {
    let mut game = stacked_game(board_only(), &[ALL_JAN], &[], &[]);

    assert!(game.action(Action::Go { go: false }));

    assert_eq!(game.status(), GameStatus::Done);
    assert_eq!(game.winner(), Some(P0));
    assert_eq!(game.player(P0).president_cnt(), 1);
    assert!(has_event(&game, |e| *e
        == GameEvent::President { player: P0, month: month(1), claimed: true }));
    assert_eq!(game.try_action(Action::Go { go: true }), Err(ActionError::GameOver));
}

/// Declining keeps the four cards in hand and play starts with seat 0.
#[test]
fn test_president_declined() {
    let mut game = stacked_game(board_only(), &[ALL_JAN], &[], &[]);

    assert!(game.action(Action::Go { go: true }));

    assert_eq!(game.status(), GameStatus::AskCardToThrow);
    assert_eq!(game.turn(), P0);
    assert_eq!(game.player(P0).president_cnt(), 0);
    for &card in ALL_JAN {
        assert!(game.player(P0).holds(card));
    }
    assert!(has_event(&game, |e| *e
        == GameEvent::President { player: P0, month: month(1), claimed: false }));
}

/// Presidents are offered seat by seat.
#[test]
fn test_presidents_scanned_in_seat_order() {
    let mut game = stacked_game(board_only(), &[ALL_JAN, ALL_MAY], &[], &[]);

    assert_eq!(game.turn(), P0);
    assert!(game.action(Action::Go { go: true }));

    assert_eq!(game.status(), GameStatus::AskPresident);
    assert_eq!(game.turn(), P1);
    assert_eq!(
        game.pending(),
        Some(&Pending::President { player: P1, months: smallvec![month(5)] })
    );

    assert!(game.action(Action::Go { go: true }));
    assert_eq!(game.status(), GameStatus::AskCardToThrow);
    assert_eq!(game.turn(), P0);
    assert_eq!(game.history().len(), 2);
    assert!(game.check_invariants().is_ok());
}

/// Seat 1 can claim after seat 0 declined.
#[test]
fn test_second_seat_claims() {
    let mut game = stacked_game(board_only(), &[ALL_JAN, ALL_MAY], &[], &[]);

    assert!(game.action(Action::Go { go: true }));
    assert!(game.action(Action::Go { go: false }));

    assert_eq!(game.status(), GameStatus::Done);
    assert_eq!(game.winner(), Some(P1));
    assert_eq!(game.player(P1).president_cnt(), 1);
}
