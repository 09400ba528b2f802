//! Shared helpers for stacked-deck scenarios.

#![allow(dead_code)]

use gostop::cards::{Card, Month};
use gostop::core::{GameConfig, GameEvent};
use gostop::game::Game;

/// Build a deck that deals the named cards where asked.
///
/// Hands and the board are topped up from the unnamed cards taken one per
/// month at a time (every month's first card, then every month's second
/// card, and so on), so short runs of filler never hold a full month.
/// Bonus cards are never used as filler. The stock starts with
/// `stock_front` and continues with the leftover filler.
pub fn stacked_deck(
    player_count: usize,
    hands: &[&[Card]],
    board: &[Card],
    stock_front: &[Card],
) -> Vec<Card> {
    let config = GameConfig::new(player_count);
    let named: Vec<Card> = hands
        .iter()
        .flat_map(|h| h.iter().copied())
        .chain(board.iter().copied())
        .chain(stock_front.iter().copied())
        .collect();

    let mut filler: Vec<Card> = Card::ALL
        .iter()
        .copied()
        .filter(|c| !named.contains(c))
        .collect();
    filler.sort_by_key(|c| (c.is_bonus(), c.code() % 4, c.code()));
    let mut filler = filler.into_iter();

    let mut deck = Vec::with_capacity(Card::COUNT);
    for seat in 0..player_count {
        let hand = hands.get(seat).copied().unwrap_or(&[]);
        deck.extend_from_slice(hand);
        deck.extend(filler.by_ref().take(config.hand_size() - hand.len()));
    }
    deck.extend_from_slice(board);
    deck.extend(filler.by_ref().take(config.board_size() - board.len()));
    deck.extend_from_slice(stock_front);
    deck.extend(filler);
    deck
}

/// Deal a stacked deck, panicking if the deal is refused.
pub fn stacked_game(
    config: GameConfig,
    hands: &[&[Card]],
    board: &[Card],
    stock_front: &[Card],
) -> Game {
    let deck = stacked_deck(config.player_count, hands, board, stock_front);
    Game::with_deck(config, deck).expect("stacked deal refused")
}

pub fn month(n: u8) -> Month {
    Month::new(n).expect("month out of range")
}

/// True if any recorded event matches.
pub fn has_event(game: &Game, pred: impl Fn(&GameEvent) -> bool) -> bool {
    game.events().iter().any(pred)
}
