//! Turn resolution: throws, the matching rule, draws, and settlement.
//!
//! ## Matching rule
//!
//! A played card (thrown from hand or turned up from the stock) meets its
//! month's pile:
//!
//! | pile before | outcome |
//! |---|---|
//! | 0 | laid on the pile |
//! | 1 | both cards captured |
//! | 2 | the player picks the partner (`AskCardToCapture`) |
//! | 3 | all four swept; the month's bbuck goes to the player |
//!
//! While a pairing question is open the played card sits on its pile, so
//! every card stays in exactly one place.
//!
//! ## Same-month precedence
//!
//! When the thrown card took a lone pile card and the stock turns up the
//! same month, the player chooses whether the three cards stay together on
//! the board or the pair stays captured.

use smallvec::SmallVec;
use tracing::debug;

use super::engine::Game;
use crate::cards::{Card, Month};
use crate::core::{
    Action, ActionError, CaptureChoice, CardBatch, CardSource, GameEvent, GameStatus, Pending,
    PlayerId, ThrowKind,
};

/// Scratch state for the turn in progress.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct TurnContext {
    /// The thrown card captured a lone pile card: that month and the pair.
    pub lone_capture: Option<(Month, [Card; 2])>,
}

impl Game {
    // === Throw validation ===

    /// Check a throw against the current player's hand and the board.
    ///
    /// A bomb needs hand + pile == 4 with at least two cards in hand, so a
    /// declined president goes down as a four-card bomb.
    pub(super) fn classify_throw(
        &self,
        card: Option<Card>,
        declare: bool,
    ) -> Result<ThrowKind, ActionError> {
        let player = self.current_player();

        let Some(card) = card else {
            if declare {
                return Err(ActionError::DeclarationOnToken);
            }
            if player.bomb_card_cnt() == 0 {
                return Err(ActionError::NoBombTokens);
            }
            return Ok(ThrowKind::Token);
        };

        if !player.holds(card) {
            return Err(ActionError::CardNotHeld(card));
        }

        let Some(month) = card.month() else {
            if declare {
                return Err(ActionError::IllegalDeclaration(card));
            }
            return Ok(ThrowKind::Bonus(card));
        };

        if !declare {
            return Ok(ThrowKind::Single(card));
        }

        let held: SmallVec<[Card; 4]> = player.hand_of_month(month).collect();
        let pile = self.board.pile_size(month);

        if held.len() == 3 && pile == 0 && !player.has_shaken(month) {
            Ok(ThrowKind::Shake(card))
        } else if matches!(held.len(), 2..=4) && held.len() + pile == 4 {
            Ok(ThrowKind::Bomb { month, cards: held })
        } else {
            Err(ActionError::IllegalDeclaration(card))
        }
    }

    // === Execution ===

    /// Carry out the accepted throw held in `pending`.
    pub(super) fn execute_throw(&mut self) {
        let Some(Pending::Throw(kind)) = self.pending.take() else {
            self.ask(GameStatus::AskCardToThrow, None);
            return;
        };
        let id = self.turn;
        self.ctx = TurnContext::default();

        let asked = match kind {
            ThrowKind::Bonus(card) => {
                self.throw_bonus(card);
                return;
            }
            ThrowKind::Single(card) => self.throw_single(card),
            ThrowKind::Shake(card) => {
                if let Some(month) = card.month() {
                    if self.players[id].shake(month) {
                        debug!(player = %id, %month, "shaken");
                        self.emit(GameEvent::Shaken { player: id, month });
                    }
                }
                self.throw_single(card)
            }
            ThrowKind::Bomb { month, cards } => {
                self.throw_bomb(month, &cards);
                false
            }
            ThrowKind::Token => {
                self.players[id].throw(None);
                self.emit(GameEvent::BombTokenSpent { player: id });
                false
            }
        };

        if !asked {
            self.draw_phase();
        }
    }

    /// Returns `true` if the throw opened a pairing question.
    fn throw_single(&mut self, card: Card) -> bool {
        let id = self.turn;
        self.players[id].throw(Some(card));
        self.emit(GameEvent::Thrown { player: id, card });
        self.play(card, CardSource::Hand)
    }

    /// Bonus card: captured at once, and every opponent surrenders a pi.
    fn throw_bonus(&mut self, card: Card) {
        let id = self.turn;
        self.players[id].throw(Some(card));
        self.emit(GameEvent::Thrown { player: id, card });

        let (thrower, others) = self.players.split_one_mut(id);
        thrower.acquire([card]);
        let mut transfers: SmallVec<[(PlayerId, Card); 2]> = SmallVec::new();
        for (from, other) in others {
            if let Some(pi) = other.remove_pi() {
                thrower.acquire([pi]);
                transfers.push((from, pi));
            }
        }

        self.emit(GameEvent::BonusCollected { player: id, card });
        for (from, pi) in transfers {
            debug!(%from, to = %id, card = %pi, "pi transferred");
            self.emit(GameEvent::PiTransferred { from, to: id, card: pi });
        }

        // A bonus thrown as the last hand card is followed by the draw
        if self.players[id].hand().is_empty() {
            self.draw_phase();
        } else {
            self.ask(GameStatus::AskCardToThrow, None);
        }
    }

    /// Every hand card of the month goes down together and takes the pile.
    fn throw_bomb(&mut self, month: Month, cards: &[Card]) {
        let id = self.turn;
        for &card in cards {
            self.players[id].throw(Some(card));
        }

        let mut taken: CardBatch = cards.iter().copied().collect();
        taken.extend(self.board.take_all(month));

        let player = &mut self.players[id];
        player.acquire(taken.iter().copied());
        player.record_bomb(cards.len());
        debug!(player = %id, %month, thrown = cards.len(), "bombed");
        self.emit(GameEvent::Bombed { player: id, month, cards: taken });
    }

    /// Apply the matching rule. Returns `true` if a pairing question opened.
    fn play(&mut self, card: Card, source: CardSource) -> bool {
        let id = self.turn;
        let Some(month) = card.month() else {
            return false;
        };

        match self.board.pile_size(month) {
            0 => {
                self.board.place(card);
                self.emit(GameEvent::Placed { player: id, card });
            }
            1 => {
                let other = self.board.pile(month)[0];
                self.board.take(other);
                self.capture([card, other]);
                if source == CardSource::Hand {
                    self.ctx.lone_capture = Some((month, [card, other]));
                }
            }
            2 => {
                let pile = self.board.pile(month);
                let candidates = [pile[0], pile[1]];
                self.board.place(card);
                self.ask(
                    GameStatus::AskCardToCapture,
                    Some(Pending::Capture(CaptureChoice::Pair { source, played: card, candidates })),
                );
                return true;
            }
            _ => {
                let mut swept = self.board.take_all(month);
                swept.push(card);
                self.board.set_bbuck(id, month);
                let player = &mut self.players[id];
                player.acquire(swept.iter().copied());
                player.record_bbuck();
                debug!(player = %id, %month, "swept");
                self.emit(GameEvent::Swept { player: id, month, cards: swept });
            }
        }
        false
    }

    fn capture(&mut self, cards: impl IntoIterator<Item = Card>) {
        let id = self.turn;
        let cards: CardBatch = cards.into_iter().collect();
        self.players[id].acquire(cards.iter().copied());
        self.emit(GameEvent::Captured { player: id, cards });
    }

    /// Turn up stock cards until a month card is played.
    ///
    /// Bonus cards turned up on the way go to the player at once.
    pub(super) fn draw_phase(&mut self) {
        let id = self.turn;
        loop {
            let Some(card) = self.stock.draw() else {
                self.finish_draw();
                return;
            };
            self.emit(GameEvent::Drawn { player: id, card });

            if card.is_bonus() {
                self.players[id].acquire([card]);
                self.emit(GameEvent::BonusCollected { player: id, card });
                continue;
            }

            if let Some((month, captured)) = self.ctx.lone_capture.take() {
                if card.month() == Some(month) {
                    self.board.place(card);
                    self.ask(
                        GameStatus::AskCardToCapture,
                        Some(Pending::Capture(CaptureChoice::SameMonth {
                            month,
                            captured,
                            drawn: card,
                        })),
                    );
                    return;
                }
            }

            if self.play(card, CardSource::Stock) {
                return;
            }
            break;
        }
        self.settle();
    }

    // === Capture answers ===

    pub(super) fn answer_pair(&mut self, card: Card) -> Result<(), ActionError> {
        let Some(Pending::Capture(CaptureChoice::Pair { source, played, candidates })) =
            self.pending.clone()
        else {
            return Err(ActionError::UnexpectedAction {
                status: self.status,
                action: Action::Capture { card },
            });
        };
        if !candidates.contains(&card) {
            return Err(ActionError::NotACandidate(card));
        }

        self.pending = None;
        self.board.take(played);
        self.board.take(card);
        self.capture([played, card]);

        match source {
            CardSource::Hand => self.draw_phase(),
            CardSource::Stock => self.settle(),
        }
        Ok(())
    }

    pub(super) fn answer_same_month(&mut self, stack: bool) -> Result<(), ActionError> {
        let Some(Pending::Capture(CaptureChoice::SameMonth { month, captured, drawn })) =
            self.pending.clone()
        else {
            return Err(ActionError::UnexpectedAction {
                status: self.status,
                action: Action::Stack { stack },
            });
        };

        self.pending = None;
        let id = self.turn;
        if stack {
            self.board.take(drawn);
            for card in captured {
                self.players[id].release(card);
                self.board.place(card);
            }
            self.board.place(drawn);
            debug!(player = %id, %month, "stacked");
            self.emit(GameEvent::Stacked { player: id, month });
        } else {
            self.emit(GameEvent::Placed { player: id, card: drawn });
        }

        self.settle();
        Ok(())
    }

    // === Presidents, go/stop, turn passing ===

    /// Offer the next president in seat order, or start play.
    pub(super) fn scan_presidents(&mut self) {
        while self.president_cursor < self.players.player_count() {
            let id = PlayerId::new(self.president_cursor as u8);
            self.president_cursor += 1;

            let months = self.players[id].president_months();
            if !months.is_empty() {
                debug!(player = %id, ?months, "president offered");
                self.turn = id;
                self.ask(
                    GameStatus::AskPresident,
                    Some(Pending::President { player: id, months }),
                );
                return;
            }
        }

        self.turn = PlayerId::new(0);
        self.begin_turn();
    }

    pub(super) fn answer_president(&mut self, go: bool) -> Result<(), ActionError> {
        let Some(Pending::President { player, months }) = self.pending.clone() else {
            return Err(ActionError::UnexpectedAction {
                status: self.status,
                action: Action::Go { go },
            });
        };
        let Some(&month) = months.first() else {
            return Err(ActionError::UnexpectedAction {
                status: self.status,
                action: Action::Go { go },
            });
        };

        if go {
            self.emit(GameEvent::President { player, month, claimed: false });
            self.ask(GameStatus::AnsweredPresident, None);
        } else {
            self.players[player].claim_president(month);
            self.emit(GameEvent::President { player, month, claimed: true });
            self.finish_win(player);
        }
        Ok(())
    }

    /// Close the turn: offer go/stop or pass to the next seat.
    pub(super) fn settle(&mut self) {
        let id = self.turn;
        self.ctx = TurnContext::default();

        let player = &self.players[id];
        let score = player.score(false);
        if score >= self.config.go_threshold() && player.can_say_go() {
            debug!(player = %id, score, "go or stop");
            self.ask(GameStatus::AskGoStop, Some(Pending::GoStop { player: id, score }));
            return;
        }

        self.pass_turn();
    }

    pub(super) fn answer_go_stop(&mut self, go: bool) {
        let id = self.turn;
        if go {
            let player = &mut self.players[id];
            let claimed = player.claim_go();
            debug_assert!(claimed, "go offered without a go-able score");
            let (go_count, score) = (player.go_cnt(), player.latest_go_score());
            debug!(player = %id, go_count, score, "go");
            self.emit(GameEvent::Go { player: id, go_count, score });
            self.pass_turn();
        } else {
            let score = self.players[id].score(true);
            debug!(player = %id, score, "stop");
            self.emit(GameEvent::Stopped { player: id, score });
            self.finish_win(id);
        }
    }

    fn pass_turn(&mut self) {
        self.turn = self.turn.next(self.players.player_count());
        if self.turn == PlayerId::new(0) {
            self.round += 1;
        }
        self.begin_turn();
    }

    fn begin_turn(&mut self) {
        self.ctx = TurnContext::default();
        if self.players[self.turn].can_play() {
            self.ask(GameStatus::AskCardToThrow, None);
        } else {
            debug!(player = %self.turn, "no cards left to play");
            self.finish_draw();
        }
    }

    fn finish_win(&mut self, id: PlayerId) {
        debug!(winner = %id, "game over");
        self.winner = Some(id);
        self.ask(GameStatus::Done, None);
    }

    fn finish_draw(&mut self) {
        debug!("game drawn");
        self.winner = None;
        self.ask(GameStatus::Draw, None);
        self.emit(GameEvent::Exhausted);
    }
}
