//! Move legality and state mutation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::MoveError;

use super::board::Board;
use super::event::GameEvent;
use super::pile::PileRef;

impl Board {
    /// Returns whether `card` may be placed on the given foundation.
    ///
    /// An empty foundation takes only an Ace; otherwise the card must match
    /// the foundation's suit and be exactly one rank higher than its top.
    #[must_use]
    pub fn can_move_to_foundation(&self, card: Card, foundation: usize) -> bool {
        let Some(pile) = self.foundations.get(foundation) else {
            return false;
        };

        match pile.last() {
            None => card.is_ace(),
            Some(top) => card.suit == top.suit && card.rank == top.rank + 1,
        }
    }

    /// Returns the first foundation that accepts `card`.
    #[must_use]
    pub fn foundation_for(&self, card: Card) -> Option<usize> {
        (0..self.foundations.len()).find(|&f| self.can_move_to_foundation(card, f))
    }

    /// Returns whether `run` may be placed on `to`.
    ///
    /// Foundations take a single card. An empty column takes a run starting
    /// with a King; otherwise the run's first card must be the opposite
    /// color of the column's face-up top card and one rank lower.
    #[must_use]
    pub fn is_valid_move(&self, run: &[Card], to: PileRef) -> bool {
        let Some(&first) = run.first() else {
            return false;
        };

        match to {
            PileRef::Foundation(index) => {
                run.len() == 1 && self.can_move_to_foundation(first, index)
            }
            PileRef::Tableau(index) => {
                let Some(column) = self.tableau.get(index) else {
                    return false;
                };
                if column.is_empty() {
                    return first.is_king();
                }
                column.top_face_up().is_some_and(|top| {
                    first.color() != top.color() && first.rank + 1 == top.rank
                })
            }
            PileRef::Stock | PileRef::Waste => false,
        }
    }

    /// Moves `card` and every card stacked above it from `from` to `to`.
    ///
    /// The source must be the waste (top card only) or a tableau column
    /// (any face-up card). If the move uncovers a face-down card in the
    /// source column, that card is turned face up. Scores and counts one
    /// move. Nothing changes when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if a pile index is out of range, the card is not
    /// playable from the source, or the placement rules reject the move.
    pub fn move_cards(
        &mut self,
        card: Card,
        from: PileRef,
        to: PileRef,
    ) -> Result<Vec<GameEvent>, MoveError> {
        if !from.is_valid() || !to.is_valid() {
            return Err(MoveError::PileOutOfRange);
        }
        if from == to || matches!(to, PileRef::Stock | PileRef::Waste) {
            return Err(MoveError::InvalidMove);
        }

        let start = match from {
            PileRef::Waste => {
                let top = self.waste.last().ok_or(MoveError::EmptySource)?;
                if *top != card {
                    return Err(MoveError::CardNotFound);
                }
                self.waste.len() - 1
            }
            PileRef::Tableau(index) => {
                let column = &self.tableau[index];
                if column.is_empty() {
                    return Err(MoveError::EmptySource);
                }
                column.locate(card)?
            }
            PileRef::Stock | PileRef::Foundation(_) => return Err(MoveError::InvalidMove),
        };

        let run_is_valid = match from {
            PileRef::Tableau(index) => {
                self.is_valid_move(&self.tableau[index].cards()[start..], to)
            }
            _ => self.is_valid_move(&self.waste[start..], to),
        };
        if !run_is_valid {
            return Err(MoveError::InvalidMove);
        }

        let run = match from {
            PileRef::Tableau(index) => self.tableau[index].take_from(start),
            _ => self.waste.split_off(start),
        };
        let count = run.len();

        self.place(run, to);

        let mut events = Vec::with_capacity(4);
        events.push(GameEvent::Moved {
            card,
            count,
            from,
            to,
        });

        let mut points = 0;
        if let PileRef::Tableau(index) = from {
            if let Some(flipped) = self.tableau[index].flip_top() {
                points += self.options.flip_reward;
                events.push(GameEvent::Flipped {
                    card: flipped,
                    column: index,
                });
            }
        }

        match (from, to) {
            (_, PileRef::Foundation(index)) => {
                points += self.options.foundation_reward;
                if self.foundations[index].len() == 13 {
                    events.push(GameEvent::FoundationCompleted {
                        foundation: index,
                        suit: card.suit,
                    });
                }
            }
            (PileRef::Waste, PileRef::Tableau(_)) => {
                points += self.options.waste_to_tableau_reward;
            }
            _ => {}
        }

        if points > 0 {
            self.score += points;
            events.push(GameEvent::Scored { points });
        }
        self.moves += 1;

        log::debug!("solitaire: moved {card} x{count} {from:?} -> {to:?} (+{points})");
        Ok(events)
    }

    fn place(&mut self, run: Vec<Card>, to: PileRef) {
        match to {
            PileRef::Foundation(index) => self.foundations[index].extend(run),
            PileRef::Tableau(index) => self.tableau[index].push_run(run),
            PileRef::Waste => self.waste.extend(run),
            PileRef::Stock => self.stock.extend(run),
        }
    }

    /// Deals one card from the stock to the waste, or recycles the waste.
    ///
    /// With an empty stock, the whole waste is turned back over face down, so
    /// the cards are drawn again in the order they were first dealt. Does
    /// nothing when both piles are empty.
    pub fn deal_from_stock(&mut self) -> Option<GameEvent> {
        if let Some(card) = self.stock.pop() {
            self.waste.push(card);
            self.moves += 1;
            log::debug!("solitaire: dealt {card} from stock");
            return Some(GameEvent::StockDealt { card });
        }

        if self.waste.is_empty() {
            return None;
        }

        let count = self.waste.len();
        self.stock.extend(self.waste.drain(..).rev());
        self.moves += 1;
        log::debug!("solitaire: recycled {count} cards into stock");
        Some(GameEvent::StockRecycled { count })
    }

    /// Turns the face-down top card of a column face up and scores it.
    ///
    /// Returns `None` if the column's top card is not face down.
    pub fn flip_column(&mut self, column: usize) -> Option<Vec<GameEvent>> {
        let card = self.tableau.get_mut(column)?.flip_top()?;
        let points = self.options.flip_reward;
        self.score += points;
        self.moves += 1;
        log::debug!("solitaire: flipped {card} in column {column}");

        let mut events = alloc::vec![GameEvent::Flipped { card, column }];
        if points > 0 {
            events.push(GameEvent::Scored { points });
        }
        Some(events)
    }
}
