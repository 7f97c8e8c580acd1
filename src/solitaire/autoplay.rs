//! Heuristic autoplay.
//!
//! Each step picks exactly one action in strict priority order: foundation
//! moves, flips, tableau-to-tableau moves (preferring ones that uncover a
//! face-down card), waste-to-tableau moves, then stock deals. A short memory
//! of recent actions keeps the tableau moves from oscillating, and a recycle
//! cap bounds how often the waste is turned over. The heuristic is best
//! effort and can give up on a winnable deal.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::card::Card;
use crate::options::SolitaireOptions;

use super::board::Board;
use super::event::GameEvent;
use super::pile::PileRef;

const EXPOSES_FACE_DOWN: u32 = 10;
const PLAIN_TABLEAU_MOVE: u32 = 1;

/// An action chosen by autoplay.
///
/// Two actions compare equal when they are of the same kind, with the same
/// source, destination and card. All stock actions are equal to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutoMove {
    /// Move a tableau top card or the waste card onto a foundation.
    Foundation {
        /// The card moved.
        card: Card,
        /// Waste or a tableau column.
        from: PileRef,
        /// The foundation index.
        foundation: usize,
    },
    /// Turn a face-down tableau top card face up.
    Flip {
        /// The card turned.
        card: Card,
        /// Its column.
        column: usize,
    },
    /// Move a face-up tableau top card to another column.
    Tableau {
        /// The card moved.
        card: Card,
        /// Source column.
        from: usize,
        /// Destination column.
        to: usize,
    },
    /// Move the waste card onto a column.
    WasteToTableau {
        /// The card moved.
        card: Card,
        /// Destination column.
        column: usize,
    },
    /// Deal from the stock, or recycle the waste when the stock is empty.
    Stock,
}

/// Autoplay memory: recent actions and the recycle count.
#[derive(Debug, Clone)]
pub(crate) struct Autoplay {
    history: VecDeque<AutoMove>,
    memory: usize,
    recycles: u32,
    max_recycles: u32,
}

impl Autoplay {
    pub(crate) fn new(options: &SolitaireOptions) -> Self {
        Self {
            history: VecDeque::with_capacity(options.autoplay_memory + 1),
            memory: options.autoplay_memory,
            recycles: 0,
            max_recycles: options.autoplay_max_recycles,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.history.clear();
        self.recycles = 0;
    }

    fn is_recent(&self, action: &AutoMove) -> bool {
        self.history.contains(action)
    }

    fn record(&mut self, action: AutoMove) {
        self.history.push_back(action);
        while self.history.len() > self.memory {
            self.history.pop_front();
        }
    }

    /// Picks the next action without executing it.
    pub(crate) fn choose(&self, board: &Board) -> Option<AutoMove> {
        let action = find_foundation_move(board)
            .or_else(|| find_flip(board))
            .or_else(|| self.find_tableau_move(board))
            .or_else(|| self.find_waste_move(board))
            .or_else(|| self.can_use_stock(board).then_some(AutoMove::Stock));
        log::trace!("autoplay: chose {action:?}");
        action
    }

    fn find_tableau_move(&self, board: &Board) -> Option<AutoMove> {
        let mut best: Option<(u32, AutoMove)> = None;

        for (from, column) in board.tableau().iter().enumerate() {
            let Some(card) = column.top_face_up() else {
                continue;
            };
            let priority = if column.top_covers_face_down() {
                EXPOSES_FACE_DOWN
            } else {
                PLAIN_TABLEAU_MOVE
            };

            for to in (0..board.tableau().len()).filter(|&to| to != from) {
                if !board.is_valid_move(&[card], PileRef::Tableau(to)) {
                    continue;
                }
                let candidate = AutoMove::Tableau { card, from, to };
                if self.is_recent(&candidate) {
                    log::trace!("autoplay: skipping recent {candidate:?}");
                    continue;
                }
                if best.is_none_or(|(score, _)| priority > score) {
                    best = Some((priority, candidate));
                }
            }
        }

        best.map(|(_, action)| action)
    }

    fn find_waste_move(&self, board: &Board) -> Option<AutoMove> {
        let card = board.waste_top()?;
        (0..board.tableau().len())
            .filter(|&column| board.is_valid_move(&[card], PileRef::Tableau(column)))
            .map(|column| AutoMove::WasteToTableau { card, column })
            .find(|candidate| !self.is_recent(candidate))
    }

    fn can_use_stock(&self, board: &Board) -> bool {
        !board.stock().is_empty()
            || (!board.waste().is_empty() && self.recycles < self.max_recycles)
    }

    /// Executes `action` on `board` and records it.
    ///
    /// Returns `None` if the action no longer applies to the board.
    pub(crate) fn execute(
        &mut self,
        board: &mut Board,
        action: AutoMove,
    ) -> Option<Vec<GameEvent>> {
        let events = match action {
            AutoMove::Foundation {
                card,
                from,
                foundation,
            } => board
                .move_cards(card, from, PileRef::Foundation(foundation))
                .ok()?,
            AutoMove::Flip { column, .. } => board.flip_column(column)?,
            AutoMove::Tableau { card, from, to } => board
                .move_cards(card, PileRef::Tableau(from), PileRef::Tableau(to))
                .ok()?,
            AutoMove::WasteToTableau { card, column } => board
                .move_cards(card, PileRef::Waste, PileRef::Tableau(column))
                .ok()?,
            AutoMove::Stock => {
                if board.stock().is_empty() && !board.waste().is_empty() {
                    self.recycles += 1;
                }
                board.deal_from_stock().into_iter().collect()
            }
        };

        self.record(action);
        Some(events)
    }
}

fn find_foundation_move(board: &Board) -> Option<AutoMove> {
    let from_tableau = board.tableau().iter().enumerate().find_map(|(col, column)| {
        let card = column.top_face_up()?;
        let foundation = board.foundation_for(card)?;
        Some(AutoMove::Foundation {
            card,
            from: PileRef::Tableau(col),
            foundation,
        })
    });

    from_tableau.or_else(|| {
        let card = board.waste_top()?;
        let foundation = board.foundation_for(card)?;
        Some(AutoMove::Foundation {
            card,
            from: PileRef::Waste,
            foundation,
        })
    })
}

fn find_flip(board: &Board) -> Option<AutoMove> {
    board
        .tableau()
        .iter()
        .enumerate()
        .find(|(_, pile)| pile.has_face_down_top())
        .and_then(|(column, pile)| {
            let card = pile.top()?;
            Some(AutoMove::Flip { card, column })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    #[test]
    fn history_keeps_only_recent_moves() {
        let options = SolitaireOptions::default().with_autoplay_memory(2);
        let mut autoplay = Autoplay::new(&options);
        let card = Card::new(Suit::Hearts, 5);
        let first = AutoMove::Tableau { card, from: 0, to: 1 };

        autoplay.record(first);
        autoplay.record(AutoMove::Stock);
        assert!(autoplay.is_recent(&first));

        autoplay.record(AutoMove::Stock);
        assert!(!autoplay.is_recent(&first));
    }

    #[test]
    fn stock_moves_are_equivalent() {
        assert_eq!(AutoMove::Stock, AutoMove::Stock);
        let card = Card::new(Suit::Clubs, 7);
        assert_ne!(
            AutoMove::Tableau { card, from: 0, to: 1 },
            AutoMove::Tableau { card, from: 1, to: 0 }
        );
    }
}
