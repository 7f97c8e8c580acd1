//! Detection of positions where no legal action remains.

use super::board::Board;
use super::pile::PileRef;

impl Board {
    /// Returns whether any action is still available.
    ///
    /// An action is available when a face-up tableau top or the waste card
    /// can reach a foundation, a face-up tableau top can move to another
    /// column, the waste card can move to a column, a column shows a
    /// face-down top card, or the stock or waste is non-empty (dealing and
    /// recycling always count). Only when none hold is the game lost.
    #[must_use]
    pub fn has_available_moves(&self) -> bool {
        self.tableau_to_foundation()
            || self.waste_to_foundation()
            || self.tableau_to_tableau()
            || self.waste_to_tableau()
            || self.tableau.iter().any(|column| column.has_face_down_top())
            || !self.stock.is_empty()
            || !self.waste.is_empty()
    }

    fn tableau_to_foundation(&self) -> bool {
        self.tableau
            .iter()
            .filter_map(|column| column.top_face_up())
            .any(|card| self.foundation_for(card).is_some())
    }

    fn waste_to_foundation(&self) -> bool {
        self.waste_top()
            .is_some_and(|card| self.foundation_for(card).is_some())
    }

    fn tableau_to_tableau(&self) -> bool {
        self.tableau.iter().enumerate().any(|(from, column)| {
            column.top_face_up().is_some_and(|card| {
                (0..self.tableau.len())
                    .filter(|&to| to != from)
                    .any(|to| self.is_valid_move(&[card], PileRef::Tableau(to)))
            })
        })
    }

    fn waste_to_tableau(&self) -> bool {
        self.waste_top().is_some_and(|card| {
            (0..self.tableau.len()).any(|to| self.is_valid_move(&[card], PileRef::Tableau(to)))
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;
    use crate::card::{Card, Suit};
    use crate::options::SolitaireOptions;
    use crate::solitaire::pile::Column;

    fn board(tableau: [Column; 7], waste: Vec<Card>, stock: Vec<Card>) -> Board {
        Board::from_layout(
            stock,
            waste,
            Default::default(),
            tableau,
            SolitaireOptions::default(),
        )
    }

    #[test]
    fn empty_board_is_stuck() {
        assert!(!board(Default::default(), vec![], vec![]).has_available_moves());
    }

    #[test]
    fn face_down_top_counts_as_available() {
        let mut tableau: [Column; 7] = Default::default();
        tableau[3] = Column::new(vec![Card::new(Suit::Clubs, 9)], vec![]);
        assert!(board(tableau, vec![], vec![]).has_available_moves());
    }

    #[test]
    fn non_empty_stock_counts_as_available() {
        let stock = vec![Card::new(Suit::Hearts, 4)];
        assert!(board(Default::default(), vec![], stock).has_available_moves());
    }
}
