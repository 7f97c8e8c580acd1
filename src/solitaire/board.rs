//! Solitaire board state.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE};
use crate::options::SolitaireOptions;

use super::pile::{COLUMNS, Column, FOUNDATIONS, PileRef};

/// A full solitaire position: every pile plus score and move count.
///
/// Cloning a board yields an immutable snapshot for rendering. The board is
/// only mutated through the rule operations in this module's siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Draw pile, all face down; the top is the last card.
    pub(crate) stock: Vec<Card>,
    /// Discard pile, face up; the top is the last card.
    pub(crate) waste: Vec<Card>,
    /// Foundations, each ascending from Ace in a single suit.
    pub(crate) foundations: [Vec<Card>; FOUNDATIONS],
    /// Tableau columns.
    pub(crate) tableau: [Column; COLUMNS],
    /// Current score.
    pub(crate) score: u32,
    /// Number of moves made.
    pub(crate) moves: u32,
    /// Scoring rules applied by moves on this board.
    pub(crate) options: SolitaireOptions,
}

impl Board {
    /// Deals a deck in the classic layout.
    ///
    /// Cards are taken from the end of `deck`. Column `i` receives `i + 1`
    /// cards with only the last one face up; the rest form the stock.
    #[must_use]
    pub fn deal(deck: Vec<Card>, options: SolitaireOptions) -> Self {
        let mut stock = deck;
        let mut tableau: [Column; COLUMNS] = Default::default();

        for (col, column) in tableau.iter_mut().enumerate() {
            let mut hidden = Vec::with_capacity(col);
            for _ in 0..col {
                if let Some(card) = stock.pop() {
                    hidden.push(card);
                }
            }
            let shown: Vec<Card> = stock.pop().into_iter().collect();
            *column = Column::new(hidden, shown);
        }

        Self {
            stock,
            waste: Vec::new(),
            foundations: Default::default(),
            tableau,
            score: 0,
            moves: 0,
            options,
        }
    }

    /// Builds a board from explicit piles, with zero score and moves.
    ///
    /// Stock cards are face down and waste cards face up. No card-count
    /// check is made, so partial positions can be set up for analysis.
    #[must_use]
    pub fn from_layout(
        stock: Vec<Card>,
        waste: Vec<Card>,
        foundations: [Vec<Card>; FOUNDATIONS],
        tableau: [Column; COLUMNS],
        options: SolitaireOptions,
    ) -> Self {
        Self {
            stock,
            waste,
            foundations,
            tableau,
            score: 0,
            moves: 0,
            options,
        }
    }

    /// Returns the stock, bottom first.
    #[must_use]
    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    /// Returns the waste, bottom first.
    #[must_use]
    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    /// Returns the playable waste card.
    #[must_use]
    pub fn waste_top(&self) -> Option<Card> {
        self.waste.last().copied()
    }

    /// Returns all foundations.
    #[must_use]
    pub const fn foundations(&self) -> &[Vec<Card>; FOUNDATIONS] {
        &self.foundations
    }

    /// Returns one foundation.
    #[must_use]
    pub fn foundation(&self, index: usize) -> Option<&[Card]> {
        self.foundations.get(index).map(Vec::as_slice)
    }

    /// Returns all tableau columns.
    #[must_use]
    pub const fn tableau(&self) -> &[Column; COLUMNS] {
        &self.tableau
    }

    /// Returns one tableau column.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.tableau.get(index)
    }

    /// Returns the cards of a pile, bottom first.
    #[must_use]
    pub fn pile(&self, pile: PileRef) -> Option<&[Card]> {
        match pile {
            PileRef::Stock => Some(&self.stock),
            PileRef::Waste => Some(&self.waste),
            PileRef::Foundation(index) => self.foundation(index),
            PileRef::Tableau(index) => self.column(index).map(Column::cards),
        }
    }

    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Returns the number of moves made.
    #[must_use]
    pub const fn moves(&self) -> u32 {
        self.moves
    }

    /// Returns the number of cards on the foundations.
    #[must_use]
    pub fn foundation_count(&self) -> usize {
        self.foundations.iter().map(Vec::len).sum()
    }

    /// Returns the number of cards across all piles.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.stock.len()
            + self.waste.len()
            + self.foundation_count()
            + self.tableau.iter().map(Column::len).sum::<usize>()
    }

    /// Returns whether all 52 cards are on the foundations.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.foundation_count() == DECK_SIZE
    }

    /// Iterates over every card on the board.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.stock
            .iter()
            .chain(&self.waste)
            .chain(self.foundations.iter().flatten())
            .chain(self.tableau.iter().flat_map(Column::cards))
            .copied()
    }
}
