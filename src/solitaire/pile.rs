//! Pile references and tableau columns.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::MoveError;

/// Number of foundation piles.
pub const FOUNDATIONS: usize = 4;
/// Number of tableau columns.
pub const COLUMNS: usize = 7;

/// Identifies one pile on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PileRef {
    /// The face-down draw pile.
    Stock,
    /// The face-up discard pile; only its top card is playable.
    Waste,
    /// One of the four foundations, `0..4`.
    Foundation(usize),
    /// One of the seven tableau columns, `0..7`.
    Tableau(usize),
}

impl PileRef {
    /// Returns a checked reference to a foundation.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::PileOutOfRange`] if `index >= 4`.
    pub const fn foundation(index: usize) -> Result<Self, MoveError> {
        if index < FOUNDATIONS {
            Ok(Self::Foundation(index))
        } else {
            Err(MoveError::PileOutOfRange)
        }
    }

    /// Returns a checked reference to a tableau column.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::PileOutOfRange`] if `index >= 7`.
    pub const fn tableau(index: usize) -> Result<Self, MoveError> {
        if index < COLUMNS {
            Ok(Self::Tableau(index))
        } else {
            Err(MoveError::PileOutOfRange)
        }
    }

    /// Returns whether the index of this reference is in range.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        match self {
            Self::Stock | Self::Waste => true,
            Self::Foundation(index) => index < FOUNDATIONS,
            Self::Tableau(index) => index < COLUMNS,
        }
    }
}

/// A tableau column.
///
/// Index 0 is the bottom card. The first `face_down` cards are face down and
/// the rest are face up, so the face-up cards always form a contiguous run
/// ending at the top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Column {
    cards: Vec<Card>,
    face_down: usize,
}

impl Column {
    /// Creates a column from its face-down prefix and face-up suffix.
    #[must_use]
    pub fn new(face_down: Vec<Card>, face_up: Vec<Card>) -> Self {
        let hidden = face_down.len();
        let mut cards = face_down;
        cards.extend(face_up);
        Self {
            cards,
            face_down: hidden,
        }
    }

    /// Returns all cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the face-up run, bottom first.
    #[must_use]
    pub fn face_up(&self) -> &[Card] {
        &self.cards[self.face_down..]
    }

    /// Returns the number of face-down cards.
    #[must_use]
    pub const fn face_down_len(&self) -> usize {
        self.face_down
    }

    /// Returns whether the card at `index` is face up.
    #[must_use]
    pub fn is_face_up(&self, index: usize) -> bool {
        index >= self.face_down && index < self.cards.len()
    }

    /// Returns the top card, face up or not.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Returns the top card if it is face up.
    #[must_use]
    pub fn top_face_up(&self) -> Option<Card> {
        self.face_up().last().copied()
    }

    /// Returns whether the top card is face down.
    #[must_use]
    pub fn has_face_down_top(&self) -> bool {
        !self.cards.is_empty() && self.face_down == self.cards.len()
    }

    /// Returns whether the card directly beneath the top card is face down.
    #[must_use]
    pub fn top_covers_face_down(&self) -> bool {
        self.cards.len() > 1 && self.face_down == self.cards.len() - 1
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the column is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Finds `card` within the face-up run.
    pub(crate) fn locate(&self, card: Card) -> Result<usize, MoveError> {
        let index = self
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or(MoveError::CardNotFound)?;
        if index < self.face_down {
            return Err(MoveError::FaceDown);
        }
        Ok(index)
    }

    /// Removes and returns the cards from `index` to the top.
    pub(crate) fn take_from(&mut self, index: usize) -> Vec<Card> {
        self.cards.split_off(index)
    }

    /// Places a face-up run on top.
    pub(crate) fn push_run(&mut self, run: Vec<Card>) {
        if self.cards.is_empty() {
            self.face_down = 0;
        }
        self.cards.extend(run);
    }

    /// Turns the top card face up if it is face down.
    pub(crate) fn flip_top(&mut self) -> Option<Card> {
        if self.has_face_down_top() {
            self.face_down -= 1;
            self.top()
        } else {
            None
        }
    }
}
