//! Notifications produced by solitaire operations.

use crate::card::{Card, Suit};

use super::pile::PileRef;

/// Something the presentation layer may want to show after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A run of `count` cards starting at `card` moved between piles.
    Moved {
        /// The first (lowest) card of the run.
        card: Card,
        /// Number of cards moved.
        count: usize,
        /// Source pile.
        from: PileRef,
        /// Destination pile.
        to: PileRef,
    },
    /// A face-down tableau card was turned face up.
    Flipped {
        /// The card now face up.
        card: Card,
        /// Its column.
        column: usize,
    },
    /// Points were added to the score.
    Scored {
        /// Points added.
        points: u32,
    },
    /// One card was dealt from the stock onto the waste.
    StockDealt {
        /// The card dealt.
        card: Card,
    },
    /// The waste was turned back over into the stock.
    StockRecycled {
        /// Number of cards returned to the stock.
        count: usize,
    },
    /// A foundation now holds Ace through King.
    FoundationCompleted {
        /// The foundation index.
        foundation: usize,
        /// Its suit.
        suit: Suit,
    },
    /// All 52 cards are on the foundations.
    Won {
        /// Final score.
        score: u32,
        /// Final move count.
        moves: u32,
    },
    /// No legal action remains; the game is lost.
    Deadlocked,
}
