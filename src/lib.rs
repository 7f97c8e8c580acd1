//! Rule engines for Klondike solitaire and single-seat blackjack, with
//! optional `no_std` support.
//!
//! The crate provides two session types. [`Solitaire`] validates and applies
//! moves, deals and recycles the stock, scores, detects positions with no
//! legal action left and drives a heuristic autoplay one step at a time.
//! [`Table`] runs blackjack rounds against a dealer who stands on 17, from
//! betting through settlement.
//!
//! Neither type renders anything or owns a timer: the presentation layer
//! sends intents, reads snapshots back, and schedules the stepped loops
//! ([`Solitaire::autoplay_step`], [`Table::dealer_step`]) at its own cadence.
//!
//! # Example
//!
//! ```no_run
//! use cardcore::{Solitaire, SolitaireOptions, StepResult};
//!
//! let game = Solitaire::new(SolitaireOptions::default(), 42);
//! game.start_autoplay();
//! while let StepResult::Acted(step) = game.autoplay_step() {
//!     let _ = step.events;
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod blackjack;
pub mod card;
pub mod error;
pub mod hand;
pub mod options;
pub mod result;
pub mod solitaire;
pub mod step;
mod sync;

// Re-export main types
pub use blackjack::{DealerStep, Draw, RoundState, Table};
pub use card::{Card, Color, DECK_SIZE, Suit, standard_deck};
pub use error::{ActionError, BetError, DealError, MoveError, ShowdownError};
pub use hand::{DealerHand, Hand, HandStatus, HandValue, hand_value};
pub use options::{RoundingMode, SolitaireOptions, TableOptions};
pub use result::{HandOutcome, RoundResult};
pub use solitaire::{AutoMove, AutoplayStep, Board, Column, GameEvent, PileRef, Solitaire};
pub use step::StepResult;
