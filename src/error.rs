//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when moving solitaire cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The move breaks a placement rule.
    #[error("invalid move")]
    InvalidMove,
    /// A foundation or tableau index is out of range.
    #[error("pile index out of range")]
    PileOutOfRange,
    /// The card is not in the source pile.
    #[error("card not found in source pile")]
    CardNotFound,
    /// The card is face down and cannot be moved.
    #[error("card is face down")]
    FaceDown,
    /// The source pile has no cards.
    #[error("source pile is empty")]
    EmptySource,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// A round is already in progress.
    #[error("invalid round state for betting")]
    InvalidState,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round state for dealing.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// No bet has been placed.
    #[error("no bet has been placed")]
    NoBetPlaced,
    /// Not enough cards in the deck.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The action is not allowed at this point of the round.
    #[error("action not allowed at this point")]
    IllegalAction,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur while the dealer plays or the round is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid round state for the dealer or for clearing the round.
    #[error("invalid round state for showdown")]
    InvalidState,
}
