//! Result of one externally scheduled tick.

/// Outcome of a single step of an externally driven loop.
///
/// Both the solitaire autoplay and the blackjack dealer sequence are advanced
/// one transition per tick by the caller's scheduler. A step either performs
/// exactly one transition, finds nothing left to do, or observes that the loop
/// was cancelled and leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepResult<T> {
    /// One transition was performed.
    Acted(T),
    /// Nothing is left to do; the caller should stop scheduling steps.
    NoActionAvailable,
    /// The loop was stopped (or a new game started) before this tick ran.
    Cancelled,
}

impl<T> StepResult<T> {
    /// Returns whether a transition was performed.
    #[must_use]
    pub const fn is_acted(&self) -> bool {
        matches!(self, Self::Acted(_))
    }

    /// Returns the transition payload, if any.
    #[must_use]
    pub fn acted(self) -> Option<T> {
        match self {
            Self::Acted(value) => Some(value),
            Self::NoActionAvailable | Self::Cancelled => None,
        }
    }
}
