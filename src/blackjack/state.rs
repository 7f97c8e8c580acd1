//! Round state types.

/// Blackjack round state.
///
/// A round moves `Idle → BetPlaced → PlayerTurn → DealerTurn → Resolved` and
/// back to `Idle` once the caller clears it. A player bust or a natural
/// skips straight to `Resolved` or `DealerTurn` respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for a bet.
    Idle,
    /// A bet is on the table; the round can be dealt.
    BetPlaced,
    /// Waiting for player actions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has been settled; waiting to be cleared.
    Resolved,
}

impl RoundState {
    /// Returns whether a dealt round is in progress.
    #[must_use]
    pub const fn in_round(self) -> bool {
        matches!(self, Self::PlayerTurn | Self::DealerTurn)
    }
}
