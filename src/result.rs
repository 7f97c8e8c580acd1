//! Round result types for blackjack settlement.

/// Result of the player's hand after the round is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Natural 21 on the first two cards beat the dealer (pays 3:2 by default).
    Blackjack,
    /// Player wins even money (dealer busts or player has higher value).
    Win,
    /// Push (tie); the bet is returned.
    Push,
    /// Dealer has the higher value.
    Lose,
    /// Player went over 21.
    Bust,
}

impl HandOutcome {
    /// Returns whether the outcome pays the player more than the bet back.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::Blackjack | Self::Win)
    }
}

/// Result of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The bet amount, including a double down.
    pub bet: usize,
    /// Chips returned to the player (stake plus winnings).
    pub payout: usize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// The chip balance after settlement.
    pub chips: usize,
    /// Whether the player is out of chips; clearing the round resets the table.
    pub bankrupt: bool,
}

impl RoundResult {
    /// Net result of the round (positive = profit, negative = loss).
    #[must_use]
    pub const fn net(&self) -> isize {
        #[expect(clippy::cast_possible_wrap, reason = "chip values fit in isize")]
        let net = self.payout as isize - self.bet as isize;
        net
    }
}
