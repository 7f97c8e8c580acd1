//! Game configuration options.

/// Rounding mode for payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a solitaire session.
///
/// The defaults reproduce the standard scoring: +5 for a flip, +10 for any
/// card reaching a foundation, +5 for a waste card played to the tableau.
///
/// ```
/// use cardcore::SolitaireOptions;
///
/// let options = SolitaireOptions::default()
///     .with_foundation_reward(15)
///     .with_autoplay_max_recycles(1);
/// assert_eq!(options.flip_reward, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolitaireOptions {
    /// Points for turning a face-down tableau card face up.
    pub flip_reward: u32,
    /// Points for moving a card onto a foundation.
    pub foundation_reward: u32,
    /// Points for moving the waste card onto the tableau.
    pub waste_to_tableau_reward: u32,
    /// Number of recent autoplay actions remembered to avoid repetition.
    pub autoplay_memory: usize,
    /// How many times autoplay may recycle the waste back into the stock.
    pub autoplay_max_recycles: u32,
}

impl Default for SolitaireOptions {
    fn default() -> Self {
        Self {
            flip_reward: 5,
            foundation_reward: 10,
            waste_to_tableau_reward: 5,
            autoplay_memory: 10,
            autoplay_max_recycles: 3,
        }
    }
}

impl SolitaireOptions {
    /// Sets the flip reward.
    ///
    /// # Example
    ///
    /// ```
    /// use cardcore::SolitaireOptions;
    ///
    /// let options = SolitaireOptions::default().with_flip_reward(0);
    /// assert_eq!(options.flip_reward, 0);
    /// ```
    #[must_use]
    pub const fn with_flip_reward(mut self, points: u32) -> Self {
        self.flip_reward = points;
        self
    }

    /// Sets the foundation reward.
    #[must_use]
    pub const fn with_foundation_reward(mut self, points: u32) -> Self {
        self.foundation_reward = points;
        self
    }

    /// Sets the waste-to-tableau reward.
    #[must_use]
    pub const fn with_waste_to_tableau_reward(mut self, points: u32) -> Self {
        self.waste_to_tableau_reward = points;
        self
    }

    /// Sets how many recent autoplay actions are remembered.
    ///
    /// # Example
    ///
    /// ```
    /// use cardcore::SolitaireOptions;
    ///
    /// let options = SolitaireOptions::default().with_autoplay_memory(4);
    /// assert_eq!(options.autoplay_memory, 4);
    /// ```
    #[must_use]
    pub const fn with_autoplay_memory(mut self, moves: usize) -> Self {
        self.autoplay_memory = moves;
        self
    }

    /// Sets how many times autoplay may recycle the waste.
    #[must_use]
    pub const fn with_autoplay_max_recycles(mut self, recycles: u32) -> Self {
        self.autoplay_max_recycles = recycles;
        self
    }
}

/// Configuration options for a blackjack table.
///
/// ```
/// use cardcore::TableOptions;
///
/// let options = TableOptions::default()
///     .with_starting_chips(500)
///     .with_stand_on_soft_17(false);
/// assert_eq!(options.blackjack_pays, 1.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Chips the player starts with, and is restored to after going broke.
    pub starting_chips: usize,
    /// Natural blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            starting_chips: 1000,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Down,
            stand_on_soft_17: true,
        }
    }
}

impl TableOptions {
    /// Sets the starting chip balance.
    ///
    /// # Example
    ///
    /// ```
    /// use cardcore::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_chips(250);
    /// assert_eq!(options.starting_chips, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use cardcore::TableOptions;
    ///
    /// let options = TableOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use cardcore::TableOptions;
    ///
    /// let options = TableOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }
}
