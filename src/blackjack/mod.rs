//! Single-seat blackjack table.

use core::sync::atomic::{AtomicU32, Ordering};

use alloc::vec::Vec;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::sync::{Flag, Mutex};

use crate::card::{Card, standard_deck};
use crate::error::ShowdownError;
use crate::hand::{DealerHand, Hand};
use crate::options::TableOptions;
use crate::result::RoundResult;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use actions::Draw;
pub use dealer::DealerStep;
pub use state::RoundState;

/// A blackjack table for one player against a fixed-strategy dealer.
///
/// The table owns the deck, the chip balance, the bet and both hands. Every
/// round is dealt from a freshly shuffled 52-card deck. Use [`TableOptions`]
/// to configure the starting stake, the natural payout and the soft 17 rule.
pub struct Table {
    /// Cards left in the current round's deck (drawn from the end).
    pub deck: Mutex<Vec<Card>>,
    /// Table options.
    pub options: TableOptions,
    /// Current round state.
    pub state: Mutex<RoundState>,
    /// Player chip balance.
    pub chips: Mutex<usize>,
    /// Bet for the current or next round.
    pub bet: Mutex<usize>,
    /// Player's hand.
    pub hand: Mutex<Hand>,
    /// Dealer's hand.
    pub dealer_hand: Mutex<DealerHand>,
    /// Rounds settled since the last full reset.
    rounds_played: AtomicU32,
    /// Raised while a dealer sequence is pending; lowered by `new_game`.
    dealer_live: Flag,
    /// Result of the most recently settled round.
    last_result: Mutex<Option<RoundResult>>,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Table {
    /// Creates a new table with the given seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cardcore::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 42);
    /// assert_eq!(table.chips(), 1000);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        let chips = options.starting_chips;

        Self {
            deck: Mutex::new(Vec::new()),
            options,
            state: Mutex::new(RoundState::Idle),
            chips: Mutex::new(chips),
            bet: Mutex::new(0),
            hand: Mutex::new(Hand::new(0)),
            dealer_hand: Mutex::new(DealerHand::new()),
            rounds_played: AtomicU32::new(0),
            dealer_live: Flag::new(false),
            last_result: Mutex::new(None),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Creates and shuffles a fresh 52-card deck.
    fn shuffled_deck(&self) -> Vec<Card> {
        let mut cards = standard_deck();
        cards.shuffle(&mut *self.rng.lock());
        cards
    }

    /// Draws a card from the deck.
    fn draw(&self) -> Option<Card> {
        self.deck.lock().pop()
    }

    /// Starts over: restores the starting stake and clears the round counter.
    ///
    /// Any pending dealer sequence is cancelled; later
    /// [`dealer_step`](Self::dealer_step) calls return `Cancelled`.
    pub fn new_game(&self) {
        self.dealer_live.lower();
        *self.chips.lock() = self.options.starting_chips;
        self.rounds_played.store(0, Ordering::SeqCst);
        *self.last_result.lock() = None;
        self.reset_round();
        log::debug!(
            "blackjack: new game with {} chips",
            self.options.starting_chips
        );
    }

    fn reset_round(&self) {
        *self.bet.lock() = 0;
        *self.hand.lock() = Hand::new(0);
        self.dealer_hand.lock().clear();
        self.deck.lock().clear();
        *self.state.lock() = RoundState::Idle;
    }

    /// Clears a settled round (called after the result has been displayed).
    ///
    /// Returns `true` if the player had run out of chips and the table was
    /// reset to the starting stake, `false` if it simply returned to `Idle`.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been resolved.
    pub fn clear_round(&self) -> Result<bool, ShowdownError> {
        if *self.state.lock() != RoundState::Resolved {
            return Err(ShowdownError::InvalidState);
        }

        if *self.chips.lock() == 0 {
            log::debug!("blackjack: out of chips, resetting table");
            self.new_game();
            return Ok(true);
        }

        self.reset_round();
        Ok(false)
    }

    /// Returns the current round state.
    pub fn state(&self) -> RoundState {
        *self.state.lock()
    }

    /// Returns the chip balance (excluding a bet already on the table).
    pub fn chips(&self) -> usize {
        *self.chips.lock()
    }

    /// Returns the current bet.
    pub fn bet(&self) -> usize {
        *self.bet.lock()
    }

    /// Returns the number of rounds settled since the last reset.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played.load(Ordering::SeqCst)
    }

    /// Returns the number of cards left in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns a clone of the player's hand.
    pub fn hand(&self) -> Hand {
        self.hand.lock().clone()
    }

    /// Returns a clone of the dealer's hand.
    pub fn dealer_hand(&self) -> DealerHand {
        self.dealer_hand.lock().clone()
    }

    /// Returns the result of the most recently settled round.
    pub fn last_result(&self) -> Option<RoundResult> {
        *self.last_result.lock()
    }
}
