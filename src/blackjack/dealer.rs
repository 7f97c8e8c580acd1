use core::sync::atomic::Ordering;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::hand::HandStatus;
use crate::options::RoundingMode;
use crate::result::{HandOutcome, RoundResult};
use crate::step::StepResult;

use super::{RoundState, Table};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// One transition of the dealer sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// The dealer drew a card.
    Drew(Card),
    /// The dealer stopped and the round was settled.
    Resolved(RoundResult),
}

impl Table {
    /// Advances the dealer sequence by one transition.
    ///
    /// Meant to be called by the presentation layer at its own cadence after
    /// the player stands. Each call either draws one dealer card or, once the
    /// dealer stops, settles the round.
    ///
    /// Returns `Cancelled` if the sequence was cancelled by
    /// [`new_game`](Self::new_game), and `NoActionAvailable` if the round is
    /// not in the dealer's turn.
    pub fn dealer_step(&self) -> StepResult<DealerStep> {
        if !self.dealer_live.is_raised() {
            return StepResult::Cancelled;
        }

        if *self.state.lock() != RoundState::DealerTurn {
            return StepResult::NoActionAvailable;
        }

        let must_draw = self
            .dealer_hand
            .lock()
            .must_draw(self.options.stand_on_soft_17);
        if must_draw {
            if let Some(card) = self.draw() {
                self.dealer_hand.lock().add_card(card);
                log::debug!("blackjack: dealer draws {card}");
                return StepResult::Acted(DealerStep::Drew(card));
            }
            log::warn!("blackjack: deck exhausted, dealer stands early");
        }

        StepResult::Acted(DealerStep::Resolved(self.settle()))
    }

    /// Dealer plays their hand to completion and the round is settled.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the dealer's turn.
    pub fn dealer_play(&self) -> Result<RoundResult, ShowdownError> {
        loop {
            match self.dealer_step() {
                StepResult::Acted(DealerStep::Drew(_)) => {}
                StepResult::Acted(DealerStep::Resolved(result)) => return Ok(result),
                StepResult::NoActionAvailable | StepResult::Cancelled => {
                    return Err(ShowdownError::InvalidState);
                }
            }
        }
    }

    /// Compares the hands, pays out and moves the round to `Resolved`.
    ///
    /// A natural that beats the dealer pays `blackjack_pays` on top of the
    /// stake; any other win pays even money; a push returns the stake.
    pub(super) fn settle(&self) -> RoundResult {
        self.dealer_live.lower();

        let mut dealer = self.dealer_hand.lock();
        dealer.reveal_hole();
        let dealer_value = dealer.value();
        let dealer_bust = dealer.is_bust();
        drop(dealer);

        let hand = self.hand.lock();
        let player_value = hand.value();
        let natural = hand.is_natural();
        let busted = hand.status() == HandStatus::Bust;
        drop(hand);

        let bet = *self.bet.lock();

        let (outcome, payout) = if busted {
            (HandOutcome::Bust, 0)
        } else if dealer_bust || player_value > dealer_value {
            if natural {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "f64 has sufficient precision for monetary values"
                )]
                let winnings = (bet as f64) * self.options.blackjack_pays;
                let rounded = round_amount(winnings, self.options.rounding_blackjack);
                (HandOutcome::Blackjack, bet + rounded)
            } else {
                (HandOutcome::Win, bet * 2)
            }
        } else if player_value < dealer_value {
            (HandOutcome::Lose, 0)
        } else {
            (HandOutcome::Push, bet)
        };

        let mut chips = self.chips.lock();
        *chips += payout;
        let chips_after = *chips;
        drop(chips);

        self.rounds_played.fetch_add(1, Ordering::SeqCst);
        *self.state.lock() = RoundState::Resolved;

        let result = RoundResult {
            outcome,
            bet,
            payout,
            player_value,
            dealer_value,
            dealer_bust,
            chips: chips_after,
            bankrupt: chips_after == 0,
        };
        *self.last_result.lock() = Some(result);

        log::debug!(
            "blackjack: round resolved {outcome:?} ({player_value} vs {dealer_value}), payout {payout}, chips {chips_after}"
        );

        result
    }
}
