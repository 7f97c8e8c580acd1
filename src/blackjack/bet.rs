use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{BetError, DealError};
use crate::hand::Hand;

use super::{RoundState, Table};

impl Table {
    /// Places (or replaces) the bet for the next round.
    ///
    /// Chips are not taken until the round is dealt.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress, the bet is zero, or the
    /// player lacks funds.
    pub fn place_bet(&self, amount: usize) -> Result<(), BetError> {
        let mut state = self.state.lock();
        if !matches!(*state, RoundState::Idle | RoundState::BetPlaced) {
            return Err(BetError::InvalidState);
        }

        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        if amount > *self.chips.lock() {
            return Err(BetError::InsufficientFunds);
        }

        *self.bet.lock() = amount;
        *state = RoundState::BetPlaced;
        drop(state);

        log::debug!("blackjack: bet placed: {amount}");
        Ok(())
    }

    /// Shuffles a fresh deck and deals the initial cards.
    ///
    /// Cards go player, dealer, player, dealer. A natural 21 auto-stands, so
    /// the round moves straight to the dealer's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed or a round is in progress.
    pub fn deal(&self) -> Result<(), DealError> {
        self.ensure_can_deal()?;
        let deck = self.shuffled_deck();
        self.deal_with(deck)
    }

    /// Deals the initial cards from a caller-supplied deck.
    ///
    /// Cards are drawn from the end of `deck`. This is the same as
    /// [`deal`](Self::deal) minus the shuffle, for replays and rigged rounds.
    ///
    /// # Errors
    ///
    /// Returns an error if no bet has been placed, a round is in progress, or
    /// the deck holds fewer than four cards.
    pub fn deal_with(&self, deck: Vec<Card>) -> Result<(), DealError> {
        self.ensure_can_deal()?;

        if deck.len() < 4 {
            return Err(DealError::NotEnoughCards);
        }

        let bet = *self.bet.lock();
        *self.chips.lock() -= bet;
        *self.deck.lock() = deck;
        *self.last_result.lock() = None;

        let mut hand = Hand::new(bet);
        self.dealer_hand.lock().clear();

        for _ in 0..2 {
            if let Some(card) = self.draw() {
                hand.add_card(card);
            }
            if let Some(card) = self.draw() {
                self.dealer_hand.lock().add_card(card);
            }
        }

        let natural = hand.is_natural();
        *self.hand.lock() = hand;

        if natural {
            log::debug!("blackjack: player dealt a natural");
            self.begin_dealer_turn();
        } else {
            *self.state.lock() = RoundState::PlayerTurn;
        }

        Ok(())
    }

    fn ensure_can_deal(&self) -> Result<(), DealError> {
        match self.state() {
            RoundState::Idle | RoundState::BetPlaced => {}
            _ => return Err(DealError::InvalidState),
        }

        let bet = *self.bet.lock();
        if bet == 0 || bet > *self.chips.lock() {
            return Err(DealError::NoBetPlaced);
        }

        Ok(())
    }
}
