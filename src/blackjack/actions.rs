use crate::card::Card;
use crate::error::ActionError;
use crate::hand::HandStatus;
use crate::result::RoundResult;

use super::{RoundState, Table};

/// A card drawn by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    /// The card drawn.
    pub card: Card,
    /// The player's hand value after the draw.
    pub value: u8,
    /// The settled round, if the draw busted the hand.
    pub result: Option<RoundResult>,
}

impl Table {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if *self.state.lock() != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Reveals the hole card and hands the round to the dealer.
    pub(super) fn begin_dealer_turn(&self) {
        self.dealer_hand.lock().reveal_hole();
        *self.state.lock() = RoundState::DealerTurn;
        self.dealer_live.raise();
    }

    /// Returns whether double down is currently allowed.
    pub fn can_double(&self) -> bool {
        if *self.state.lock() != RoundState::PlayerTurn {
            return false;
        }
        let bet = *self.bet.lock();
        self.hand.lock().len() == 2 && *self.chips.lock() >= bet
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust settles the round as a loss; reaching 21 stands automatically.
    /// After a hit, double down is no longer available.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    pub fn hit(&self) -> Result<Draw, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw().ok_or(ActionError::NoCards)?;

        let mut hand = self.hand.lock();
        hand.add_card(card);
        let value = hand.value();
        let status = hand.status();
        drop(hand);

        log::debug!("blackjack: player hits {card}, value {value}");

        let result = if status == HandStatus::Bust {
            Some(self.settle())
        } else {
            if value == 21 {
                self.hand.lock().set_status(HandStatus::Stand);
                self.begin_dealer_turn();
            }
            None
        };

        Ok(Draw {
            card,
            value,
            result,
        })
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Reveals the dealer's hole card; the dealer then plays through
    /// [`dealer_step`](Self::dealer_step) or [`dealer_play`](Self::dealer_play).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.hand.lock().set_status(HandStatus::Stand);
        self.begin_dealer_turn();

        Ok(())
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn, the hand no longer
    /// holds exactly its first two cards, the player cannot cover the bet
    /// again, or the deck is empty.
    pub fn double_down(&self) -> Result<Draw, ActionError> {
        self.ensure_player_turn()?;

        if self.hand.lock().len() != 2 {
            return Err(ActionError::IllegalAction);
        }

        let bet = *self.bet.lock();
        let mut chips = self.chips.lock();
        if *chips < bet {
            return Err(ActionError::InsufficientFunds);
        }

        let card = self.draw().ok_or(ActionError::NoCards)?;

        *chips -= bet;
        drop(chips);
        *self.bet.lock() = bet * 2;

        let mut hand = self.hand.lock();
        hand.double_bet();
        hand.add_card(card);
        let value = hand.value();
        let status = hand.status();
        if status == HandStatus::Active {
            hand.set_status(HandStatus::Stand);
        }
        drop(hand);

        log::debug!("blackjack: player doubles to {}, draws {card}", bet * 2);

        let result = if status == HandStatus::Bust {
            Some(self.settle())
        } else {
            self.begin_dealer_turn();
            None
        };

        Ok(Draw {
            card,
            value,
            result,
        })
    }
}
