//! Blackjack hands and hand valuation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Points a single rank contributes before any Ace is reduced.
const fn rank_points(rank: u8) -> u8 {
    match rank {
        1 => 11,
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

/// A valued set of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandValue {
    /// Best total not exceeding 21 where possible.
    pub total: u8,
    /// Whether an Ace is still counted as 11.
    pub soft: bool,
}

impl HandValue {
    /// Values `cards`.
    ///
    /// Aces start at 11. While the total is over 21 and an Ace is still
    /// counted high, that Ace drops to 1.
    #[must_use]
    pub fn of(cards: &[Card]) -> Self {
        let mut total: u8 = 0;
        let mut high_aces: u8 = 0;

        for card in cards {
            if card.is_ace() {
                high_aces += 1;
            }
            total = total.saturating_add(rank_points(card.rank));
        }

        while total > 21 && high_aces > 0 {
            total -= 10;
            high_aces -= 1;
        }

        Self {
            total,
            soft: high_aces > 0,
        }
    }

    /// Returns whether the total is over 21.
    #[must_use]
    pub const fn is_bust(self) -> bool {
        self.total > 21
    }
}

/// Returns the blackjack value of a set of cards.
///
/// Numerals count at face value, J/Q/K count 10 and Aces count 11 until the
/// total would exceed 21, at which point Aces are reduced to 1 one by one.
#[must_use]
pub fn hand_value(cards: &[Card]) -> u8 {
    HandValue::of(cards).total
}

/// Hand status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HandStatus {
    /// Still taking cards.
    #[default]
    Active,
    /// The player stood, or a double down or 21 stood for them.
    Stand,
    /// Over 21.
    Bust,
    /// 21 on the first two cards.
    Blackjack,
}

/// The player's hand and the stake riding on it.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
    status: HandStatus,
    bet: usize,
    doubled: bool,
}

impl Hand {
    /// Creates an empty hand carrying `bet`.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
            bet,
            doubled: false,
        }
    }

    /// Adds a card. The hand busts over 21 and is a blackjack at 21 on two
    /// cards; a stand is kept otherwise.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);

        let value = HandValue::of(&self.cards);
        if value.is_bust() {
            self.status = HandStatus::Bust;
        } else if self.is_natural() {
            self.status = HandStatus::Blackjack;
        }
    }

    /// Returns the cards, in the order dealt.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the hand status.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Overrides the hand status.
    pub const fn set_status(&mut self, status: HandStatus) {
        self.status = status;
    }

    /// Returns the stake on this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Doubles the stake.
    pub const fn double_bet(&mut self) {
        self.bet *= 2;
        self.doubled = true;
    }

    /// Returns whether the stake was doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns the full valuation.
    #[must_use]
    pub fn valued(&self) -> HandValue {
        HandValue::of(&self.cards)
    }

    /// Returns the hand total.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.valued().total
    }

    /// Returns whether an Ace is counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.valued().soft
    }

    /// Returns whether the hand is exactly two cards worth 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The dealer's hand. The second card is the hole card and stays hidden
/// until [`reveal_hole`](Self::reveal_hole).
#[derive(Debug, Clone, Default)]
pub struct DealerHand {
    cards: Vec<Card>,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates an empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards, hole card included.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the cards a player can see.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        if self.hole_revealed {
            &self.cards
        } else {
            &self.cards[..self.cards.len().min(1)]
        }
    }

    /// Returns whether the hole card is face up.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Turns the hole card face up.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Returns the value of the visible cards.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        hand_value(self.visible_cards())
    }

    /// Returns the full value, hole card included.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_value(&self.cards)
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        HandValue::of(&self.cards).is_bust()
    }

    /// Returns whether an Ace is counted as 11.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        HandValue::of(&self.cards).soft
    }

    /// Returns whether the fixed dealer strategy takes another card.
    ///
    /// The dealer draws below 17. A soft 17 is drawn to only when
    /// `stand_on_soft_17` is false.
    #[must_use]
    pub fn must_draw(&self, stand_on_soft_17: bool) -> bool {
        let HandValue { total, soft } = HandValue::of(&self.cards);
        total < 17 || (total == 17 && soft && !stand_on_soft_17)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether no card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Empties the hand and hides the next hole card.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole_revealed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn spades(ranks: &[u8]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(Suit::Spades, r)).collect()
    }

    fn value(total: u8, soft: bool) -> HandValue {
        HandValue { total, soft }
    }

    #[test]
    fn aces_reduce_one_at_a_time() {
        assert_eq!(HandValue::of(&spades(&[1, 1])), value(12, true));
        assert_eq!(HandValue::of(&spades(&[1, 1, 9])), value(21, true));
        assert_eq!(HandValue::of(&spades(&[1, 1, 9, 10])), value(21, false));
        assert_eq!(HandValue::of(&spades(&[13, 12, 2])), value(22, false));
    }

    #[test]
    fn face_cards_count_ten() {
        assert_eq!(hand_value(&spades(&[11, 12])), 20);
        assert_eq!(hand_value(&spades(&[13, 1])), 21);
    }

    #[test]
    fn dealer_stands_on_every_seventeen_by_default() {
        let mut dealer = DealerHand::new();
        for card in spades(&[10, 6]) {
            dealer.add_card(card);
        }
        assert!(dealer.must_draw(true));

        dealer.clear();
        for card in spades(&[1, 6]) {
            dealer.add_card(card);
        }
        assert!(!dealer.must_draw(true));
        assert!(dealer.must_draw(false));
    }

    #[test]
    fn hole_card_is_hidden_until_revealed() {
        let mut dealer = DealerHand::new();
        for card in spades(&[9, 13]) {
            dealer.add_card(card);
        }
        assert_eq!(dealer.visible_cards().len(), 1);
        assert_eq!(dealer.visible_value(), 9);

        dealer.reveal_hole();
        assert_eq!(dealer.visible_value(), 19);
    }
}
