use crate::core::card::{Card, Suit, Value};
use std::slice::Iter;
use std::vec::IntoIter;

/// Deck of cards in a stable canonical order. Keeping the
/// cards ordered means the same removals always leave the
/// same deck behind, which a seeded shuffle can then rely on.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Card storage.
    cards: Vec<Card>,
}

impl Deck {
    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Given a card remove it from the deck if it is present.
    /// Returns false if the card was not there to remove.
    pub fn remove(&mut self, c: &Card) -> bool {
        match self.cards.iter().position(|deck_card| deck_card == c) {
            Some(idx) => {
                self.cards.remove(idx);
                true
            }
            None => false,
        }
    }

    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get an iterator from this deck
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    /// Create the default 52 card deck, value major.
    ///
    /// ```
    /// use holdem_advisor::core::Deck;
    ///
    /// assert_eq!(52, Deck::default().len());
    /// ```
    fn default() -> Self {
        let mut cards: Vec<Card> = Vec::with_capacity(52);
        for v in &Value::values() {
            for s in &Suit::suits() {
                cards.push(Card {
                    value: *v,
                    suit: *s,
                });
            }
        }
        Self { cards }
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = IntoIter<Card>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> IntoIter<Card> {
        self.cards.into_iter()
    }
}
