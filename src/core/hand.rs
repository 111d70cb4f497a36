use crate::core::card::{Card, Suit, Value};
use crate::core::error::AdvisorError;
use std::ops::{Index, Range, RangeFrom, RangeFull, RangeTo};
use std::slice::Iter;

/// Struct to hold cards.
///
/// This doesn't have the ability to easily check if a card is
/// in the hand. So do that before adding/removing a card.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Hand {
    /// Where all the cards are placed un-ordered.
    cards: Vec<Card>,
}

impl Hand {
    /// Create the default empty hand.
    pub fn new() -> Self {
        Self { cards: vec![] }
    }

    /// Create the hand with specific cards.
    pub fn new_with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// From a str create a new hand.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_advisor::core::Hand;
    /// let hand = Hand::new_from_str("AdKd").unwrap();
    /// assert_eq!(2, hand.len());
    /// ```
    ///
    /// Anything that can't be parsed will return an error.
    ///
    /// ```
    /// use holdem_advisor::core::Hand;
    /// let hand = Hand::new_from_str("AdKx");
    /// assert!(hand.is_err());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, AdvisorError> {
        // Get the chars iterator.
        let mut chars = hand_string.chars();
        // Where we will put the cards
        //
        // We make the assumption that a hand is two hole cards
        // plus up to a five card board.
        let mut cards: Vec<Card> = Vec::with_capacity(7);

        // Keep looping until we explicitly break
        loop {
            // Now try and get a char.
            let vco = chars.next();
            // If there was no char then we are done.
            if vco.is_none() {
                break;
            } else {
                // If we got a value char then we should get a
                // suit.
                let sco = chars.next();
                // Now try and parse the two chars that we have.
                let v = vco
                    .and_then(Value::from_char)
                    .ok_or(AdvisorError::UnexpectedValueChar)?;
                let s = sco
                    .and_then(Suit::from_char)
                    .ok_or(AdvisorError::UnexpectedSuitChar)?;

                let c = Card { value: v, suit: s };
                if cards.contains(&c) {
                    return Err(AdvisorError::DuplicateCard(c));
                }
                cards.push(c);
            }
        }

        Ok(Self { cards })
    }

    /// Add card to the hand.
    /// No verification is done at all.
    pub fn push(&mut self, c: Card) {
        self.cards.push(c);
    }

    /// Truncate the hand down to the given number of cards,
    /// dropping from the end.
    pub fn truncate(&mut self, len: usize) {
        self.cards.truncate(len)
    }

    /// How many cards are in the hand ?
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Are there any cards at all ?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Is the given card in the hand ?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Create an iter of the cards.
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

/// Allow indexing into the hand.
impl Index<usize> for Hand {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

/// Allow the index to get reference to every card.
impl Index<RangeFull> for Hand {
    type Output = [Card];
    fn index(&self, range: RangeFull) -> &[Card] {
        &self.cards[range]
    }
}

impl Index<RangeTo<usize>> for Hand {
    type Output = [Card];
    fn index(&self, index: RangeTo<usize>) -> &[Card] {
        &self.cards[index]
    }
}

impl Index<RangeFrom<usize>> for Hand {
    type Output = [Card];
    fn index(&self, index: RangeFrom<usize>) -> &[Card] {
        &self.cards[index]
    }
}

impl Index<Range<usize>> for Hand {
    type Output = [Card];
    fn index(&self, index: Range<usize>) -> &[Card] {
        &self.cards[index]
    }
}

impl Extend<Card> for Hand {
    fn extend<T: IntoIterator<Item = Card>>(&mut self, iter: T) {
        self.cards.extend(iter);
    }
}

impl From<Hand> for Vec<Card> {
    fn from(value: Hand) -> Self {
        value.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_card() {
        let mut hand = Hand::new();
        let c = Card {
            value: Value::Three,
            suit: Suit::Spade,
        };
        hand.push(c);
        // Make sure that the card was added to the vec.
        //
        // This will also test that len works
        assert_eq!(1, hand.len());
    }

    #[test]
    fn test_index() {
        let mut hand = Hand::new();
        hand.push(Card {
            value: Value::Four,
            suit: Suit::Spade,
        });
        // Make sure the card is there
        assert_eq!(
            Card {
                value: Value::Four,
                suit: Suit::Spade,
            },
            hand[0]
        );
    }

    #[test]
    fn test_parse_error() {
        assert!(Hand::new_from_str("BAD").is_err());
        assert!(Hand::new_from_str("Adx").is_err());
    }

    #[test]
    fn test_parse_one_card() {
        let h = Hand::new_from_str("Ad").unwrap();
        assert_eq!(1, h.len());
    }

    #[test]
    fn test_parse_empty() {
        let h = Hand::new_from_str("").unwrap();
        assert!(h.is_empty());
    }

    #[test]
    fn test_parse_duplicate_card() {
        let err = Hand::new_from_str("AdAd").unwrap_err();
        let expected = Card {
            value: Value::Ace,
            suit: Suit::Diamond,
        };
        assert_eq!(AdvisorError::DuplicateCard(expected), err);
    }

    #[test]
    fn test_multiple_cards() {
        let h = Hand::new_from_str("2s3dAc").unwrap();
        assert_eq!(3, h.len());
        assert!(h.contains(&Card {
            value: Value::Two,
            suit: Suit::Spade,
        }));
        assert!(h.contains(&Card {
            value: Value::Three,
            suit: Suit::Diamond,
        }));
        assert!(h.contains(&Card {
            value: Value::Ace,
            suit: Suit::Club,
        }));
    }

    #[test]
    fn test_extend() {
        let mut h = Hand::new_from_str("AdKd").unwrap();
        let board = Hand::new_from_str("2s8c8d").unwrap();
        h.extend(board.iter().copied());
        assert_eq!(5, h.len());
    }

    #[test]
    fn test_truncate() {
        let mut h = Hand::new_from_str("AdKd2s8c8d").unwrap();
        h.truncate(2);
        assert_eq!(2, h.len());
        assert!(h.contains(&Card {
            value: Value::Ace,
            suit: Suit::Diamond,
        }));
        assert!(!h.contains(&Card {
            value: Value::Eight,
            suit: Suit::Diamond,
        }));
    }
}
