use crate::core::card::Card;
use crate::core::card_iter::CardIter;
use crate::core::error::AdvisorError;
use crate::core::hand::Hand;
use std::fmt;

/// All the different possible hand ranks.
/// For each hand rank the u32 corresponds to
/// the strength of the hand in comparison to others
/// of the same rank.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Rank {
    /// The lowest rank.
    /// No matches
    HighCard(u32),
    /// One Card matches another.
    OnePair(u32),
    /// Two different pair of matching cards.
    TwoPair(u32),
    /// Three of the same value.
    ThreeOfAKind(u32),
    /// Five cards in a sequence
    Straight(u32),
    /// Five cards of the same suit
    Flush(u32),
    /// Three of one value and two of another value
    FullHouse(u32),
    /// Four of the same value.
    FourOfAKind(u32),
    /// Five cards in a sequence all for the same suit.
    StraightFlush(u32),
}

/// Bit mask for the wheel (Ace, two, three, four, five)
const WHEEL: u32 = 0b1_0000_0000_1111;
/// The strength of the ten to ace straight. A straight flush
/// with this strength is the royal flush.
pub const BROADWAY: u32 = 9;

/// The display names are the ones players use at the table,
/// with the royal flush split out from the other straight
/// flushes.
impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::HighCard(_) => write!(f, "High Card"),
            Self::OnePair(_) => write!(f, "Pair"),
            Self::TwoPair(_) => write!(f, "Two Pair"),
            Self::ThreeOfAKind(_) => write!(f, "Three of a Kind"),
            Self::Straight(_) => write!(f, "Straight"),
            Self::Flush(_) => write!(f, "Flush"),
            Self::FullHouse(_) => write!(f, "Full House"),
            Self::FourOfAKind(_) => write!(f, "Four of a Kind"),
            Self::StraightFlush(BROADWAY) => write!(f, "Royal Flush"),
            Self::StraightFlush(_) => write!(f, "Straight Flush"),
        }
    }
}

/// Can this turn into a hand rank?
pub trait Rankable {
    /// Get the cards to be ranked.
    fn cards(&self) -> &[Card];

    /// Rank the cards as a five card hand.
    ///
    /// The cards must be exactly five and hold no repeats, otherwise
    /// the counting logic below will mis-classify them.
    fn rank_five(&self) -> Rank {
        debug_assert_eq!(5, self.cards().len());

        // use for bitset
        let mut suit_set: u32 = 0;
        // Use for bitset
        let mut value_set: u32 = 0;
        let mut value_to_count: [u8; 13] = [0; 13];
        // count => bitset of values.
        let mut count_to_value: [u32; 5] = [0; 5];
        for c in self.cards() {
            let v = c.value as u8;
            let s = c.suit as u8;

            // Will be used for flush
            suit_set |= 1 << s;
            value_set |= 1 << v;
            // Keep track of counts for each card.
            value_to_count[v as usize] += 1;
        }

        // Now rotate the value to count map.
        for (value, &count) in value_to_count.iter().enumerate() {
            count_to_value[count as usize] |= 1 << value;
        }

        // The major deciding factor for hand rank
        // is the number of unique card values.
        let unique_card_count = value_set.count_ones();

        // Now that we should have all the information needed.
        // Lets do this.
        match unique_card_count {
            5 => {
                // If there are five different cards it can be a straight
                // a straight flush, a flush, or just a high card.
                // Need to check for all of them.
                let suit_count = suit_set.count_ones();
                let is_flush = suit_count == 1;
                match (self.rank_straight(value_set), is_flush) {
                    // This is the most common case.
                    (None, false) => Rank::HighCard(value_set),
                    (Some(strength), false) => Rank::Straight(strength),
                    (None, true) => Rank::Flush(value_set),
                    (Some(strength), true) => Rank::StraightFlush(strength),
                }
            }
            2 => {
                // This can either be full house, or four of a kind.
                let three_value = count_to_value[3];
                if three_value > 0 {
                    let major_rank = three_value;
                    let minor_rank = value_set ^ major_rank;
                    Rank::FullHouse(major_rank << 13 | minor_rank)
                } else {
                    let major_rank = count_to_value[4];
                    let minor_rank = value_set ^ major_rank;
                    Rank::FourOfAKind(major_rank << 13 | minor_rank)
                }
            }
            3 => {
                // this can be three of a kind or two pair.
                let three_value = count_to_value[3];
                if three_value > 0 {
                    let major_rank = three_value;
                    let minor_rank = value_set ^ major_rank;
                    Rank::ThreeOfAKind(major_rank << 13 | minor_rank)
                } else {
                    let major_rank = count_to_value[2];
                    let minor_rank = value_set ^ major_rank;
                    Rank::TwoPair(major_rank << 13 | minor_rank)
                }
            }
            _ => {
                // The only thing left is one pair.
                assert!(unique_card_count == 4);
                let major_rank = count_to_value[2];
                let minor_rank = value_set ^ major_rank;
                Rank::OnePair(major_rank << 13 | minor_rank)
            }
        }
    }

    /// Rank the cards, finding the best five card hand
    /// from however many are given (five to seven).
    fn rank(&self) -> Rank {
        debug_assert!((5..=7).contains(&self.cards().len()));
        CardIter::new(self.cards().to_vec(), 5)
            .map(|cards| cards.rank_five())
            .max()
            .unwrap_or(Rank::HighCard(0))
    }

    /// Give the strength of any straight in the value set.
    /// Returns None if the values don't line up.
    fn rank_straight(&self, value_set: u32) -> Option<u32> {
        // Shift the value set against itself four times. Any bit
        // still standing had four consecutive lower neighbors.
        let left =
            value_set & (value_set << 1) & (value_set << 2) & (value_set << 3) & (value_set << 4);
        // Then count the leading 0's
        let idx = left.leading_zeros();
        // If this isn't all zeros then we found a straight
        if idx < 32 {
            Some(32 - 4 - idx)
        } else if value_set & WHEEL == WHEEL {
            // Check to see if this is the wheel. It's pretty unlikely.
            Some(0)
        } else {
            // We found nothing.
            None
        }
    }
}

/// Implementation for `Hand`
impl Rankable for Hand {
    fn cards(&self) -> &[Card] {
        &self[..]
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> &[Card] {
        self
    }
}

impl Rankable for &[Card] {
    fn cards(&self) -> &[Card] {
        self
    }
}

/// Rank an arbitrary collection of five to seven known cards.
///
/// This is the checked front door to `Rankable`: it refuses
/// too few or too many cards and repeated cards instead of
/// silently mis-ranking them.
///
/// # Examples
///
/// ```
/// use holdem_advisor::core::{Hand, evaluate};
///
/// let cards = Hand::new_from_str("AdKdQdJdTd").unwrap();
/// let rank = evaluate(&cards[..]).unwrap();
/// assert_eq!("Royal Flush", rank.to_string());
/// ```
pub fn evaluate(cards: &[Card]) -> Result<Rank, AdvisorError> {
    if cards.len() < 5 {
        return Err(AdvisorError::InsufficientCards(cards.len()));
    }
    if cards.len() > 7 {
        return Err(AdvisorError::OversizedHand(cards.len()));
    }
    for (i, c) in cards.iter().enumerate() {
        if cards[..i].contains(c) {
            return Err(AdvisorError::DuplicateCard(*c));
        }
    }
    Ok(cards.rank())
}
