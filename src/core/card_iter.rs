use crate::core::card::Card;
use crate::core::hand::Hand;

/// Iterator over all the distinct sets of `num_cards` cards that can
/// be chosen from a list of possible cards.
///
/// Emitted sets keep the order of `possible_cards`, so for the same
/// input the iteration order is stable.
#[derive(Debug)]
pub struct CardIter {
    /// All the possible cards that can be dealt
    possible_cards: Vec<Card>,
    /// Set of current offsets being used to create card sets.
    idx: Vec<i64>,
    /// Size of card sets requested.
    num_cards: usize,
}

impl CardIter {
    pub fn new(possible_cards: Vec<Card>, num_cards: usize) -> Self {
        let mut idx: Vec<i64> = (0..(num_cards as i64)).collect();
        // Start the last level one step back so the first call to
        // next() lands on the very first combination.
        idx[num_cards - 1] -= 1;
        Self {
            possible_cards,
            idx,
            num_cards,
        }
    }
}

impl Iterator for CardIter {
    type Item = Vec<Card>;
    fn next(&mut self) -> Option<Vec<Card>> {
        // Keep track of where we are mutating
        let mut current_level = self.num_cards - 1;

        while current_level < self.num_cards {
            // Move the current level forward one.
            self.idx[current_level] += 1;

            // Now check if moving this level forward means that
            // we will need more cards to fill out the rest of the hand
            // than there are.
            let cards_needed_after = self.num_cards - (current_level + 1);
            if self.idx[current_level] as usize + cards_needed_after >= self.possible_cards.len() {
                if current_level == 0 {
                    return None;
                }
                current_level -= 1;
            } else {
                // If we aren't at the end then
                // push the next level back to just after this one.
                if current_level < self.num_cards - 1 {
                    self.idx[current_level + 1] = self.idx[current_level];
                }
                // Move forward one level
                current_level += 1;
            }
        }

        let result_cards: Vec<Card> = self
            .idx
            .iter()
            .map(|i| self.possible_cards[*i as usize])
            .collect();
        Some(result_cards)
    }
}

/// The default card iter will give back 5 cards.
///
/// Useful for trying to find the best 5 card hand from 7 cards.
impl IntoIterator for Hand {
    type Item = Vec<Card>;
    type IntoIter = CardIter;

    fn into_iter(self) -> CardIter {
        let possible_cards: Vec<Card> = self[..].to_vec();
        CardIter::new(possible_cards, 5)
    }
}
