use std::cmp::Ordering;

use rand::Rng;
use tracing::event;

use crate::core::{AdvisorError, Card, Deck, FlatDeck, Hand, Rank, Rankable};

/// How many monte carlo trials to run when the caller
/// doesn't ask for a specific amount.
pub const DEFAULT_ITERATIONS: u32 = 1_000;

/// How a single simulated showdown ended for the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The hero's rank strictly beat every opponent.
    Win,
    /// The hero shares the best rank with at least one opponent.
    Tie,
    /// At least one opponent ranked strictly higher.
    Loss,
}

/// Tallies from a batch of simulated showdowns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    /// Trials the hero won outright.
    pub wins: u32,
    /// Trials the hero split with the best opponent.
    pub ties: u32,
    /// Total trials behind the tallies.
    pub iterations: u32,
}

impl SimulationResult {
    /// The hero's equity as a percentage of the pot.
    ///
    /// A tie counts as half a win no matter how many hands
    /// split the pot.
    pub fn equity_percent(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        (self.wins as f64 + self.ties as f64 / 2.0) / self.iterations as f64 * 100.0
    }

    /// Fold another batch of tallies into this one.
    ///
    /// Iterations are independent so batches can be run on
    /// different threads, or interleaved with other work, and
    /// summed afterwards.
    pub fn merge(&mut self, other: &SimulationResult) {
        self.wins += other.wins;
        self.ties += other.ties;
        self.iterations += other.iterations;
    }
}

/// Monte carlo simulator for one hero hand against opponents
/// holding unseen cards.
///
/// Construction removes every known card from the deck once.
/// Each trial shuffles what's left, completes the board, and
/// deals the opponents their hole cards from it.
#[derive(Debug, Clone)]
pub struct EquitySimulator {
    /// Flattened residual deck.
    deck: FlatDeck,
    /// Hands in play. The hero is always at index zero.
    hands: Vec<Hand>,
    /// The original size of each of the hands.
    /// This is used to reset each hand after a trial.
    hand_sizes: Vec<usize>,
    /// The number of community cards dealt each trial.
    num_community_cards: usize,
    /// The number of cards each trial deals in total.
    cards_needed: usize,
}

impl EquitySimulator {
    /// Set up a simulation of `hero` against `opponents` random
    /// hands, with `community` already on the board.
    pub fn new(
        hero: [Card; 2],
        community: &[Card],
        opponents: usize,
    ) -> Result<Self, AdvisorError> {
        if community.len() > 5 {
            return Err(AdvisorError::OversizedBoard(community.len()));
        }

        let mut hero_hand = Hand::new_with_cards(hero.to_vec());
        hero_hand.extend(community.iter().copied());

        // Pulling every known card out of a full deck doubles as
        // duplicate detection. A second removal of the same card
        // comes back false.
        let mut deck = Deck::default();
        for card in hero_hand.iter() {
            if !deck.remove(card) {
                return Err(AdvisorError::DuplicateCard(*card));
            }
        }

        // The board is shared so its completion is dealt once,
        // then every opponent needs two hole cards.
        let num_community_cards = 5 - community.len();
        let cards_needed = num_community_cards + 2 * opponents;
        if cards_needed > deck.len() {
            return Err(AdvisorError::DeckExhausted {
                needed: cards_needed,
                remaining: deck.len(),
            });
        }

        let mut hands: Vec<Hand> = Vec::with_capacity(opponents + 1);
        hands.push(hero_hand);
        for _ in 0..opponents {
            hands.push(Hand::new_with_cards(community.to_vec()));
        }
        let hand_sizes = hands.iter().map(|h| h.len()).collect();

        Ok(Self {
            deck: deck.into(),
            hands,
            hand_sizes,
            num_community_cards,
            cards_needed,
        })
    }

    /// Simulate finishing one hand.
    ///
    /// This fills out the board and the opponents' hole cards,
    /// then reports how the showdown went for the hero. Call
    /// `reset` before simulating again.
    pub fn simulate<R: Rng>(&mut self, rng: &mut R) -> Outcome {
        // A full shuffle every trial. Re-using the tail of a
        // previous order would correlate trials with each other.
        self.deck.shuffle(rng);

        let community_end_idx = self.num_community_cards;
        let mut current_offset = community_end_idx;

        for h in &mut self.hands {
            h.extend(self.deck[..community_end_idx].to_owned());
            let hole_needed = 7 - h.len();
            let range = &self.deck[current_offset..current_offset + hole_needed];
            h.extend(range.to_owned());
            current_offset += hole_needed;
        }
        debug_assert_eq!(self.cards_needed, current_offset);

        // Now compare the hero against the best of the rest.
        let hero_rank = self.hands[0].rank();
        match self.hands[1..].iter().map(|h| h.rank()).max() {
            // Nobody to beat, so the hero wins by default.
            None => Outcome::Win,
            Some(best) => match hero_rank.cmp(&best) {
                Ordering::Greater => Outcome::Win,
                Ordering::Equal => Outcome::Tie,
                Ordering::Less => Outcome::Loss,
            },
        }
    }

    /// Reset the hands back to the cards known before dealing.
    pub fn reset(&mut self) {
        for (h, hand_size) in self.hands.iter_mut().zip(self.hand_sizes.iter()) {
            h.truncate(*hand_size);
        }
    }

    /// Run `iterations` trials and tally them up.
    pub fn estimate_equity<R: Rng>(&mut self, iterations: u32, rng: &mut R) -> SimulationResult {
        let mut result = SimulationResult {
            iterations,
            ..SimulationResult::default()
        };

        for _ in 0..iterations {
            let outcome = self.simulate(rng);
            // Reset the hands
            self.reset();
            match outcome {
                Outcome::Win => result.wins += 1,
                Outcome::Tie => result.ties += 1,
                Outcome::Loss => (),
            }
        }

        event!(
            tracing::Level::TRACE,
            "estimated equity from {} trials: {} wins, {} ties",
            result.iterations,
            result.wins,
            result.ties
        );

        result
    }

    /// The rank the hero has already made with the known board.
    ///
    /// None until at least five cards are known, since no five
    /// card hand exists to rank before the flop.
    pub fn made_rank(&self) -> Option<Rank> {
        let known = self.hand_sizes[0];
        if known >= 5 {
            let cards = &self.hands[0][..known];
            Some(cards.rank())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{SeedableRng, rngs::StdRng};

    fn cards(s: &str) -> Vec<Card> {
        Hand::new_from_str(s).unwrap().into()
    }

    fn hole(s: &str) -> [Card; 2] {
        let c = cards(s);
        [c[0], c[1]]
    }

    #[test]
    fn test_simulate_deals_full_hands() {
        let mut sim = EquitySimulator::new(hole("AdAh"), &[], 2).unwrap();
        let mut rng = StdRng::seed_from_u64(420);
        sim.simulate(&mut rng);

        for h in &sim.hands {
            assert_eq!(7, h.len());
        }

        sim.reset();
        assert_eq!(2, sim.hands[0].len());
        assert_eq!(0, sim.hands[1].len());
        assert_eq!(0, sim.hands[2].len());
    }

    #[test]
    fn test_no_card_dealt_twice() {
        let board = cards("Ah8s2d");
        let mut sim = EquitySimulator::new(hole("AdAc"), &board, 3).unwrap();
        let mut rng = StdRng::seed_from_u64(420);
        sim.simulate(&mut rng);

        // Every hand sees the same five card board.
        for h in &sim.hands[1..] {
            assert_eq!(sim.hands[0][2..7], h[..5]);
        }

        // The hero's seven cards and each opponent's two hole
        // cards must all be distinct.
        let mut seen: Vec<Card> = sim.hands[0].iter().copied().collect();
        for (i, c) in seen.iter().enumerate() {
            assert!(!seen[..i].contains(c));
        }
        for h in &sim.hands[1..] {
            for c in &h[h.len() - 2..] {
                assert!(!seen.contains(c));
                seen.push(*c);
            }
        }
    }

    #[test]
    fn test_removal_invariant() {
        let board = cards("Ah8s2d");
        let sim = EquitySimulator::new(hole("AdAc"), &board, 3).unwrap();
        assert_eq!(52 - 5, sim.deck.len());
        for c in cards("AdAcAh8s2d") {
            assert!(!sim.deck[..].contains(&c));
        }
    }

    #[test]
    fn test_duplicate_hero_board() {
        let board = cards("Ad8s2d");
        let err = EquitySimulator::new(hole("AdAc"), &board, 1).unwrap_err();
        assert_eq!(AdvisorError::DuplicateCard(cards("Ad")[0]), err);
    }

    #[test]
    fn test_oversized_board() {
        let board = cards("2s3s4s5s6s7s");
        let err = EquitySimulator::new(hole("AdAc"), &board, 1).unwrap_err();
        assert_eq!(AdvisorError::OversizedBoard(6), err);
    }

    #[test]
    fn test_deck_exhausted() {
        // 22 opponents still fit in the 50 unseen cards.
        assert!(EquitySimulator::new(hole("AdAc"), &[], 22).is_ok());
        // A 23rd doesn't: 5 board + 46 hole cards from 50.
        let err = EquitySimulator::new(hole("AdAc"), &[], 23).unwrap_err();
        assert_eq!(
            AdvisorError::DeckExhausted {
                needed: 51,
                remaining: 50,
            },
            err
        );
    }

    #[test]
    fn test_zero_opponents_trivial_win() {
        let mut sim = EquitySimulator::new(hole("2s7d"), &[], 0).unwrap();
        let mut rng = StdRng::seed_from_u64(420);

        let result = sim.estimate_equity(100, &mut rng);
        assert_eq!(100, result.wins);
        assert_eq!(0, result.ties);
        assert_eq!(100.0, result.equity_percent());
    }

    #[test]
    fn test_board_royal_always_ties() {
        // The royal flush on the board plays for everyone, so
        // every single trial is a split pot.
        let board = cards("TcJcQcKcAc");
        let mut sim = EquitySimulator::new(hole("2s7d"), &board, 1).unwrap();
        let mut rng = StdRng::seed_from_u64(420);

        let result = sim.estimate_equity(500, &mut rng);
        assert_eq!(0, result.wins);
        assert_eq!(500, result.ties);
        assert_eq!(50.0, result.equity_percent());
    }

    #[test_log::test]
    fn test_pocket_aces_heads_up_equity() {
        let mut sim = EquitySimulator::new(hole("AdAh"), &[], 1).unwrap();
        let mut rng = StdRng::seed_from_u64(420);

        let result = sim.estimate_equity(50_000, &mut rng);
        assert_relative_eq!(85.0, result.equity_percent(), epsilon = 2.0);
    }

    #[test_log::test]
    fn test_more_opponents_less_equity() {
        let mut rng = StdRng::seed_from_u64(420);

        let mut heads_up = EquitySimulator::new(hole("AdAh"), &[], 1).unwrap();
        let mut full_table = EquitySimulator::new(hole("AdAh"), &[], 8).unwrap();

        let one = heads_up.estimate_equity(10_000, &mut rng).equity_percent();
        let eight = full_table.estimate_equity(10_000, &mut rng).equity_percent();
        assert!(one > eight);
    }

    #[test]
    fn test_seeded_determinism() {
        let board = cards("Ah8s2d");

        let mut sim_one = EquitySimulator::new(hole("KdKc"), &board, 2).unwrap();
        let mut sim_two = EquitySimulator::new(hole("KdKc"), &board, 2).unwrap();

        let mut rng_one = StdRng::seed_from_u64(420);
        let mut rng_two = StdRng::seed_from_u64(420);

        assert_eq!(
            sim_one.estimate_equity(1_000, &mut rng_one),
            sim_two.estimate_equity(1_000, &mut rng_two),
        );
    }

    #[test]
    fn test_tallies_add_up() {
        let mut sim = EquitySimulator::new(hole("5c6c"), &[], 4).unwrap();
        let mut rng = StdRng::seed_from_u64(420);

        let result = sim.estimate_equity(2_000, &mut rng);
        assert_eq!(2_000, result.iterations);
        assert!(result.wins + result.ties <= result.iterations);
        assert!(result.wins > 0);
    }

    #[test]
    fn test_merge() {
        let mut total = SimulationResult {
            wins: 10,
            ties: 2,
            iterations: 20,
        };
        total.merge(&SimulationResult {
            wins: 5,
            ties: 0,
            iterations: 20,
        });

        assert_eq!(15, total.wins);
        assert_eq!(2, total.ties);
        assert_eq!(40, total.iterations);
        assert_eq!(40.0, total.equity_percent());
    }

    #[test]
    fn test_equity_of_nothing() {
        assert_eq!(0.0, SimulationResult::default().equity_percent());
    }

    #[test]
    fn test_made_rank_preflop() {
        let sim = EquitySimulator::new(hole("AdAc"), &[], 1).unwrap();
        assert_eq!(None, sim.made_rank());
    }

    #[test]
    fn test_made_rank_flop_set() {
        let board = cards("Ah8s2d");
        let sim = EquitySimulator::new(hole("AdAc"), &board, 1).unwrap();

        let rank = sim.made_rank().unwrap();
        assert!(matches!(rank, Rank::ThreeOfAKind(_)));
        assert_eq!("Three of a Kind", rank.to_string());
    }

    #[test]
    fn test_made_rank_unchanged_by_trials() {
        let board = cards("Ah8s2d");
        let mut sim = EquitySimulator::new(hole("AdAc"), &board, 1).unwrap();
        let before = sim.made_rank();

        let mut rng = StdRng::seed_from_u64(420);
        sim.estimate_equity(100, &mut rng);

        assert_eq!(before, sim.made_rank());
    }
}
