//! This is the core module. It exports the card machinery
//! that is agnostic to any one poker game.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// The one error enum for everything the crate can reject.
mod error;
/// Export `AdvisorError`
pub use self::error::AdvisorError;

/// Code related to cards in hands.
mod hand;
/// Export `Hand`
pub use self::hand::Hand;

/// We want to be able to iterate over five card hands.
mod card_iter;
/// Make that functionality public.
pub use self::card_iter::CardIter;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Flattened deck
mod flat_deck;
/// Export the indexable deck.
pub use self::flat_deck::FlatDeck;

/// 5 Card hand ranking code.
mod rank;
/// Export the trait, the results, and the checked entry point.
pub use self::rank::{BROADWAY, Rank, Rankable, evaluate};
