use thiserror::Error;

use super::Card;

/// This is the core error type for the advisor
/// library. It uses `thiserror` to provide
/// readable error messages
#[derive(Error, Debug, PartialEq, Eq, Hash)]
pub enum AdvisorError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card is already among the known cards {0}")]
    DuplicateCard(Card),
    #[error("Ranking a hand takes at least five cards, got {0}")]
    InsufficientCards(usize),
    #[error("Holdem hands should never have more than 7 cards in them, got {0}")]
    OversizedHand(usize),
    #[error("A community board holds at most five cards, got {0}")]
    OversizedBoard(usize),
    #[error("Both hero hole cards must be known before simulating")]
    IncompleteHero,
    #[error("Residual deck has {remaining} cards but each trial deals {needed}")]
    DeckExhausted { needed: usize, remaining: usize },
}
