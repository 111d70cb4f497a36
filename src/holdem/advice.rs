use std::fmt;

use rand::Rng;

use crate::core::{AdvisorError, Card, Rank};
use crate::holdem::equity::{DEFAULT_ITERATIONS, EquitySimulator};

/// How many points of equity above the pot odds it takes
/// before raising is advised instead of calling.
pub const RAISE_MARGIN: f64 = 10.0;

/// What the advisor thinks the hero should do, ordered from
/// least to most aggressive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Fold,
    Call,
    Raise,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fold => write!(f, "FOLD"),
            Self::Call => write!(f, "CALL"),
            Self::Raise => write!(f, "RAISE"),
        }
    }
}

/// Everything the advisor can see from one seat at the table.
///
/// The caller owns reading the table. This is just the set of
/// facts a single recommendation is computed from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableSnapshot {
    /// The hero's hole cards. None marks a card that hasn't
    /// been recognized yet.
    pub hero: [Option<Card>; 2],
    /// Community cards dealt so far, zero through five.
    pub community: Vec<Card>,
    /// Opponents still contesting the pot.
    pub opponents: usize,
    /// Chips already in the pot.
    pub pot: f64,
    /// Chips the hero must put in to continue.
    pub to_call: f64,
}

/// The advisor's read of one snapshot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    /// Estimated share of the pot, as a percentage.
    pub equity: f64,
    /// Price being offered, as a percentage.
    pub pot_odds: f64,
    /// The suggested action.
    pub action: Action,
    /// The hand the hero has already made, once the board is
    /// far enough along to have one.
    pub made_hand: Option<Rank>,
}

/// The percentage of the final pot the hero is being asked to
/// put in. A check costs nothing so it prices at zero.
pub fn pot_odds(to_call: f64, pot: f64) -> f64 {
    if to_call <= 0.0 {
        return 0.0;
    }
    to_call / (pot + to_call) * 100.0
}

/// Compare equity to the price and pick an action.
///
/// Equity comfortably above the price is a raise, equity at or
/// above it makes the call profitable, and equity below it
/// means the price is too high.
pub fn advise(equity: f64, pot_odds: f64) -> Action {
    if equity > pot_odds + RAISE_MARGIN {
        Action::Raise
    } else if equity >= pot_odds {
        Action::Call
    } else {
        Action::Fold
    }
}

/// Advise on a whole snapshot.
///
/// This estimates the hero's equity against the snapshot's
/// opponents, prices the call, and bundles both with the
/// resulting action and any hand the hero has already made.
/// Passing None for iterations uses `DEFAULT_ITERATIONS`.
pub fn recommend<R: Rng>(
    snapshot: &TableSnapshot,
    iterations: Option<u32>,
    rng: &mut R,
) -> Result<Recommendation, AdvisorError> {
    let hero = match snapshot.hero {
        [Some(first), Some(second)] => [first, second],
        _ => return Err(AdvisorError::IncompleteHero),
    };

    let mut simulator = EquitySimulator::new(hero, &snapshot.community, snapshot.opponents)?;
    let made_hand = simulator.made_rank();

    let result = simulator.estimate_equity(iterations.unwrap_or(DEFAULT_ITERATIONS), rng);
    let equity = result.equity_percent();
    let pot_odds = pot_odds(snapshot.to_call, snapshot.pot);

    Ok(Recommendation {
        equity,
        pot_odds,
        action: advise(equity, pot_odds),
        made_hand,
    })
}
