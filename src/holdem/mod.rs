/// Module with the monte carlo equity estimation code.
mod equity;
/// Export the simulator, its per trial outcome, and the tallies.
pub use self::equity::{DEFAULT_ITERATIONS, EquitySimulator, Outcome, SimulationResult};

/// Module that turns equity and pot odds into a recommendation.
mod advice;
/// Export the advisor surface.
pub use self::advice::{
    Action, RAISE_MARGIN, Recommendation, TableSnapshot, advise, pot_odds, recommend,
};
