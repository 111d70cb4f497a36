//! holdem_advisor is a library for real time holdem decision
//! support. It ranks made hands, estimates equity against random
//! opponents with Monte Carlo trials, and compares that equity to
//! the pot odds a bet is offering to recommend fold, call, or raise.

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;
/// Allow all the holdem specific code to be used externally.
pub mod holdem;
