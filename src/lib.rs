//! Life-point tracker for two-player trading-card game duels.
//!
//! The [`duel`] module holds the rules; [`ui`] is a terminal front-end that
//! drives them from a calculator-style keypad.

pub mod cli;
pub mod config;
pub mod duel;
pub mod logging;
pub mod ui;
