//! Suburb Search
//!
//! Terminal suburb search with keyboard-driven autocomplete.
//!
//! Pure Core / Impure Shell: `model` and `state` hold data and pure
//! transitions; `view` owns the terminal; `config` and `logging` are the
//! ambient setup used by the binary.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
