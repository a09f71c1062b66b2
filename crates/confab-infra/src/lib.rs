//! Infrastructure implementations for Confab.
//!
//! Concrete implementations of the ports defined in `confab-core`: the
//! reqwest-based HTTP chat backend and the configuration file loader.

pub mod config;
pub mod http;
