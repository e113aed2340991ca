//! Pricewatch demo library.
//!
//! Configuration and the scripted scenario driven by the `pricewatch` binary.

pub mod config;
pub mod error;
pub mod scenario;

pub use config::{Args, DemoConfig, StoreLocation};
pub use error::Error;
pub use scenario::{open_store, run, DemoReport};
