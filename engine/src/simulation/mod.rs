//! Simulation engine - price change projection
//!
//! Compares the practice as it runs today against the hypothetical state
//! after a price increase, an assumed churn, and an optional drop in
//! per-client session frequency.
//!
//! See `engine.rs` for the full algorithm.

pub mod engine;

// Re-export the engine surface
pub use engine::{break_even_churn_percent, simulate, STATUS_DEAD_ZONE};
