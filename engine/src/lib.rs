//! Pricing Simulator Core - Rust Engine
//!
//! Decision-support engine for independent fitness/health professionals
//! (trainers, dietitians, physiotherapists) weighing a price increase.
//!
//! # Architecture
//!
//! - **core**: Shared helpers (currency formatting)
//! - **models**: Domain types (SimulationInput, ChecklistInput, MessageContext)
//! - **simulation**: Revenue/profit projection and break-even math
//! - **checklist**: "Should I raise prices" qualitative scoring
//! - **message**: Client-communication template rendering
//!
//! The three engines are siblings: the (external) presentation layer calls
//! each directly and wires their outputs together. None of them calls
//! another, none of them performs I/O, and every call re-derives its result
//! from the input record alone.
//!
//! # Critical Invariants
//!
//! 1. All money values are f64 PLN; display rounding belongs to the caller
//! 2. Every engine function is pure and total - degenerate inputs produce
//!    degenerate-but-defined outputs, never panics or errors
//! 3. Churn and cost tracking are explicit sum types - exactly one branch
//!    of each is ever consulted

// Module declarations
pub mod checklist;
pub mod core;
pub mod message;
pub mod models;
pub mod simulation;

// Re-exports for convenience
pub use crate::core::format::format_pln;
pub use checklist::score;
pub use message::{build_message, render};
pub use models::{
    checklist::{ChecklistInput, ChecklistResult, SignalFlags, Tier, TimingWindow},
    message::{MessageContext, ParseTemplateStyleError, TemplateStyle},
    simulation::{ChurnHealth, ChurnSpec, CostSpec, SimulationInput, SimulationResult, Status},
};
pub use simulation::{break_even_churn_percent, simulate};
