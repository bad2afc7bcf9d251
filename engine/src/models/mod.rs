//! Domain models for the pricing simulator
//!
//! All types here are plain immutable value records: no identity, no
//! lifecycle beyond a single engine call. The presentation layer assembles
//! them from form state on every recompute and discards them after rendering.

pub mod checklist;
pub mod message;
pub mod simulation;

// Re-exports
pub use checklist::{ChecklistInput, ChecklistResult, SignalFlags, Tier, TimingWindow};
pub use message::{MessageContext, TemplateStyle};
pub use simulation::{ChurnHealth, ChurnSpec, CostSpec, SimulationInput, SimulationResult, Status};
