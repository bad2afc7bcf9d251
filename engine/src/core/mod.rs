//! Shared helpers used across the engines

pub mod format;

pub use format::format_pln;
