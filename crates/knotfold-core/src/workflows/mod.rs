//! # Workflows Module
//!
//! The highest-level, user-facing layer. A workflow wires the engine stages
//! together into one complete run, owns the phase structure reported through
//! the [`ProgressReporter`](crate::engine::progress::ProgressReporter), and
//! returns the final ranked prediction.

pub mod predict;
