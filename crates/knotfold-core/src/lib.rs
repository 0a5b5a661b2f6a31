//! # Knotfold Core Library
//!
//! A library for predicting RNA secondary structure including H-type pseudoknots,
//! combining windowed syntactic core matching with an approximate thermodynamic
//! ranking of candidate folds.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless domain types (`RnaSequence`,
//!   `Stem`, `PseudoknotCandidate`), the pairing grammar definition, and the
//!   additive free-energy model.
//!
//! - **[`engine`]: The Logic Core.** This layer drives the candidate search: window
//!   enumeration, the grammar engine that matches pseudoknot cores inside each
//!   window, the parallel per-window search, and the structure selector that
//!   normalizes, prunes, scores, and ranks candidates.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer. It
//!   ties `engine` and `core` together to execute a complete prediction run from a
//!   validated sequence to a deterministically ranked result.

pub mod core;
pub mod engine;
pub mod workflows;
