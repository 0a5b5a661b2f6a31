//! # Engine Module
//!
//! The computational core of the prediction pipeline. It turns a validated
//! sequence and an immutable run configuration into a ranked list of
//! pseudoknot candidates.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules, one per pipeline
//! stage:
//!
//! - **Configuration** ([`config`]) - The per-run parameter set and its
//!   validating builder.
//! - **Window Enumeration** ([`windows`]) - Deterministic enumeration of the
//!   sliding windows the grammar engine inspects.
//! - **Grammar Engine** ([`parser`]) - Matching of mutually crossing
//!   pseudoknot cores inside a single window.
//! - **Candidate Search** ([`search`]) - Parallel per-window invocation of the
//!   grammar engine with fail-fast error propagation.
//! - **Structure Selection** ([`selector`]) - Stem extension, pruning, energy
//!   scoring, and the deterministic final ranking.
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events.
//! - **Error Handling** ([`error`]) - The engine-level error taxonomy.

pub mod config;
pub mod error;
pub mod parser;
pub mod progress;
pub mod search;
pub mod selector;
pub mod windows;
