//! # Core Module
//!
//! Stateless domain types and pure models for RNA pseudoknot prediction.
//!
//! - **Sequence Representation** ([`sequence`]) - Validated nucleotide sequences
//!   over the {A, C, G, U} alphabet.
//! - **Pairing Grammar** ([`grammar`]) - The loadable grammar-definition resource:
//!   which base pairs may form a pseudoknot core, which may extend a stem, and the
//!   structural constants of the core pattern.
//! - **Structural Types** ([`structure`]) - Stems, pseudoknot candidates, and
//!   canonical dot-bracket encoding.
//! - **Energy Model** ([`energy`]) - The additive free-energy model used to rank
//!   candidate structures.

pub mod energy;
pub mod grammar;
pub mod sequence;
pub mod structure;
