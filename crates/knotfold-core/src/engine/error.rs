use thiserror::Error;

use super::config::ConfigError;
use crate::core::energy::EnergyError;
use crate::core::grammar::GrammarError;
use crate::core::sequence::SequenceError;

/// Errors surfaced by the prediction pipeline.
///
/// Input and configuration problems are detected eagerly, before any window
/// is searched. A search failure aborts the whole run; partial results are
/// never returned. An empty candidate list is a normal outcome and is not
/// represented here.
#[derive(Debug, Error)]
pub enum FoldError {
    #[error("Invalid input sequence: {source}")]
    Input {
        #[from]
        source: SequenceError,
    },

    #[error("Grammar definition error: {source}")]
    Grammar {
        #[from]
        source: GrammarError,
    },

    #[error("Energy parameter error: {source}")]
    EnergyParams {
        #[from]
        source: EnergyError,
    },

    #[error("Invalid run configuration: {source}")]
    Configuration {
        #[from]
        source: ConfigError,
    },

    #[error("Search failed in window [{start}, {end}): {message}")]
    Search {
        start: usize,
        end: usize,
        message: String,
    },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
