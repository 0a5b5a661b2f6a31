use super::windows::MIN_WINDOW_SPAN;
use crate::core::structure::MAX_LEVELS;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter {
        name: &'static str,
        message: String,
    },
}

/// Immutable per-run parameters of the prediction pipeline.
///
/// All fields have usable defaults; construct via [`FoldConfig::default`] or
/// the validating [`FoldConfigBuilder`]. `grammar_path` and `energy_path`
/// override the built-in grammar definition and energy coefficients with TOML
/// resources.
#[derive(Debug, Clone, PartialEq)]
pub struct FoldConfig {
    /// Admit G-U wobble pairs as pseudoknot core anchors.
    pub allow_ug: bool,
    /// Maximum window span inspected by the grammar engine.
    pub max_loop_size: usize,
    /// Number of mutually crossing stems to search for (2 or 3).
    pub max_crossing_depth: usize,
    /// Candidates keep competing while their stem count is within this
    /// distance of the smallest stem count seen.
    pub max_stem_allow_smaller: usize,
    /// Apply the stem-count bound incrementally, before energy evaluation.
    /// Never changes the ranked output.
    pub prune_early: bool,
    pub grammar_path: Option<PathBuf>,
    pub energy_path: Option<PathBuf>,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self {
            allow_ug: false,
            max_loop_size: 100,
            max_crossing_depth: 2,
            max_stem_allow_smaller: 2,
            prune_early: false,
            grammar_path: None,
            energy_path: None,
        }
    }
}

impl FoldConfig {
    pub fn builder() -> FoldConfigBuilder {
        FoldConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_loop_size < MIN_WINDOW_SPAN {
            return Err(ConfigError::InvalidParameter {
                name: "max_loop_size",
                message: format!(
                    "must be at least {} (the minimal pseudoknot core span), got {}",
                    MIN_WINDOW_SPAN, self.max_loop_size
                ),
            });
        }
        if self.max_crossing_depth < 2 || self.max_crossing_depth > MAX_LEVELS {
            return Err(ConfigError::InvalidParameter {
                name: "max_crossing_depth",
                message: format!("must be between 2 and {}, got {}", MAX_LEVELS, self.max_crossing_depth),
            });
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FoldConfigBuilder {
    allow_ug: Option<bool>,
    max_loop_size: Option<usize>,
    max_crossing_depth: Option<usize>,
    max_stem_allow_smaller: Option<usize>,
    prune_early: Option<bool>,
    grammar_path: Option<PathBuf>,
    energy_path: Option<PathBuf>,
}

impl FoldConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_ug(mut self, allow: bool) -> Self {
        self.allow_ug = Some(allow);
        self
    }
    pub fn max_loop_size(mut self, size: usize) -> Self {
        self.max_loop_size = Some(size);
        self
    }
    pub fn max_crossing_depth(mut self, depth: usize) -> Self {
        self.max_crossing_depth = Some(depth);
        self
    }
    pub fn max_stem_allow_smaller(mut self, slack: usize) -> Self {
        self.max_stem_allow_smaller = Some(slack);
        self
    }
    pub fn prune_early(mut self, prune: bool) -> Self {
        self.prune_early = Some(prune);
        self
    }
    pub fn grammar_path(mut self, path: PathBuf) -> Self {
        self.grammar_path = Some(path);
        self
    }
    pub fn energy_path(mut self, path: PathBuf) -> Self {
        self.energy_path = Some(path);
        self
    }

    pub fn build(self) -> Result<FoldConfig, ConfigError> {
        let defaults = FoldConfig::default();
        let config = FoldConfig {
            allow_ug: self.allow_ug.unwrap_or(defaults.allow_ug),
            max_loop_size: self.max_loop_size.unwrap_or(defaults.max_loop_size),
            max_crossing_depth: self
                .max_crossing_depth
                .unwrap_or(defaults.max_crossing_depth),
            max_stem_allow_smaller: self
                .max_stem_allow_smaller
                .unwrap_or(defaults.max_stem_allow_smaller),
            prune_early: self.prune_early.unwrap_or(defaults.prune_early),
            grammar_path: self.grammar_path,
            energy_path: self.energy_path,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_with_no_overrides_matches_defaults() {
        let config = FoldConfig::builder().build().unwrap();
        assert_eq!(config, FoldConfig::default());
    }

    #[test]
    fn builder_rejects_tiny_max_loop_size() {
        let result = FoldConfig::builder().max_loop_size(4).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "max_loop_size",
                ..
            })
        ));
    }

    #[test]
    fn builder_rejects_out_of_range_crossing_depth() {
        for depth in [0, 1, 4] {
            let result = FoldConfig::builder().max_crossing_depth(depth).build();
            assert!(matches!(
                result,
                Err(ConfigError::InvalidParameter {
                    name: "max_crossing_depth",
                    ..
                })
            ));
        }
        assert!(FoldConfig::builder().max_crossing_depth(3).build().is_ok());
    }
}
