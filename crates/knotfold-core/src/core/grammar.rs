use crate::core::sequence::Base;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

const DEFAULT_MIN_LOOP_SIZE: usize = 1;
const DEFAULT_MAX_GAP_SIZE: usize = 2;

#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },

    #[error("Invalid grammar definition: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
struct RawPairRules {
    #[serde(default)]
    canonical: Vec<String>,
    #[serde(default)]
    wobble: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
struct RawGrammar {
    #[serde(default = "default_min_loop_size")]
    min_loop_size: usize,
    #[serde(default = "default_max_gap_size")]
    max_gap_size: usize,
    #[serde(default)]
    pairs: RawPairRules,
}

fn default_min_loop_size() -> usize {
    DEFAULT_MIN_LOOP_SIZE
}

fn default_max_gap_size() -> usize {
    DEFAULT_MAX_GAP_SIZE
}

/// Symmetric 4x4 base-pair admissibility table, compiled from a
/// [`GrammarDefinition`] for O(1) lookups during the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PairMatrix {
    table: [[bool; 4]; 4],
}

impl PairMatrix {
    fn insert(&mut self, a: Base, b: Base) {
        self.table[a.index()][b.index()] = true;
        self.table[b.index()][a.index()] = true;
    }

    #[inline]
    pub fn admits(&self, a: Base, b: Base) -> bool {
        self.table[a.index()][b.index()]
    }
}

/// The pairing grammar: which base pairs may anchor a pseudoknot core, which
/// may extend a stem, and the structural constants of the core pattern.
///
/// A definition can be loaded from a TOML resource:
///
/// ```toml
/// min_loop_size = 1
/// max_gap_size = 2
///
/// [pairs]
/// canonical = ["AU", "GC"]
/// wobble = ["GU"]
/// ```
///
/// The built-in default covers the standard Watson-Crick pairs plus the G-U
/// wobble. Wobble pairs only participate in core matching when the run allows
/// them; stem extension always admits them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarDefinition {
    min_loop_size: usize,
    max_gap_size: usize,
    canonical: Vec<(Base, Base)>,
    wobble: Vec<(Base, Base)>,
}

impl Default for GrammarDefinition {
    fn default() -> Self {
        Self {
            min_loop_size: DEFAULT_MIN_LOOP_SIZE,
            max_gap_size: DEFAULT_MAX_GAP_SIZE,
            canonical: vec![(Base::A, Base::U), (Base::G, Base::C)],
            wobble: vec![(Base::G, Base::U)],
        }
    }
}

impl GrammarDefinition {
    pub fn load(path: &Path) -> Result<Self, GrammarError> {
        let content = std::fs::read_to_string(path).map_err(|e| GrammarError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let raw: RawGrammar = toml::from_str(&content).map_err(|e| GrammarError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_raw(raw)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, GrammarError> {
        let raw: RawGrammar = toml::from_str(content).map_err(|e| GrammarError::Toml {
            path: "<inline>".to_string(),
            source: e,
        })?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawGrammar) -> Result<Self, GrammarError> {
        if raw.min_loop_size == 0 {
            return Err(GrammarError::Invalid(
                "min_loop_size must be at least 1".to_string(),
            ));
        }
        let canonical = parse_pair_list(&raw.pairs.canonical)?;
        let wobble = parse_pair_list(&raw.pairs.wobble)?;
        if canonical.is_empty() {
            return Err(GrammarError::Invalid(
                "at least one canonical pair is required".to_string(),
            ));
        }
        Ok(Self {
            min_loop_size: raw.min_loop_size,
            max_gap_size: raw.max_gap_size,
            canonical,
            wobble,
        })
    }

    /// Minimum number of unpaired bases between adjacent stem arms.
    pub fn min_loop_size(&self) -> usize {
        self.min_loop_size
    }

    /// Maximum number of unpaired bases between the innermost opening arm and
    /// the innermost closing arm of a core.
    pub fn max_gap_size(&self) -> usize {
        self.max_gap_size
    }

    /// Pairs admitted as pseudoknot core anchors.
    pub fn core_matrix(&self, allow_ug: bool) -> PairMatrix {
        let mut matrix = PairMatrix::default();
        for &(a, b) in &self.canonical {
            matrix.insert(a, b);
        }
        if allow_ug {
            for &(a, b) in &self.wobble {
                matrix.insert(a, b);
            }
        }
        matrix
    }

    /// Pairs admitted when extending a stem outward from its core.
    pub fn extension_matrix(&self) -> PairMatrix {
        let mut matrix = PairMatrix::default();
        for &(a, b) in self.canonical.iter().chain(self.wobble.iter()) {
            matrix.insert(a, b);
        }
        matrix
    }
}

fn parse_pair_list(entries: &[String]) -> Result<Vec<(Base, Base)>, GrammarError> {
    let mut pairs = Vec::with_capacity(entries.len());
    for entry in entries {
        let mut chars = entry.chars();
        let (a, b, rest) = (chars.next(), chars.next(), chars.next());
        match (a, b, rest) {
            (Some(a), Some(b), None) => match (Base::from_char(a), Base::from_char(b)) {
                (Some(a), Some(b)) => pairs.push((a, b)),
                _ => {
                    return Err(GrammarError::Invalid(format!(
                        "pair '{}' contains a non-nucleotide symbol",
                        entry
                    )));
                }
            },
            _ => {
                return Err(GrammarError::Invalid(format!(
                    "pair '{}' must be exactly two nucleotides",
                    entry
                )));
            }
        }
    }
    Ok(pairs)
}
