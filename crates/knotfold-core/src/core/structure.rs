use itertools::Itertools;
use std::fmt;

/// Bracket alphabet by crossing level. Level 0 never crosses itself; higher
/// levels cross every lower level.
const BRACKETS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('{', '}')];

/// The number of crossing levels the dot-bracket alphabet can express.
pub const MAX_LEVELS: usize = BRACKETS.len();

/// A contiguous run of nested base pairs, ordered outermost to innermost.
///
/// Every pair `(i, j)` satisfies `i < j`, and consecutive pairs step inward by
/// exactly one on both sides. The level selects the bracket type used when the
/// stem is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stem {
    level: usize,
    pairs: Vec<(usize, usize)>,
}

impl Stem {
    /// Builds a stem from its innermost (core) pair and an outward extension
    /// depth. `extent = 0` yields the bare core pair.
    pub fn from_core(level: usize, core: (usize, usize), extent: usize) -> Self {
        debug_assert!(level < MAX_LEVELS);
        debug_assert!(core.0 + 1 < core.1);
        debug_assert!(extent <= core.0);
        let pairs = (0..=extent)
            .rev()
            .map(|a| (core.0 - a, core.1 + a))
            .collect();
        Self { level, pairs }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    /// Pairs ordered outermost to innermost.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Number of base pairs in the stem.
    pub fn depth(&self) -> usize {
        self.pairs.len()
    }

    /// The outermost pair.
    pub fn outer(&self) -> (usize, usize) {
        self.pairs[0]
    }

    /// The innermost pair.
    pub fn core(&self) -> (usize, usize) {
        self.pairs[self.pairs.len() - 1]
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, j) in &self.pairs {
            write!(f, "({},{})", i, j)?;
        }
        Ok(())
    }
}

/// A fully normalized candidate structure: the dot-bracket encoding over the
/// whole sequence, its stems, and the energy assigned by the model.
#[derive(Debug, Clone, PartialEq)]
pub struct PseudoknotCandidate {
    dot_bracket: String,
    stems: Vec<Stem>,
    energy: f64,
}

impl PseudoknotCandidate {
    pub fn new(sequence_len: usize, stems: Vec<Stem>, energy: f64) -> Self {
        let dot_bracket = render_dot_bracket(sequence_len, &stems);
        Self {
            dot_bracket,
            stems,
            energy,
        }
    }

    pub fn dot_bracket(&self) -> &str {
        &self.dot_bracket
    }

    pub fn stems(&self) -> &[Stem] {
        &self.stems
    }

    /// Number of stem segments, not base pairs.
    pub fn stem_count(&self) -> usize {
        self.stems.len()
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Semicolon-separated stem notation, one segment per stem, used for the
    /// tabular exports.
    pub fn stems_notation(&self) -> String {
        stems_notation(&self.stems)
    }
}

/// Semicolon-separated stem notation for a stem list.
pub fn stems_notation(stems: &[Stem]) -> String {
    stems.iter().map(Stem::to_string).join(";")
}

/// Renders the dot-bracket string for a set of stems over `sequence_len`
/// positions. Positions not covered by any stem are unpaired dots.
pub fn render_dot_bracket(sequence_len: usize, stems: &[Stem]) -> String {
    let mut out = vec!['.'; sequence_len];
    for stem in stems {
        let (open, close) = BRACKETS[stem.level()];
        for &(i, j) in stem.pairs() {
            out[i] = open;
            out[j] = close;
        }
    }
    out.into_iter().collect()
}
