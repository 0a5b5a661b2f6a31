use super::windows::MIN_WINDOW_SPAN;
use crate::core::grammar::{GrammarDefinition, PairMatrix};
use crate::core::sequence::Base;
use std::sync::OnceLock;

/// The innermost pair of each stem of one pseudoknot core, window relative.
///
/// `opens` and `closes` are strictly ascending and of equal length k, with
/// `opens[i]` paired to `closes[i]`. All pairs mutually cross:
/// `opens[k-1] < closes[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreMatch {
    pub opens: Vec<usize>,
    pub closes: Vec<usize>,
}

/// Matches pseudoknot cores inside a single window.
///
/// The engine owns the compiled grammar for one run. Pair-lookup matrices are
/// compiled lazily on first use and shared across worker threads.
pub struct GrammarEngine {
    definition: GrammarDefinition,
    allow_ug: bool,
    max_crossing_depth: usize,
    core_matrix: OnceLock<PairMatrix>,
    extension_matrix: OnceLock<PairMatrix>,
}

impl GrammarEngine {
    pub fn new(definition: GrammarDefinition, allow_ug: bool, max_crossing_depth: usize) -> Self {
        Self {
            definition,
            allow_ug,
            max_crossing_depth,
            core_matrix: OnceLock::new(),
            extension_matrix: OnceLock::new(),
        }
    }

    pub fn definition(&self) -> &GrammarDefinition {
        &self.definition
    }

    fn core_matrix(&self) -> &PairMatrix {
        self.core_matrix
            .get_or_init(|| self.definition.core_matrix(self.allow_ug))
    }

    /// Pairs admitted during stem extension. Wobble pairs are always included
    /// here; `allow_ug` restricts core matching only.
    pub fn extension_matrix(&self) -> &PairMatrix {
        self.extension_matrix
            .get_or_init(|| self.definition.extension_matrix())
    }

    /// Enumerates every core match in the window, in a fully deterministic
    /// order: ascending stem count, then lexicographic over the pair
    /// positions. An empty result is normal for most windows.
    ///
    /// The match pattern is anchored: the first open sits at the window start
    /// and the last close at the window end. Every other placement of the
    /// same core is found in the corresponding smaller window.
    pub fn parse_window(&self, bases: &[Base]) -> Vec<CoreMatch> {
        let mut matches = Vec::new();
        if bases.len() < MIN_WINDOW_SPAN {
            return matches;
        }
        for k in 2..=self.max_crossing_depth {
            let mut opens = vec![0];
            self.extend_opens(bases, k, &mut opens, &mut matches);
        }
        matches
    }

    /// Picks the remaining opening positions, then hands over to close
    /// enumeration. `min_step` is the smallest distance between adjacent arms
    /// of the same side (one base of loop in between at minimum).
    fn extend_opens(
        &self,
        bases: &[Base],
        k: usize,
        opens: &mut Vec<usize>,
        out: &mut Vec<CoreMatch>,
    ) {
        let m = bases.len();
        let min_step = self.definition.min_loop_size() + 1;
        if opens.len() == k {
            let o_last = opens[k - 1];
            // The last stem pairs with the anchored window end.
            if self.core_matrix().admits(bases[o_last], bases[m - 1]) {
                let mut closes = Vec::with_capacity(k);
                self.extend_closes(bases, k, opens, &mut closes, out);
            }
            return;
        }

        let i = opens.len();
        // Leave room for the later opens and for k spaced closes.
        let bound = m
            .saturating_sub(2)
            .saturating_sub((k - 1) * min_step)
            .saturating_sub((k - 1 - i) * min_step);
        let mut o = opens[i - 1] + min_step;
        while o <= bound {
            opens.push(o);
            self.extend_opens(bases, k, opens, out);
            opens.pop();
            o += 1;
        }
    }

    fn extend_closes(
        &self,
        bases: &[Base],
        k: usize,
        opens: &[usize],
        closes: &mut Vec<usize>,
        out: &mut Vec<CoreMatch>,
    ) {
        let m = bases.len();
        let min_step = self.definition.min_loop_size() + 1;

        if closes.len() == k - 1 {
            // The final close is the anchored window end; its pair with the
            // last open was checked before close enumeration began.
            let ok = match closes.last() {
                Some(&prev) => m - 1 >= prev + min_step,
                None => true,
            };
            if ok {
                let mut closes = closes.clone();
                closes.push(m - 1);
                out.push(CoreMatch {
                    opens: opens.to_vec(),
                    closes,
                });
            }
            return;
        }

        let j = closes.len();
        let (lo, hi) = if j == 0 {
            // The first close sits just past the last open, within the
            // grammar's central gap bound.
            let o_last = opens[k - 1];
            (o_last + 1, o_last + 1 + self.definition.max_gap_size())
        } else {
            (closes[j - 1] + min_step, m)
        };
        // Leave room for the remaining spaced closes up to the window end.
        let hi = hi.min((m - 1).saturating_sub((k - 1 - j) * min_step));

        for c in lo..=hi {
            if self.core_matrix().admits(bases[opens[j]], bases[c]) {
                closes.push(c);
                self.extend_closes(bases, k, opens, closes, out);
                closes.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sequence::RnaSequence;

    fn engine(allow_ug: bool, depth: usize) -> GrammarEngine {
        GrammarEngine::new(GrammarDefinition::default(), allow_ug, depth)
    }

    fn bases(s: &str) -> Vec<Base> {
        s.parse::<RnaSequence>().unwrap().bases().to_vec()
    }

    #[test]
    fn windows_below_minimal_span_match_nothing() {
        let engine = engine(false, 2);
        assert!(engine.parse_window(&bases("GAGCU")).is_empty());
    }

    #[test]
    fn finds_the_minimal_anchored_core() {
        let engine = engine(false, 2);
        let matches = engine.parse_window(&bases("GAGCUC"));
        assert_eq!(
            matches,
            vec![CoreMatch {
                opens: vec![0, 2],
                closes: vec![3, 5],
            }]
        );
    }

    #[test]
    fn allow_ug_admits_wobble_cores() {
        // Position 4 is U; pairing (0, 4) G-U needs allow_ug.
        let window = bases("GAGCUCC");
        let strict = engine(false, 2).parse_window(&window);
        assert_eq!(strict.len(), 1);
        assert_eq!(strict[0].closes, vec![3, 6]);

        let wobbly = engine(true, 2).parse_window(&window);
        assert_eq!(wobbly.len(), 2);
        assert_eq!(wobbly[1].closes, vec![4, 6]);
    }

    #[test]
    fn matches_are_mutually_crossing_and_spaced() {
        let engine = engine(true, 3);
        for m in engine.parse_window(&bases("GGCAGCAUCGGUAUCC")) {
            let k = m.opens.len();
            assert_eq!(m.closes.len(), k);
            assert!(m.opens[k - 1] < m.closes[0]);
            assert!(m.closes[0] - m.opens[k - 1] - 1 <= 2);
            for w in m.opens.windows(2).chain(m.closes.windows(2)) {
                assert!(w[1] - w[0] >= 2);
            }
        }
    }

    #[test]
    fn depth_three_cores_require_the_wider_engine() {
        // GGG A GGG A CCC A CCC with a triple crossing core is impossible;
        // use a sequence with three interleaved pairs instead.
        let window = bases("GAGAGACUCUC");
        let shallow = engine(false, 2).parse_window(&window);
        assert!(shallow.iter().all(|m| m.opens.len() == 2));

        let deep = engine(false, 3).parse_window(&window);
        assert!(deep.iter().any(|m| m.opens.len() == 3));
        // Ascending stem count, then lexicographic position order.
        let ks: Vec<usize> = deep.iter().map(|m| m.opens.len()).collect();
        let mut sorted = ks.clone();
        sorted.sort_unstable();
        assert_eq!(ks, sorted);
    }
}
