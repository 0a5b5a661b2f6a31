use super::parser::GrammarEngine;
use super::search::RawCandidate;
use crate::core::energy::EnergyModel;
use crate::core::sequence::RnaSequence;
use crate::core::structure::{render_dot_bracket, stems_notation, PseudoknotCandidate, Stem};
use tracing::debug;

/// One normalized candidate as it entered selection, kept for the tabular
/// export of everything the search enumerated, including candidates the
/// stem-count bound later discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRecord {
    pub dot_bracket: String,
    pub stems: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOutcome {
    /// Scored survivors, best first.
    pub ranked: Vec<PseudoknotCandidate>,
    /// Every normalized candidate, in enumeration order.
    pub records: Vec<CandidateRecord>,
}

/// Turns raw core matches into ranked structures: stem extension, the
/// stem-count preference bound, energy scoring, and the final deterministic
/// sort by `(energy, stem_count, dot_bracket)`.
pub struct StructureSelector<'a> {
    engine: &'a GrammarEngine,
    sequence: &'a RnaSequence,
    model: &'a EnergyModel,
    max_stem_allow_smaller: usize,
    prune_early: bool,
}

impl<'a> StructureSelector<'a> {
    pub fn new(
        engine: &'a GrammarEngine,
        sequence: &'a RnaSequence,
        model: &'a EnergyModel,
        max_stem_allow_smaller: usize,
        prune_early: bool,
    ) -> Self {
        Self {
            engine,
            sequence,
            model,
            max_stem_allow_smaller,
            prune_early,
        }
    }

    pub fn select(&self, raws: &[RawCandidate]) -> SelectionOutcome {
        let len = self.sequence.len();
        let mut records = Vec::with_capacity(raws.len());
        let mut scored = Vec::new();
        let mut min_stems = usize::MAX;
        let mut pruned = 0usize;

        for raw in raws {
            let stems = self.extend(raw);
            let count = stems.len();
            min_stems = min_stems.min(count);
            records.push(CandidateRecord {
                dot_bracket: render_dot_bracket(len, &stems),
                stems: stems_notation(&stems),
            });

            // With early pruning the bound tracks the running minimum, which
            // can only shrink, so nothing skipped here would survive the
            // final bound below.
            if self.prune_early && count > min_stems + self.max_stem_allow_smaller {
                pruned += 1;
                continue;
            }
            let energy = self.model.score(self.sequence, &stems);
            scored.push(PseudoknotCandidate::new(len, stems, energy));
        }

        let bound = min_stems.saturating_add(self.max_stem_allow_smaller);
        let mut ranked: Vec<PseudoknotCandidate> = scored
            .into_iter()
            .filter(|c| c.stem_count() <= bound)
            .collect();
        ranked.sort_by(|a, b| {
            a.energy()
                .total_cmp(&b.energy())
                .then_with(|| a.stem_count().cmp(&b.stem_count()))
                .then_with(|| a.dot_bracket().cmp(b.dot_bracket()))
        });

        debug!(
            candidates = records.len(),
            ranked = ranked.len(),
            pruned_early = pruned,
            "selection finished"
        );
        SelectionOutcome { ranked, records }
    }

    /// Extends each core pair outward while the grammar admits the pair and
    /// the arm stays clear of the neighboring stems' cores. The extension
    /// regions of distinct stems never overlap under these bounds, so the
    /// per-stem greedy maximum is order independent.
    fn extend(&self, raw: &RawCandidate) -> Vec<Stem> {
        let matrix = self.engine.extension_matrix();
        let bases = self.sequence.bases();
        let count = raw.stem_count();
        let mut stems = Vec::with_capacity(count);

        for i in 0..count {
            let (open, close) = (raw.opens[i], raw.closes[i]);
            let left_floor = if i == 0 { 0 } else { raw.opens[i - 1] + 1 };
            let right_ceil = if i == count - 1 {
                self.sequence.len() - 1
            } else {
                raw.closes[i + 1] - 1
            };

            let mut extent = 0;
            while open >= extent + 1
                && open - extent - 1 >= left_floor
                && close + extent + 1 <= right_ceil
                && matrix.admits(bases[open - extent - 1], bases[close + extent + 1])
            {
                extent += 1;
            }
            stems.push(Stem::from_core(i, (open, close), extent));
        }
        stems
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grammar::GrammarDefinition;
    use crate::engine::windows::WindowBoundary;

    fn engine() -> GrammarEngine {
        GrammarEngine::new(GrammarDefinition::default(), false, 3)
    }

    fn raw(start: usize, end: usize, opens: &[usize], closes: &[usize]) -> RawCandidate {
        RawCandidate {
            window: WindowBoundary { start, end },
            opens: opens.to_vec(),
            closes: closes.to_vec(),
        }
    }

    #[test]
    fn extension_stops_at_invalid_pairs_and_sequence_ends() {
        let sequence: RnaSequence = "AAGGAUGAACCUAC".parse().unwrap();
        let engine = engine();
        let model = EnergyModel::default();
        let selector = StructureSelector::new(&engine, &sequence, &model, 2, false);

        let outcome = selector.select(&[raw(3, 14, &[3, 6], &[9, 13])]);
        assert_eq!(outcome.ranked.len(), 1);
        // Stem 0 extends twice, (2,10) G-C then (1,11) A-U; (0,12) A-A stops
        // it. Stem 1 is pinned against the sequence end.
        assert_eq!(outcome.ranked[0].dot_bracket(), ".(((..[..))).]");
        assert_eq!(
            outcome.ranked[0].stems_notation(),
            "(1,11)(2,10)(3,9);(6,13)"
        );
    }

    #[test]
    fn extension_uses_wobble_pairs_unconditionally() {
        // (2,10) is G-U, reachable only through extension.
        let sequence: RnaSequence = "AAGGAUGAACUUAC".parse().unwrap();
        let engine = engine();
        let model = EnergyModel::default();
        let selector = StructureSelector::new(&engine, &sequence, &model, 2, false);

        let outcome = selector.select(&[raw(3, 14, &[3, 6], &[9, 13])]);
        assert!(outcome.ranked[0]
            .stems_notation()
            .starts_with("(1,11)(2,10)(3,9)"));
    }

    #[test]
    fn left_arm_never_crosses_the_previous_core() {
        // The pair (3,16) is valid G-C, but position 3 is stem 0's core
        // open, so stem 1 must stop its leftward extension at 4.
        let sequence: RnaSequence = "AAAGAGGAACAAACCUC".parse().unwrap();
        let engine = engine();
        let model = EnergyModel::default();
        let selector = StructureSelector::new(&engine, &sequence, &model, 2, false);

        let outcome = selector.select(&[raw(3, 14, &[3, 6], &[9, 13])]);
        assert_eq!(
            outcome.ranked[0].stems_notation(),
            "(3,9);(4,15)(5,14)(6,13)"
        );
    }

    #[test]
    fn early_pruning_never_changes_the_ranking() {
        let sequence: RnaSequence = "GAGAGACUCUCAAA".parse().unwrap();
        let engine = engine();
        let model = EnergyModel::default();
        let raws = vec![
            raw(0, 11, &[0, 2, 4], &[6, 8, 10]),
            raw(0, 11, &[0, 4], &[6, 10]),
        ];

        let strict = StructureSelector::new(&engine, &sequence, &model, 0, false);
        let eager = StructureSelector::new(&engine, &sequence, &model, 0, true);
        let plain = strict.select(&raws);
        let pruned = eager.select(&raws);

        assert_eq!(plain.ranked, pruned.ranked);
        assert_eq!(plain.records, pruned.records);
        // The three-stem candidate is recorded but outranked by the bound.
        assert_eq!(plain.records.len(), 2);
        assert_eq!(plain.ranked.len(), 1);
        assert_eq!(plain.ranked[0].stem_count(), 2);
    }
}
