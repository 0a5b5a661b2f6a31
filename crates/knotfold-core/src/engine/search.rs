use super::error::FoldError;
use super::parser::GrammarEngine;
use super::progress::{Progress, ProgressReporter};
use super::windows::WindowBoundary;
use crate::core::sequence::RnaSequence;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One core match tagged with absolute sequence positions and the window that
/// produced it. Transient; consumed by the structure selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCandidate {
    pub window: WindowBoundary,
    pub opens: Vec<usize>,
    pub closes: Vec<usize>,
}

impl RawCandidate {
    pub fn stem_count(&self) -> usize {
        self.opens.len()
    }
}

/// Runs the grammar engine over every window and collects the tagged matches.
///
/// Windows are independent: workers read only the shared sequence and engine
/// and return owned vectors. Any window failure aborts the whole search; the
/// per-window results are flattened in window order regardless of which
/// worker finished first.
pub struct CandidateSearch<'a> {
    engine: &'a GrammarEngine,
    sequence: &'a RnaSequence,
}

impl<'a> CandidateSearch<'a> {
    pub fn new(engine: &'a GrammarEngine, sequence: &'a RnaSequence) -> Self {
        Self { engine, sequence }
    }

    pub fn run(
        &self,
        windows: &[WindowBoundary],
        reporter: &ProgressReporter,
    ) -> Result<Vec<RawCandidate>, FoldError> {
        reporter.report(Progress::TaskStart {
            total_steps: windows.len() as u64,
        });

        let eval = |window: &WindowBoundary| -> Result<Vec<RawCandidate>, FoldError> {
            let found = self.search_window(*window)?;
            reporter.report(Progress::TaskIncrement { steps: 1 });
            Ok(found)
        };

        #[cfg(feature = "parallel")]
        let per_window: Result<Vec<Vec<RawCandidate>>, FoldError> =
            windows.par_iter().map(eval).collect();
        #[cfg(not(feature = "parallel"))]
        let per_window: Result<Vec<Vec<RawCandidate>>, FoldError> =
            windows.iter().map(eval).collect();

        let candidates = per_window?.into_iter().flatten().collect();
        reporter.report(Progress::TaskFinish);
        Ok(candidates)
    }

    fn search_window(&self, window: WindowBoundary) -> Result<Vec<RawCandidate>, FoldError> {
        let bases = self
            .sequence
            .bases()
            .get(window.start..window.end)
            .ok_or_else(|| FoldError::Search {
                start: window.start,
                end: window.end,
                message: "window exceeds sequence bounds".to_string(),
            })?;

        Ok(self
            .engine
            .parse_window(bases)
            .into_iter()
            .map(|m| RawCandidate {
                window,
                opens: m.opens.iter().map(|o| o + window.start).collect(),
                closes: m.closes.iter().map(|c| c + window.start).collect(),
            })
            .collect())
    }
}
