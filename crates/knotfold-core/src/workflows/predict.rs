use crate::core::energy::EnergyModel;
use crate::core::grammar::GrammarDefinition;
use crate::core::sequence::RnaSequence;
use crate::core::structure::PseudoknotCandidate;
use crate::engine::config::FoldConfig;
use crate::engine::error::FoldError;
use crate::engine::parser::GrammarEngine;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::search::CandidateSearch;
use crate::engine::selector::{CandidateRecord, SelectionOutcome, StructureSelector};
use crate::engine::windows::enumerate_windows;
use tracing::{info, instrument};

/// The outcome of a prediction run. An empty `ranked` list means no
/// pseudoknot was found; it is a valid result, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    /// Scored candidates, best first.
    pub ranked: Vec<PseudoknotCandidate>,
    /// Every candidate the search enumerated, in enumeration order.
    pub records: Vec<CandidateRecord>,
}

impl Prediction {
    pub fn best(&self) -> Option<&PseudoknotCandidate> {
        self.ranked.first()
    }
}

/// Runs the full prediction pipeline on one sequence.
///
/// The run is deterministic: for a fixed sequence and configuration the
/// ranked list is identical across repeated invocations and thread counts.
#[instrument(skip_all, fields(sequence_len = sequence.len()))]
pub fn run(
    sequence: &RnaSequence,
    config: &FoldConfig,
    reporter: &ProgressReporter,
) -> Result<Prediction, FoldError> {
    config.validate()?;

    reporter.report(Progress::PhaseStart {
        name: "Preparation",
    });
    let definition = match &config.grammar_path {
        Some(path) => GrammarDefinition::load(path)?,
        None => GrammarDefinition::default(),
    };
    let model = match &config.energy_path {
        Some(path) => EnergyModel::load(path)?,
        None => EnergyModel::default(),
    };
    let engine = GrammarEngine::new(definition, config.allow_ug, config.max_crossing_depth);
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Window Enumeration",
    });
    let windows = enumerate_windows(sequence.len(), config.max_loop_size);
    info!(windows = windows.len(), "enumerated search windows");
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Candidate Search",
    });
    let search = CandidateSearch::new(&engine, sequence);
    let raws = search.run(&windows, reporter)?;
    info!(candidates = raws.len(), "candidate search finished");
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart { name: "Selection" });
    let selector = StructureSelector::new(
        &engine,
        sequence,
        &model,
        config.max_stem_allow_smaller,
        config.prune_early,
    );
    let SelectionOutcome { ranked, records } = selector.select(&raws);
    reporter.report(Progress::PhaseFinish);

    if ranked.is_empty() {
        info!("no pseudoknot candidate satisfies the grammar for this sequence");
    } else {
        info!(
            structure = ranked[0].dot_bracket(),
            energy = ranked[0].energy(),
            "prediction finished"
        );
    }
    Ok(Prediction { ranked, records })
}
