use crate::error::Result;
use knotfold::core::structure::PseudoknotCandidate;
use knotfold::engine::selector::CandidateRecord;
use std::path::Path;
use tracing::info;

/// Writes every enumerated candidate, one row per candidate, in enumeration
/// order.
pub fn write_records(path: &Path, records: &[CandidateRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["dot_bracket", "stems"])?;
    for record in records {
        writer.write_record([record.dot_bracket.as_str(), record.stems.as_str()])?;
    }
    writer.flush()?;
    info!(rows = records.len(), path = %path.display(), "wrote candidate CSV");
    Ok(())
}

/// Writes the ranked candidates, best first, with their energies.
pub fn write_ranked(path: &Path, ranked: &[PseudoknotCandidate]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["dot_bracket", "stems", "energy"])?;
    for candidate in ranked {
        let stems = candidate.stems_notation();
        let energy = format!("{:.3}", candidate.energy());
        writer.write_record([candidate.dot_bracket(), stems.as_str(), energy.as_str()])?;
    }
    writer.flush()?;
    info!(rows = ranked.len(), path = %path.display(), "wrote results CSV");
    Ok(())
}
