use crate::core::sequence::{Base, RnaSequence};
use crate::core::structure::Stem;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnergyError {
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
}

/// Additive free-energy model for pseudoknot candidates.
///
/// Stabilizing terms are negative: one per base pair by identity, plus a
/// stacking bonus for every adjacent pair step within a stem. Destabilizing
/// terms are linear in the unpaired loop lengths of the knot. Bases outside
/// the knot span contribute nothing.
///
/// Coefficients can be overridden from a TOML parameter file; omitted keys
/// keep their defaults.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct EnergyModel {
    /// Stabilization per G-C pair (kcal/mol).
    pub pair_gc: f64,
    /// Stabilization per A-U pair.
    pub pair_au: f64,
    /// Stabilization per G-U wobble pair.
    pub pair_gu: f64,
    /// Stacking bonus per adjacent pair step within a stem.
    pub stack_bonus: f64,
    /// Penalty per unpaired base between consecutive opening arms.
    pub open_loop_penalty: f64,
    /// Penalty per unpaired base in the central inter-stem gap. Deliberately
    /// steep: of two folds with similar pairing the one with the tighter
    /// central gap must win.
    pub gap_penalty: f64,
    /// Penalty per unpaired base between consecutive closing arms.
    pub close_loop_penalty: f64,
}

impl Default for EnergyModel {
    fn default() -> Self {
        Self {
            pair_gc: -3.0,
            pair_au: -2.0,
            pair_gu: -1.0,
            stack_bonus: -1.0,
            open_loop_penalty: 0.3,
            gap_penalty: 2.5,
            close_loop_penalty: 0.2,
        }
    }
}

impl EnergyModel {
    pub fn load(path: &Path) -> Result<Self, EnergyError> {
        let content = std::fs::read_to_string(path).map_err(|e| EnergyError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| EnergyError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }

    fn pair_energy(&self, a: Base, b: Base) -> f64 {
        match (a, b) {
            (Base::G, Base::C) | (Base::C, Base::G) => self.pair_gc,
            (Base::A, Base::U) | (Base::U, Base::A) => self.pair_au,
            (Base::G, Base::U) | (Base::U, Base::G) => self.pair_gu,
            _ => 0.0,
        }
    }

    /// Scores a normalized candidate. `stems` must be ordered by level, which
    /// for a knot coincides with ascending opening-arm position. The summation
    /// order is fixed so repeated runs produce bit-identical energies.
    pub fn score(&self, sequence: &RnaSequence, stems: &[Stem]) -> f64 {
        let mut energy = 0.0;

        for stem in stems {
            for &(i, j) in stem.pairs() {
                energy += self.pair_energy(sequence[i], sequence[j]);
            }
            energy += self.stack_bonus * (stem.depth() - 1) as f64;
        }

        for pair in stems.windows(2) {
            let open_gap = pair[1].outer().0 - pair[0].core().0 - 1;
            energy += self.open_loop_penalty * open_gap as f64;

            let close_gap = pair[1].core().1 - pair[0].outer().1 - 1;
            energy += self.close_loop_penalty * close_gap as f64;
        }

        if let (Some(first), Some(last)) = (stems.first(), stems.last()) {
            if stems.len() > 1 {
                let central_gap = first.core().1 - last.core().0 - 1;
                energy += self.gap_penalty * central_gap as f64;
            }
        }

        energy
    }
}
