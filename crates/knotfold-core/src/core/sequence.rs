use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Invalid nucleotide '{symbol}' at position {position} (expected A, C, G or U)")]
    InvalidSymbol { position: usize, symbol: char },

    #[error("Sequence is empty")]
    Empty,
}

/// A single RNA nucleotide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Base {
    A,
    C,
    G,
    U,
}

impl Base {
    /// Parses a nucleotide character, case-insensitively. `T` is not accepted;
    /// DNA input must be transcribed by the caller.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Base::A),
            'C' => Some(Base::C),
            'G' => Some(Base::G),
            'U' => Some(Base::U),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::U => 'U',
        }
    }

    /// Index into 4x4 pair-lookup tables.
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Base::A => 0,
            Base::C => 1,
            Base::G => 2,
            Base::U => 3,
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// An immutable, validated RNA sequence. Case is normalized at this boundary;
/// all downstream indices refer to positions in this sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RnaSequence {
    bases: Vec<Base>,
}

impl RnaSequence {
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    pub fn iter(&self) -> impl Iterator<Item = Base> + '_ {
        self.bases.iter().copied()
    }
}

impl FromStr for RnaSequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SequenceError::Empty);
        }
        let mut bases = Vec::with_capacity(s.len());
        for (position, symbol) in s.chars().enumerate() {
            match Base::from_char(symbol) {
                Some(base) => bases.push(base),
                None => return Err(SequenceError::InvalidSymbol { position, symbol }),
            }
        }
        Ok(Self { bases })
    }
}

impl Index<usize> for RnaSequence {
    type Output = Base;

    fn index(&self, index: usize) -> &Base {
        &self.bases[index]
    }
}

impl fmt::Display for RnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.bases {
            write!(f, "{}", base)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes_case() {
        let seq: RnaSequence = "acgUGca".parse().unwrap();
        assert_eq!(seq.len(), 7);
        assert_eq!(seq.to_string(), "ACGUGCA");
        assert_eq!(seq[3], Base::U);
    }

    #[test]
    fn rejects_invalid_symbol_with_position() {
        let err = "ACGTX".parse::<RnaSequence>().unwrap_err();
        // 'T' is the first invalid symbol, before 'X'.
        assert_eq!(
            err,
            SequenceError::InvalidSymbol {
                position: 3,
                symbol: 'T'
            }
        );
    }

    #[test]
    fn rejects_empty_input() {
        let err = "".parse::<RnaSequence>().unwrap_err();
        assert_eq!(err, SequenceError::Empty);
    }

    #[test]
    fn base_indices_are_distinct() {
        let mut seen = [false; 4];
        for base in [Base::A, Base::C, Base::G, Base::U] {
            assert!(!seen[base.index()]);
            seen[base.index()] = true;
        }
    }
}
