pub mod classify;
pub mod composition;
pub mod nucleic;
pub mod protein;
pub mod read;
pub mod transform;
pub mod translate;

pub use classify::{classify, is_nucleic_acid};
pub use nucleic::NucleicSeq;
pub use protein::Protein;
pub use read::{Read, ReadBatch};

use crate::error::{SeqError, SeqResult};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeqType {
    Dna,
    Rna,
}

impl SeqType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeqType::Dna => "dna",
            SeqType::Rna => "rna",
        }
    }
}

impl fmt::Display for SeqType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeqType {
    type Err = SeqError;

    fn from_str(s: &str) -> SeqResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dna" => Ok(SeqType::Dna),
            "rna" => Ok(SeqType::Rna),
            _ => Err(SeqError::UnknownSeqType { name: s.to_string() }),
        }
    }
}

/// Reading frame for translation, counted from 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TranslationFrame {
    #[default]
    One,
    Two,
    Three,
}

impl TranslationFrame {
    /// Number of leading bases skipped before the first codon.
    pub fn offset(&self) -> usize {
        match self {
            TranslationFrame::One => 0,
            TranslationFrame::Two => 1,
            TranslationFrame::Three => 2,
        }
    }
}

impl TryFrom<i64> for TranslationFrame {
    type Error = SeqError;

    fn try_from(frame: i64) -> SeqResult<Self> {
        match frame {
            1 => Ok(TranslationFrame::One),
            2 => Ok(TranslationFrame::Two),
            3 => Ok(TranslationFrame::Three),
            _ => Err(SeqError::InvalidFrame { frame }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_type_parses_any_case() {
        assert_eq!("DNA".parse::<SeqType>().unwrap(), SeqType::Dna);
        assert_eq!("rna".parse::<SeqType>().unwrap(), SeqType::Rna);
        assert!("protein".parse::<SeqType>().is_err());
        assert_eq!(SeqType::Rna.to_string(), "rna");
    }

    #[test]
    fn frame_from_int() {
        assert_eq!(TranslationFrame::try_from(1).unwrap(), TranslationFrame::One);
        assert_eq!(TranslationFrame::try_from(3).unwrap().offset(), 2);
        assert_eq!(
            TranslationFrame::try_from(0),
            Err(SeqError::InvalidFrame { frame: 0 })
        );
        assert!(TranslationFrame::try_from(4).is_err());
        assert_eq!(TranslationFrame::default(), TranslationFrame::One);
    }
}
