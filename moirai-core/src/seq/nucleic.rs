use crate::error::SeqResult;
use crate::seq::classify::check_nucleic_acid;
use crate::seq::composition;
use crate::seq::protein::Protein;
use crate::seq::{transform, translate, SeqType, TranslationFrame};
use std::fmt;

/// A non-empty run of A, T, U, G and C bases, case kept as given.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NucleicSeq {
    bytes: Vec<u8>,
}

impl NucleicSeq {
    pub fn new(bytes: Vec<u8>) -> SeqResult<Self> {
        check_nucleic_acid(&[bytes.as_slice()])?;
        Ok(Self { bytes })
    }

    #[inline]
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn reverse(&self) -> Self {
        Self::from_bytes_unchecked(transform::reverse(&self.bytes))
    }

    pub fn complement(&self, seq_type: SeqType) -> Self {
        Self::from_bytes_unchecked(transform::complement(&self.bytes, seq_type))
    }

    pub fn reverse_complement(&self, seq_type: SeqType) -> Self {
        Self::from_bytes_unchecked(transform::reverse_complement(&self.bytes, seq_type))
    }

    pub fn transcribe(&self, seq_type: SeqType) -> Self {
        Self::from_bytes_unchecked(transform::transcribe(&self.bytes, seq_type))
    }

    pub fn translate(&self, seq_type: SeqType, frame: TranslationFrame) -> SeqResult<Protein> {
        translate::translate(&self.bytes, seq_type, frame)
    }

    pub fn gc_content(&self) -> SeqResult<f64> {
        composition::gc_content(&self.bytes)
    }
}

impl AsRef<[u8]> for NucleicSeq {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for NucleicSeq {
    // Bases are ASCII, so each byte is one char.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.bytes.iter().try_for_each(|&b| fmt::Write::write_char(f, b as char))
    }
}

impl TryFrom<&str> for NucleicSeq {
    type Error = crate::error::SeqError;

    fn try_from(s: &str) -> SeqResult<Self> {
        Self::new(s.as_bytes().to_vec())
    }
}
