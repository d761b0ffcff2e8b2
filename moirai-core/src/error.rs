use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeqError {
    #[error("invalid character '{ch}' at position {pos} of sequence {index}")]
    InvalidChar { ch: char, pos: usize, index: usize },

    #[error("sequence {index} is empty and cannot be a nucleic acid")]
    EmptyNucleicAcid { index: usize },

    #[error("sequences are neither uniformly DNA nor uniformly RNA")]
    MixedAlphabet,

    #[error("unknown codon '{codon}'")]
    UnknownCodon { codon: String },

    #[error("empty sequence")]
    EmptySequence,

    #[error("malformed read '{id}': {msg}")]
    MalformedRead { id: String, msg: String },

    #[error("invalid frame: {frame} (must be 1, 2, or 3)")]
    InvalidFrame { frame: i64 },

    #[error("unknown sequence type '{name}' (expected 'dna' or 'rna')")]
    UnknownSeqType { name: String },

    #[error("unknown operation '{name}'")]
    UnknownOperation { name: String },

    #[error("duplicate read id '{id}'")]
    DuplicateReadId { id: String },

    #[error("no sequences given")]
    EmptyBatch,
}

pub type SeqResult<T> = Result<T, SeqError>;
