//! Batch dispatch of sequence operations.
//!
//! [`run`] validates every sequence, settles the batch's [`SeqType`] when the
//! operation needs one, and applies the operation to each sequence in order.

use crate::error::{SeqError, SeqResult};
use crate::seq::classify::{check_nucleic_acid, classify};
use crate::seq::nucleic::NucleicSeq;
use crate::seq::protein::Protein;
use crate::seq::{SeqType, TranslationFrame};
use std::fmt;


/// Per-call settings; `seq_type` overrides classification when set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub seq_type: Option<SeqType>,
    pub frame: TranslationFrame,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seq_type(mut self, seq_type: SeqType) -> Self {
        self.seq_type = Some(seq_type);
        self
    }

    pub fn with_frame(mut self, frame: TranslationFrame) -> Self {
        self.frame = frame;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Reverse,
    Complement,
    ReverseComplement,
    Transcribe,
    Translate { frame: TranslationFrame },
    CountGc,
}

impl Operation {
    /// Parse an operation token; `frame` is used only by `translate`.
    pub fn parse(name: &str, frame: TranslationFrame) -> SeqResult<Self> {
        match name {
            "reverse" => Ok(Operation::Reverse),
            "complement" => Ok(Operation::Complement),
            "reverse_complement" => Ok(Operation::ReverseComplement),
            "transcribe" => Ok(Operation::Transcribe),
            "translate" => Ok(Operation::Translate { frame }),
            "count_gc" => Ok(Operation::CountGc),
            _ => Err(SeqError::UnknownOperation {
                name: name.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Reverse => "reverse",
            Operation::Complement => "complement",
            Operation::ReverseComplement => "reverse_complement",
            Operation::Transcribe => "transcribe",
            Operation::Translate { .. } => "translate",
            Operation::CountGc => "count_gc",
        }
    }

    pub fn needs_seq_type(&self) -> bool {
        !matches!(self, Operation::Reverse | Operation::CountGc)
    }

    pub fn apply(&self, seq: &NucleicSeq, seq_type: SeqType) -> SeqResult<Value> {
        let value = match *self {
            Operation::Reverse => Value::Seq(seq.reverse().to_string()),
            Operation::Complement => Value::Seq(seq.complement(seq_type).to_string()),
            Operation::ReverseComplement => {
                Value::Seq(seq.reverse_complement(seq_type).to_string())
            }
            Operation::Transcribe => Value::Seq(seq.transcribe(seq_type).to_string()),
            Operation::Translate { frame } => Value::Protein(seq.translate(seq_type, frame)?),
            Operation::CountGc => Value::GcContent(seq.gc_content()?),
        };
        Ok(value)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one operation on one sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Seq(String),
    Protein(Protein),
    GcContent(f64),
}

impl Value {
    pub fn as_gc_content(&self) -> Option<f64> {
        match self {
            Value::GcContent(gc) => Some(*gc),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Seq(s) => f.write_str(s),
            Value::Protein(p) => write!(f, "{p}"),
            Value::GcContent(gc) => write!(f, "{gc}"),
        }
    }
}

/// A lone value for a single input sequence, otherwise one value per input.
#[derive(Clone, Debug, PartialEq)]
pub enum Output {
    Single(Value),
    Many(Vec<Value>),
}

impl Output {
    pub fn into_vec(self) -> Vec<Value> {
        match self {
            Output::Single(value) => vec![value],
            Output::Many(values) => values,
        }
    }
}

pub fn run<S: AsRef<[u8]>>(seqs: &[S], op: Operation, options: &Options) -> SeqResult<Output> {
    if seqs.is_empty() {
        return Err(SeqError::EmptyBatch);
    }
    check_nucleic_acid(seqs)?;

    let checked: Vec<NucleicSeq> = seqs
        .iter()
        .map(|seq| NucleicSeq::from_bytes_unchecked(seq.as_ref().to_vec()))
        .collect();

    let seq_type = match options.seq_type {
        Some(seq_type) => seq_type,
        None if op.needs_seq_type() => classify(&checked)?,
        // ignored by reverse and count_gc
        None => SeqType::Dna,
    };

    tracing::debug!(
        op = op.name(),
        seqs = checked.len(),
        seq_type = %seq_type,
        "running sequence operation"
    );

    let values: SeqResult<Vec<Value>> =
        par_try_map!(checked, |seq: &NucleicSeq| op.apply(seq, seq_type));
    let mut values = values?;

    if values.len() == 1 {
        if let Some(value) = values.pop() {
            return Ok(Output::Single(value));
        }
    }
    Ok(Output::Many(values))
}

/// [`run`] with the operation given by name, taking the frame from `options`.
pub fn run_named<S: AsRef<[u8]>>(seqs: &[S], name: &str, options: &Options) -> SeqResult<Output> {
    let op = Operation::parse(name, options.frame)?;
    run(seqs, op, options)
}
