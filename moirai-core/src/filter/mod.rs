//! Read filtering by GC content, length and mean base quality.
//!
//! A read is kept only if it passes all three predicates. Bounds are
//! inclusive at both ends; a bare number is an upper limit with 0 as the
//! lower limit.

use crate::error::{SeqError, SeqResult};
use crate::seq::composition::count_gc;
use crate::seq::read::{mean_phred, Read, ReadBatch};


/// Upper length limit used when none is given.
pub const DEFAULT_MAX_LENGTH: u64 = 1 << 32;

/// An inclusive acceptance interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bounds<T> {
    /// `(0, limit)`.
    UpTo(T),
    Range(T, T),
}

impl<T: Copy + Default + PartialOrd> Bounds<T> {
    pub fn range(&self) -> (T, T) {
        match *self {
            Bounds::UpTo(high) => (T::default(), high),
            Bounds::Range(low, high) => (low, high),
        }
    }

    pub fn contains(&self, value: T) -> bool {
        let (low, high) = self.range();
        low <= value && value <= high
    }
}

macro_rules! impl_bounds_from {
    ($($t:ty),*) => {$(
        impl From<$t> for Bounds<$t> {
            fn from(high: $t) -> Self {
                Bounds::UpTo(high)
            }
        }

        impl From<($t, $t)> for Bounds<$t> {
            fn from((low, high): ($t, $t)) -> Self {
                Bounds::Range(low, high)
            }
        }
    )*};
}

impl_bounds_from!(f64, u64);

/// Acceptance criteria for [`filter_reads`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterParams {
    /// GC content in percent.
    pub gc_bounds: Bounds<f64>,
    pub length_bounds: Bounds<u64>,
    /// Minimum mean Phred score.
    pub quality_threshold: f64,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            gc_bounds: Bounds::Range(0.0, 100.0),
            length_bounds: Bounds::Range(0, DEFAULT_MAX_LENGTH),
            quality_threshold: 0.0,
        }
    }
}

impl FilterParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gc_bounds(mut self, bounds: impl Into<Bounds<f64>>) -> Self {
        self.gc_bounds = bounds.into();
        self
    }

    pub fn with_length_bounds(mut self, bounds: impl Into<Bounds<u64>>) -> Self {
        self.length_bounds = bounds.into();
        self
    }

    pub fn with_quality_threshold(mut self, threshold: f64) -> Self {
        self.quality_threshold = threshold;
        self
    }

    /// Validate `read` and test it against all three predicates.
    pub fn accepts(&self, read: &Read) -> SeqResult<bool> {
        read.validate()?;
        Ok(self.passes(read))
    }

    // Caller has validated `read`, so none of the predicates can fail.
    fn passes(&self, read: &Read) -> bool {
        self.length_bounds.contains(read.len() as u64)
            && matches!(filter_gc(read.bases(), self.gc_bounds), Ok(true))
            && matches!(read.mean_quality(), Ok(q) if q >= self.quality_threshold)
    }
}

/// GC content of `seq`, in percent, lies within `gc_bounds`.
pub fn filter_gc(seq: &str, gc_bounds: impl Into<Bounds<f64>>) -> SeqResult<bool> {
    // multi-byte chars never encode G or C, only the denominator needs chars
    let len = seq.chars().count();
    if len == 0 {
        return Err(SeqError::EmptySequence);
    }
    let percent = count_gc(seq.as_bytes()) as f64 / len as f64 * 100.0;
    Ok(gc_bounds.into().contains(percent))
}

pub fn filter_length(seq: &str, length_bounds: impl Into<Bounds<u64>>) -> bool {
    length_bounds.into().contains(seq.chars().count() as u64)
}

/// Mean Phred+33 score of `quality` is at least `quality_threshold`.
pub fn filter_quality(quality: &str, quality_threshold: f64) -> SeqResult<bool> {
    Ok(mean_phred(quality.as_bytes())? >= quality_threshold)
}

/// Keep the reads of `batch` that pass every predicate, in their original order.
///
/// Every read is validated before any is filtered, so the error reported is
/// always the first bad read in batch order.
pub fn filter_reads(batch: &ReadBatch, params: &FilterParams) -> SeqResult<ReadBatch> {
    for read in batch.iter() {
        read.validate()?;
    }

    let reads: Vec<&Read> = batch.iter().collect();
    let keep: Vec<bool> = par_map!(reads, |read: &&Read| params.passes(read));

    let mut out = ReadBatch::with_capacity(keep.iter().filter(|&&k| k).count());
    for (read, _) in reads.into_iter().zip(keep).filter(|(_, k)| *k) {
        out.push(read.clone())?;
    }

    tracing::debug!(
        reads = batch.len(),
        accepted = out.len(),
        "filtered read batch"
    );
    Ok(out)
}
