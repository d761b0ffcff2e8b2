use crate::error::{SeqError, SeqResult};

use memchr::memchr_iter;

/// Number of G and C bases, either case.
pub fn count_gc(seq: &[u8]) -> usize {
    [b'G', b'g', b'C', b'c']
        .iter()
        .map(|&b| memchr_iter(b, seq).count())
        .sum()
}

/// GC fraction in `[0, 1]`.
pub fn gc_content(seq: &[u8]) -> SeqResult<f64> {
    if seq.is_empty() {
        return Err(SeqError::EmptySequence);
    }
    Ok(count_gc(seq) as f64 / seq.len() as f64)
}
