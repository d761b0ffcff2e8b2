use crate::error::{SeqError, SeqResult};
use indexmap::IndexMap;

/// Phred+33: quality character `!` is score 0.
pub const PHRED_OFFSET: u8 = b'!';
pub const PHRED_MAX_CHAR: u8 = b'~';

/// A sequencing read: bases plus one quality character per base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Read {
    id: Box<str>,
    bases: Box<str>,
    quality: Box<str>,
}

impl Read {
    pub fn new(
        id: impl Into<Box<str>>,
        bases: impl Into<Box<str>>,
        quality: impl Into<Box<str>>,
    ) -> Self {
        Self {
            id: id.into(),
            bases: bases.into(),
            quality: quality.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn bases(&self) -> &str {
        &self.bases
    }

    pub fn quality(&self) -> &str {
        &self.quality
    }

    /// Number of bases, in characters.
    pub fn len(&self) -> usize {
        self.bases.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Check the read can be filtered: bases present, one in-range quality character per base.
    pub fn validate(&self) -> SeqResult<()> {
        if self.bases.is_empty() {
            return Err(SeqError::EmptySequence);
        }
        if let Some((pos, ch)) = self.bases.char_indices().find(|(_, c)| !c.is_ascii()) {
            return Err(SeqError::MalformedRead {
                id: self.id.to_string(),
                msg: format!("base {ch:?} at position {pos} is not ASCII"),
            });
        }
        let (bases, quality) = (self.len(), self.quality.chars().count());
        if quality != bases {
            return Err(SeqError::MalformedRead {
                id: self.id.to_string(),
                msg: format!("{bases} bases but {quality} quality characters"),
            });
        }
        if let Some((pos, ch)) = self
            .quality
            .char_indices()
            .find(|&(_, c)| !(PHRED_OFFSET as char..=PHRED_MAX_CHAR as char).contains(&c))
        {
            return Err(SeqError::MalformedRead {
                id: self.id.to_string(),
                msg: format!("quality character {ch:?} at position {pos} is not Phred+33"),
            });
        }
        Ok(())
    }

    pub fn mean_quality(&self) -> SeqResult<f64> {
        mean_phred(self.quality.as_bytes())
    }
}

/// Mean Phred+33 score of a quality string.
pub fn mean_phred(quality: &[u8]) -> SeqResult<f64> {
    if quality.is_empty() {
        return Err(SeqError::EmptySequence);
    }
    let total: i64 = quality
        .iter()
        .map(|&b| b as i64 - PHRED_OFFSET as i64)
        .sum();
    Ok(total as f64 / quality.len() as f64)
}

/// Reads keyed by id, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadBatch {
    reads: IndexMap<Box<str>, Read>,
}

impl ReadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            reads: IndexMap::with_capacity(capacity),
        }
    }

    /// Build from `(id, bases, quality)` triples; ids must be unique.
    pub fn from_entries<I, K, B, Q>(entries: I) -> SeqResult<Self>
    where
        I: IntoIterator<Item = (K, B, Q)>,
        K: Into<Box<str>>,
        B: Into<Box<str>>,
        Q: Into<Box<str>>,
    {
        let entries = entries.into_iter();
        let mut batch = Self::with_capacity(entries.size_hint().0);
        for (id, bases, quality) in entries {
            batch.push(Read::new(id, bases, quality))?;
        }
        Ok(batch)
    }

    pub fn push(&mut self, read: Read) -> SeqResult<()> {
        if self.reads.contains_key(read.id()) {
            return Err(SeqError::DuplicateReadId {
                id: read.id().to_string(),
            });
        }
        self.reads.insert(read.id.clone(), read);
        Ok(())
    }

    pub fn insert(
        &mut self,
        id: impl Into<Box<str>>,
        bases: impl Into<Box<str>>,
        quality: impl Into<Box<str>>,
    ) -> SeqResult<()> {
        self.push(Read::new(id, bases, quality))
    }

    pub fn len(&self) -> usize {
        self.reads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reads.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Read> {
        self.reads.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.reads.keys().map(|k| k.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Read> {
        self.reads.values()
    }
}

impl IntoIterator for ReadBatch {
    type Item = Read;
    type IntoIter = indexmap::map::IntoValues<Box<str>, Read>;

    fn into_iter(self) -> Self::IntoIter {
        self.reads.into_values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_ok() {
        assert!(Read::new("r1", "ACGT", "IIII").validate().is_ok());
    }

    #[test]
    fn validate_length_mismatch() {
        let err = Read::new("r1", "ACGT", "III").validate().unwrap_err();
        assert!(matches!(err, SeqError::MalformedRead { ref id, .. } if id == "r1"));
    }

    #[test]
    fn validate_counts_characters_not_bytes() {
        // 'Ä' is two bytes in UTF-8, so byte lengths would match here
        let err = Read::new("r1", "ÄC", "III").validate().unwrap_err();
        assert!(matches!(err, SeqError::MalformedRead { ref id, .. } if id == "r1"));
        let err = Read::new("r1", "ÄC", "II").validate().unwrap_err();
        assert!(matches!(err, SeqError::MalformedRead { .. }));
        assert_eq!(Read::new("r1", "ÄC", "II").len(), 2);
    }

    #[test]
    fn validate_empty_bases() {
        assert_eq!(
            Read::new("r1", "", "").validate(),
            Err(SeqError::EmptySequence)
        );
    }

    #[test]
    fn validate_quality_out_of_range() {
        let err = Read::new("r1", "AC", "I ").validate().unwrap_err();
        assert!(matches!(err, SeqError::MalformedRead { .. }));
    }

    #[test]
    fn mean_quality_of_read() {
        let read = Read::new("r1", "ACGT", "!!II");
        assert!((read.mean_quality().unwrap() - 20.0).abs() < 1e-12);
        assert_eq!(mean_phred(b"!!!!").unwrap(), 0.0);
        assert_eq!(mean_phred(b""), Err(SeqError::EmptySequence));
    }

    #[test]
    fn batch_keeps_insertion_order() {
        let batch = ReadBatch::from_entries([
            ("b", "AC", "II"),
            ("a", "GT", "II"),
            ("c", "AA", "II"),
        ])
        .unwrap();
        assert_eq!(batch.ids().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(batch.get("a").unwrap().bases(), "GT");
        assert!(batch.get("d").is_none());

        let bases: Vec<String> = batch.into_iter().map(|r| r.bases().to_string()).collect();
        assert_eq!(bases, vec!["AC", "GT", "AA"]);
    }

    #[test]
    fn batch_rejects_duplicate_ids() {
        let mut batch = ReadBatch::new();
        batch.insert("r1", "AC", "II").unwrap();
        assert_eq!(
            batch.insert("r1", "GT", "II"),
            Err(SeqError::DuplicateReadId {
                id: "r1".to_string()
            })
        );
        assert_eq!(batch.len(), 1);
    }
}
