use crate::alphabets::codon;
use crate::error::{SeqError, SeqResult};
use crate::seq::protein::Protein;
use crate::seq::transform::transcribe;
use crate::seq::{SeqType, TranslationFrame};

/// Translate every complete codon of `seq` in the given frame.
///
/// DNA input is transcribed first. A trailing partial codon is dropped and
/// stop codons stay in the output wherever they occur.
pub fn translate(seq: &[u8], seq_type: SeqType, frame: TranslationFrame) -> SeqResult<Protein> {
    let mut rna = seq.to_ascii_uppercase();
    if seq_type == SeqType::Dna {
        rna = transcribe(&rna, SeqType::Dna);
    }

    let start = frame.offset().min(rna.len());
    let mut residues = Vec::with_capacity(rna.len() / 3);
    for triplet in rna[start..].chunks_exact(3) {
        let residue = codon::lookup(triplet).ok_or_else(|| SeqError::UnknownCodon {
            codon: String::from_utf8_lossy(triplet).into_owned(),
        })?;
        residues.push(residue);
    }
    Ok(Protein::new(residues))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabets::codon::Residue;

    #[test]
    fn translate_start_phe_stop() {
        let p = translate(b"AUGUUUUUUUUUUAA", SeqType::Rna, TranslationFrame::One).unwrap();
        assert_eq!(
            p.residues(),
            &[
                Residue::Start,
                Residue::Amino(b'F'),
                Residue::Amino(b'F'),
                Residue::Amino(b'F'),
                Residue::Stop
            ]
        );
        assert_eq!(p.to_string(), "M!FFF*");
    }

    #[test]
    fn translate_drops_trailing_bases() {
        let p = translate(b"AUGAU", SeqType::Rna, TranslationFrame::One).unwrap();
        assert_eq!(p.to_string(), "M!");
        let p = translate(b"AUGA", SeqType::Rna, TranslationFrame::One).unwrap();
        assert_eq!(p.to_string(), "M!");
    }

    #[test]
    fn translate_does_not_stop_at_stop() {
        let p = translate(b"UAAAUGUGA", SeqType::Rna, TranslationFrame::One).unwrap();
        assert_eq!(p.to_string(), "*M!*");
        assert_eq!(
            p.residues().iter().filter(|&&r| r == Residue::Stop).count(),
            2
        );
    }

    #[test]
    fn translate_dna_lowercase() {
        let p = translate(b"atggcc", SeqType::Dna, TranslationFrame::One).unwrap();
        assert_eq!(p.to_string(), "M!A");
    }

    #[test]
    fn translate_frames() {
        let p = translate(b"CAUGGCC", SeqType::Rna, TranslationFrame::Two).unwrap();
        assert_eq!(p.to_string(), "M!A");
        let p = translate(b"CCAUGGCC", SeqType::Rna, TranslationFrame::Three).unwrap();
        assert_eq!(p.to_string(), "M!A");
    }

    #[test]
    fn frame_longer_than_sequence() {
        let p = translate(b"AU", SeqType::Rna, TranslationFrame::Three).unwrap();
        assert!(p.is_empty());
    }

    #[test]
    fn dna_read_as_rna_has_unknown_codon() {
        let err = translate(b"ATG", SeqType::Rna, TranslationFrame::One).unwrap_err();
        assert_eq!(
            err,
            SeqError::UnknownCodon {
                codon: "ATG".to_string()
            }
        );
    }
}
