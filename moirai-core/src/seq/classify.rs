use crate::alphabets::{self, dna, rna};
use crate::error::{SeqError, SeqResult};
use crate::seq::SeqType;

/// True iff every sequence is non-empty and made only of A, T, U, G and C (any case).
pub fn is_nucleic_acid<S: AsRef<[u8]>>(seqs: &[S]) -> bool {
    check_nucleic_acid(seqs).is_ok()
}

/// Like [`is_nucleic_acid`], but names the first offending sequence and character.
pub fn check_nucleic_acid<S: AsRef<[u8]>>(seqs: &[S]) -> SeqResult<()> {
    let alphabet = alphabets::nucleotides();
    for (index, seq) in seqs.iter().enumerate() {
        let bytes = seq.as_ref();
        if bytes.is_empty() {
            return Err(SeqError::EmptyNucleicAcid { index });
        }
        if let Some((pos, b)) = alphabet.first_foreign(bytes) {
            return Err(SeqError::InvalidChar {
                ch: b as char,
                pos,
                index,
            });
        }
    }
    Ok(())
}

/// Decide whether a batch is uniformly DNA or uniformly RNA.
///
/// A sequence carrying neither T nor U fits both alphabets, so a batch of only
/// such sequences is DNA. A sequence with both T and U fits neither.
pub fn classify<S: AsRef<[u8]>>(seqs: &[S]) -> SeqResult<SeqType> {
    let dna = dna::alphabet();
    let rna = rna::alphabet();

    if seqs.iter().all(|seq| dna.is_word(seq.as_ref())) {
        Ok(SeqType::Dna)
    } else if seqs.iter().all(|seq| rna.is_word(seq.as_ref())) {
        Ok(SeqType::Rna)
    } else {
        Err(SeqError::MixedAlphabet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nucleic_acid_is_case_insensitive() {
        assert!(is_nucleic_acid(&["ATGC", "augc", "AuGc"]));
    }

    #[test]
    fn one_bad_sequence_fails_the_batch() {
        assert!(!is_nucleic_acid(&["ATGC", "ATGX"]));
        assert_eq!(
            check_nucleic_acid(&["ATGC", "ATGX"]),
            Err(SeqError::InvalidChar {
                ch: 'X',
                pos: 3,
                index: 1
            })
        );
    }

    #[test]
    fn empty_sequence_is_not_nucleic_acid() {
        assert!(!is_nucleic_acid(&["ATGC", ""]));
        assert_eq!(
            check_nucleic_acid(&["", "ATGC"]),
            Err(SeqError::EmptyNucleicAcid { index: 0 })
        );
    }

    #[test]
    fn classify_dna_and_rna() {
        assert_eq!(classify(&["ATGC", "ttaa"]).unwrap(), SeqType::Dna);
        assert_eq!(classify(&["AUGC", "uuaa"]).unwrap(), SeqType::Rna);
    }

    #[test]
    fn classify_without_discriminator() {
        assert_eq!(classify(&["GGCA"]).unwrap(), SeqType::Dna);
        assert_eq!(classify(&["GGCA", "AUG"]).unwrap(), SeqType::Rna);
        assert_eq!(classify(&["GGCA", "ATG"]).unwrap(), SeqType::Dna);
    }

    #[test]
    fn classify_mixed_batch() {
        assert_eq!(classify(&["ATGC", "AUGC"]), Err(SeqError::MixedAlphabet));
    }

    #[test]
    fn classify_t_and_u_in_one_sequence() {
        assert_eq!(classify(&["ATUGC"]), Err(SeqError::MixedAlphabet));
    }
}
