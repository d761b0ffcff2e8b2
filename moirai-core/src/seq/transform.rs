use crate::alphabets::{dna, rna};
use crate::seq::SeqType;

pub fn reverse(seq: &[u8]) -> Vec<u8> {
    let mut out = seq.to_vec();
    out.reverse();
    out
}

/// Case-preserving Watson-Crick complement under the table for `seq_type`.
pub fn complement(seq: &[u8], seq_type: SeqType) -> Vec<u8> {
    let pair: fn(u8) -> u8 = match seq_type {
        SeqType::Dna => dna::complement,
        SeqType::Rna => rna::complement,
    };
    seq.iter().map(|&b| pair(b)).collect()
}

pub fn reverse_complement(seq: &[u8], seq_type: SeqType) -> Vec<u8> {
    match seq_type {
        SeqType::Dna => dna::reverse_complement(seq),
        SeqType::Rna => rna::reverse_complement(seq),
    }
}

/// DNA to RNA (T to U) when `seq_type` is DNA, RNA to DNA (U to T) when it is RNA.
pub fn transcribe(seq: &[u8], seq_type: SeqType) -> Vec<u8> {
    let (from, to) = match seq_type {
        SeqType::Dna => (b'T', b'U'),
        SeqType::Rna => (b'U', b'T'),
    };
    seq.iter()
        .map(|&b| match b {
            b if b == from => to,
            b if b == from.to_ascii_lowercase() => to.to_ascii_lowercase(),
            b => b,
        })
        .collect()
}
