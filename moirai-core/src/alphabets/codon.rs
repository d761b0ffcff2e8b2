//! The standard genetic code over uppercase RNA codons.
//!
//! Codons are ranked A=0, C=1, G=2, U=3 and indexed as `b1 * 16 + b2 * 4 + b3`.

use std::fmt::{self, Write};
use std::sync::LazyLock;

/// One translated codon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Residue {
    /// `AUG`, the start methionine.
    Start,
    /// `UAA`, `UAG` or `UGA`.
    Stop,
    /// Any other amino acid, as its one-letter code.
    Amino(u8),
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Residue::Start => f.write_str(START_MARKER),
            Residue::Stop => f.write_str(STOP_MARKER),
            Residue::Amino(aa) => f.write_char(*aa as char),
        }
    }
}

pub const START_MARKER: &str = "M!";
pub const STOP_MARKER: &str = "*";

const START_CODON: usize = 14;

const CODON_TABLE: [u8; 64] = *b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";

static BASE_INDEX: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut map = [255u8; 256];
    map[b'A' as usize] = 0;
    map[b'C' as usize] = 1;
    map[b'G' as usize] = 2;
    map[b'U' as usize] = 3;
    map
});

fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let i1 = BASE_INDEX[codon[0] as usize];
    let i2 = BASE_INDEX[codon[1] as usize];
    let i3 = BASE_INDEX[codon[2] as usize];
    if i1 < 4 && i2 < 4 && i3 < 4 {
        Some(((i1 as usize) << 4) | ((i2 as usize) << 2) | (i3 as usize))
    } else {
        None
    }
}

/// Look up an uppercase RNA codon; `None` for anything outside the 64-entry table.
pub fn lookup(codon: &[u8]) -> Option<Residue> {
    let idx = codon_index(codon)?;
    if idx == START_CODON {
        return Some(Residue::Start);
    }
    Some(match CODON_TABLE[idx] {
        b'*' => Residue::Stop,
        aa => Residue::Amino(aa),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_and_stop_codons() {
        assert_eq!(lookup(b"AUG"), Some(Residue::Start));
        for stop in [b"UAA", b"UAG", b"UGA"] {
            assert_eq!(lookup(stop), Some(Residue::Stop));
        }
    }

    #[test]
    fn amino_acids() {
        assert_eq!(lookup(b"UUU"), Some(Residue::Amino(b'F')));
        assert_eq!(lookup(b"GGG"), Some(Residue::Amino(b'G')));
        assert_eq!(lookup(b"UGG"), Some(Residue::Amino(b'W')));
        assert_eq!(lookup(b"AGA"), Some(Residue::Amino(b'R')));
        assert_eq!(lookup(b"CAU"), Some(Residue::Amino(b'H')));
    }

    #[test]
    fn table_is_complete() {
        let bases = [b'A', b'C', b'G', b'U'];
        let mut seen = 0;
        for &a in &bases {
            for &b in &bases {
                for &c in &bases {
                    assert!(lookup(&[a, b, c]).is_some());
                    seen += 1;
                }
            }
        }
        assert_eq!(seen, 64);
    }

    #[test]
    fn non_rna_codons_are_unknown() {
        assert_eq!(lookup(b"ATG"), None);
        assert_eq!(lookup(b"aug"), None);
        assert_eq!(lookup(b"AU"), None);
    }

    #[test]
    fn symbols() {
        assert_eq!(Residue::Start.to_string(), "M!");
        assert_eq!(Residue::Stop.to_string(), "*");
        assert_eq!(Residue::Amino(b'F').to_string(), "F");
    }
}
