use crate::alphabets::codon::Residue;
use std::fmt;

/// Translation output: one residue per complete codon, stops included.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Protein {
    residues: Vec<Residue>,
}

impl Protein {
    pub fn new(residues: Vec<Residue>) -> Self {
        Self { residues }
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

impl fmt::Display for Protein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for residue in &self.residues {
            write!(f, "{residue}")?;
        }
        Ok(())
    }
}
