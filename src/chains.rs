use crate::residues::ResidueExt;
use pdbtbx::*;

/// Extension trait for reading chain sequences.
pub trait ChainExt {
    /// One-letter sequence of the chain, ordered by ascending residue
    /// sequence number. Duplicate sequence numbers (alternate conformers)
    /// collapse to a single entry, first occurrence wins.
    fn pdb_seq(&self) -> String;
}

impl ChainExt for Chain {
    fn pdb_seq(&self) -> String {
        let mut residues: Vec<&Residue> = self.residues().collect();
        // Stable sort keeps file order for equal sequence numbers
        residues.sort_by_key(|res| res.serial_number());

        let mut seq = String::with_capacity(residues.len());
        let mut last_resi: Option<isize> = None;
        for res in residues {
            if last_resi == Some(res.serial_number()) {
                continue;
            }
            last_resi = Some(res.serial_number());
            seq.push_str(res.one_letter());
        }
        seq
    }
}
