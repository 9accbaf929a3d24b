#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

//! # Domainprep Library
//!
//! This library backs the `domainprep` binary, a three-stage batch pipeline
//! for preparing multimer structure-prediction inputs from designed PDB
//! models: chain sequences are pulled out of structures as FASTA, variable
//! domains are sliced out between two conserved flank motifs, and each domain
//! is paired with a fixed partner sequence in the colon-separated multimer
//! format used by LocalColabFold-style tools.

mod chains;
mod domains;
mod errors;
mod fasta;
mod multimer;
mod naming;
mod residues;
mod sequences;
mod utils;

// Re-export key public types
pub use chains::ChainExt;
pub use domains::{extract_domain, validate_flanks, ExtractedDomain};
pub use errors::{FlankSide, PrepError};
pub use fasta::{format_record, read_fasta, write_fasta, FastaRecord};
pub use multimer::{assemble_multimer, ChainOrder};
pub use naming::{normalize_stem, safe_filename, LabelRegistry};
pub use residues::ResidueExt;
pub use sequences::{chain_sequence, get_sequences};
pub use utils::load_model;

#[cfg(test)]
mod tests {
    use super::*;

    fn test_pdb() -> pdbtbx::PDB {
        let root = env!("CARGO_MANIFEST_DIR");
        let path = format!("{}/{}", root, "test-data/designs.pdb");
        let (pdb, _) = load_model(&path).unwrap();
        pdb
    }

    #[test]
    fn chain_a_sequence_with_unknown_residue() {
        let pdb = test_pdb();
        // MSE in position 4 is not a standard amino acid and maps to X;
        // the water record is removed when the model is loaded
        assert_eq!(chain_sequence(&pdb, "A").unwrap(), "MKVX");
    }

    #[test]
    fn chain_b_sequence() {
        let pdb = test_pdb();
        assert_eq!(chain_sequence(&pdb, "B").unwrap(), "GA");
    }

    #[test]
    fn missing_chain_is_reported() {
        let pdb = test_pdb();
        let err = chain_sequence(&pdb, "Z").unwrap_err();
        assert!(matches!(err, PrepError::NoChainFound { chain } if chain == "Z"));
    }

    #[test]
    fn all_chain_sequences() {
        let pdb = test_pdb();
        let seqs = get_sequences(&pdb);
        assert_eq!(seqs.len(), 2);
        assert_eq!(seqs["A"], "MKVX");
        assert_eq!(seqs["B"], "GA");
    }

    #[test]
    fn unreadable_structure_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.pdb");
        std::fs::write(&path, "this is not a structure file\n").unwrap();

        let res = load_model(path.to_str().unwrap());
        match res {
            Err(PrepError::MalformedRecord(_)) => {}
            Ok((pdb, _)) => {
                // Loose parsing may accept the file as an empty model;
                // the requested chain is then still reported as missing
                assert!(matches!(
                    chain_sequence(&pdb, "A"),
                    Err(PrepError::NoChainFound { .. })
                ));
            }
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
}
