//! Sequence extraction from protein structures.
//!
//! This module provides functions for extracting amino acid sequences
//! from PDB structures.

use crate::chains::ChainExt;
use crate::errors::PrepError;
use pdbtbx::*;
use std::collections::HashMap;

/// Get the one-letter sequence of a single chain in a PDB structure.
///
/// Residues are ordered by ascending sequence number with duplicate
/// numbers collapsed (first occurrence wins); unknown residue codes
/// appear as `X`.
///
/// # Errors
///
/// Returns [`PrepError::NoChainFound`] when the chain identifier has no
/// atom records in the structure.
///
/// # Example
///
/// ```no_run
/// use domainprep::{chain_sequence, load_model};
///
/// let (pdb, _errors) = load_model("path/to/structure.pdb").unwrap();
/// let seq = chain_sequence(&pdb, "A").unwrap();
/// println!("Chain A: {seq}");
/// ```
pub fn chain_sequence(pdb: &PDB, chain_id: &str) -> Result<String, PrepError> {
    let seq = pdb
        .chains()
        .find(|chain| chain.id() == chain_id)
        .map(|chain| chain.pdb_seq())
        .unwrap_or_default();

    if seq.is_empty() {
        return Err(PrepError::NoChainFound {
            chain: chain_id.to_string(),
        });
    }
    Ok(seq)
}

/// Get sequences of all chains in a PDB structure.
///
/// # Returns
///
/// A `HashMap` mapping chain IDs to their sequences as strings.
pub fn get_sequences(pdb: &PDB) -> HashMap<String, String> {
    pdb.chains()
        .map(|chain| (chain.id().to_string(), chain.pdb_seq()))
        .collect()
}
