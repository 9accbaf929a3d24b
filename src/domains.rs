//! Variable-domain extraction between conserved flank motifs.
//!
//! Designed sequences share two conserved regions bounding the variable
//! domain of interest. The domain is located by exact substring search for
//! the two motifs and sliced out together with a configurable number of
//! residues kept from each flank.

use crate::errors::{FlankSide, PrepError};

/// A variable domain sliced out of a source sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDomain {
    /// Identifier of the source sequence
    pub id: String,
    /// The extracted residues, uppercased
    pub seq: String,
    /// Start index of the slice in the (uppercased) source sequence
    pub start: usize,
    /// End index (exclusive) of the slice in the source sequence
    pub end: usize,
}

/// Check that the flank motifs and keep count can produce a valid slice.
///
/// # Errors
///
/// Returns [`PrepError::InvalidConfiguration`] when a motif is empty or not
/// plain ASCII, or when `keep` exceeds the length of either motif.
pub fn validate_flanks(n_flank: &str, c_flank: &str, keep: usize) -> Result<(), PrepError> {
    if n_flank.is_empty() || c_flank.is_empty() {
        return Err(PrepError::InvalidConfiguration(
            "flank motifs must not be empty".to_string(),
        ));
    }
    if !n_flank.is_ascii() || !c_flank.is_ascii() {
        return Err(PrepError::InvalidConfiguration(
            "flank motifs must be ASCII one-letter amino-acid codes".to_string(),
        ));
    }
    if keep > n_flank.len() {
        return Err(PrepError::InvalidConfiguration(format!(
            "keep count {keep} exceeds the N-terminal flank length {}",
            n_flank.len()
        )));
    }
    if keep > c_flank.len() {
        return Err(PrepError::InvalidConfiguration(format!(
            "keep count {keep} exceeds the C-terminal flank length {}",
            c_flank.len()
        )));
    }
    Ok(())
}

/// Extract the variable domain bounded by two flank motifs.
///
/// Matching is case-insensitive and uses leftmost occurrences: the N-flank is
/// located first, then the C-flank is searched for strictly after the end of
/// the N-flank match, so the two matches can never overlap. The result is the
/// last `keep` residues of the N-flank match, the region between the matches
/// (which may be empty), and the first `keep` residues of the C-flank match.
///
/// # Errors
///
/// * [`PrepError::InvalidConfiguration`] for motifs that fail
///   [`validate_flanks`], and for slices that would come out empty.
/// * [`PrepError::FlankNotFound`] when either motif is absent, with the
///   missing side recorded. A C-flank that only occurs before or overlapping
///   the N-flank match counts as absent.
pub fn extract_domain(
    id: &str,
    sequence: &str,
    n_flank: &str,
    c_flank: &str,
    keep: usize,
) -> Result<ExtractedDomain, PrepError> {
    validate_flanks(n_flank, c_flank, keep)?;

    let seq = sequence.to_uppercase();
    let n_flank = n_flank.to_uppercase();
    let c_flank = c_flank.to_uppercase();

    let n_pos = seq.find(&n_flank).ok_or_else(|| PrepError::FlankNotFound {
        side: FlankSide::NTerminal,
        id: id.to_string(),
    })?;
    let n_end = n_pos + n_flank.len();

    let c_pos = seq[n_end..]
        .find(&c_flank)
        .map(|pos| pos + n_end)
        .ok_or_else(|| PrepError::FlankNotFound {
            side: FlankSide::CTerminal,
            id: id.to_string(),
        })?;

    // lastK(N-flank) + gap + firstK(C-flank)
    let start = n_end - keep;
    let end = c_pos + keep;
    if start == end {
        return Err(PrepError::InvalidConfiguration(format!(
            "extraction for {id} produced an empty domain; increase the keep count"
        )));
    }

    Ok(ExtractedDomain {
        id: id.to_string(),
        seq: seq[start..end].to_string(),
        start,
        end,
    })
}
