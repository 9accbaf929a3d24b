use crate::errors::PrepError;
use pdbtbx::*;

/// Open an atomic data file with [`pdbtbx::ReadOptions`] and remove water residues.
///
/// Non-breaking parser warnings are returned alongside the structure so the
/// caller can decide how loudly to report them.
///
/// # Errors
///
/// Returns [`PrepError::MalformedRecord`] when the file cannot be parsed as a
/// structure at all.
pub fn load_model(input_file: &str) -> Result<(PDB, Vec<PDBError>), PrepError> {
    let (mut pdb, errors) = pdbtbx::ReadOptions::default()
        .set_only_atomic_coords(true)
        .set_level(pdbtbx::StrictnessLevel::Loose)
        .read(input_file)
        .map_err(|errs| {
            let reasons = errs
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            PrepError::MalformedRecord(format!("{input_file}: {reasons}"))
        })?;

    // Remove water from the model
    pdb.remove_residues_by(|res| matches!(res.name(), Some("HOH") | Some("WAT")));

    Ok((pdb, errors))
}
