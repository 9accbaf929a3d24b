use pdbtbx::*;

/// Extension trait for translating residues to one-letter codes.
pub trait ResidueExt {
    /// The residue one-letter code. Codes outside the 20 standard
    /// amino acids map to `X` instead of failing.
    fn one_letter(&self) -> &str;
}

impl ResidueExt for Residue {
    fn one_letter(&self) -> &str {
        match self.name().unwrap_or("").to_uppercase().as_str() {
            "ALA" => "A",
            "ARG" => "R",
            "ASN" => "N",
            "ASP" => "D",
            "CYS" => "C",
            "GLN" => "Q",
            "GLU" => "E",
            "GLY" => "G",
            "HIS" => "H",
            "ILE" => "I",
            "LEU" => "L",
            "LYS" => "K",
            "MET" => "M",
            "PHE" => "F",
            "PRO" => "P",
            "SER" => "S",
            "THR" => "T",
            "TRP" => "W",
            "TYR" => "Y",
            "VAL" => "V",
            _ => "X",
        }
    }
}
