//! FASTA identifiers derived from design filenames.
//!
//! Designed models come out of the upstream pipeline with long filenames such
//! as `6_dir6_noise1-3_20250705_33_dldesign_7_af2pred.pdb`. The tokens that
//! carry design-variant information are kept and the boilerplate is dropped,
//! giving a short identifier like `6_dir6_n1-3_33_7`.

use std::collections::HashSet;

/// Pipeline suffixes that carry no design-variant information.
const DROP_TOKENS: [&str; 2] = ["dldesign", "af2pred"];

/// File extensions recognized on pipeline inputs.
const KNOWN_EXTENSIONS: [&str; 2] = [".pdb", ".fasta"];

/// Derive a short identifier from a raw design filename.
///
/// A known extension (`.pdb`, `.fasta`) is stripped, the stem is split on
/// `_`, boilerplate tokens (`dldesign`, `af2pred`, 8-digit date stamps) are
/// dropped, `noise` prefixes are shortened to `n`, and the survivors are
/// rejoined with `_`. The mapping is deterministic and idempotent. If every
/// token is boilerplate the raw stem is returned unchanged rather than an
/// empty identifier.
pub fn normalize_stem(filename: &str) -> String {
    let stem = strip_known_extension(filename);

    let kept: Vec<String> = stem
        .split('_')
        .filter(|part| !DROP_TOKENS.contains(&part.to_lowercase().as_str()))
        .filter(|part| !is_date_token(part))
        .map(|part| match part.strip_prefix("noise") {
            Some(rest) => format!("n{rest}"),
            None => part.to_string(),
        })
        .collect();

    if kept.is_empty() {
        return stem.to_string();
    }
    kept.join("_")
}

// Only known extensions are stripped: an identifier whose stem contains a
// dot must come back out unchanged, so re-normalizing is a no-op.
fn strip_known_extension(filename: &str) -> &str {
    for ext in KNOWN_EXTENSIONS {
        if filename.len() > ext.len()
            && filename.is_char_boundary(filename.len() - ext.len())
            && filename[filename.len() - ext.len()..].eq_ignore_ascii_case(ext)
        {
            return &filename[..filename.len() - ext.len()];
        }
    }
    filename
}

// Date stamps like 20250705
fn is_date_token(token: &str) -> bool {
    token.len() == 8 && token.chars().all(|c| c.is_ascii_digit())
}

/// Make a name safe to use as an output filename.
///
/// Characters outside `[A-Za-z0-9._-]` become underscores, runs of
/// underscores collapse, and leading/trailing underscores are trimmed.
pub fn safe_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_underscore = false;
    for c in name.chars() {
        let c = if c.is_ascii_alphanumeric() || matches!(c, '.' | '-') {
            c
        } else {
            '_'
        };
        if c == '_' {
            if last_underscore {
                continue;
            }
            last_underscore = true;
        } else {
            last_underscore = false;
        }
        out.push(c);
    }
    out.trim_matches('_').to_string()
}

/// Batch-wide table of assigned identifiers.
///
/// Two distinct filenames can normalize to the same identifier; the registry
/// resolves those collisions by appending a numeric suffix so no output is
/// silently overwritten. Uniqueness is tracked on the filesystem-safe form
/// of each identifier, since that is what names the per-item output files.
/// One registry instance is owned by the batch driver and folded over the
/// whole batch.
#[derive(Debug, Default)]
pub struct LabelRegistry {
    seen: HashSet<String>,
}

impl LabelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize `filename` and reserve the resulting identifier.
    ///
    /// On collision the identifier gets a `_2`, `_3`, ... suffix in
    /// assignment order.
    pub fn assign(&mut self, filename: &str) -> String {
        let base = normalize_stem(filename);
        self.reserve(&base)
    }

    /// Reserve an identifier as-is, appending a numeric suffix when its
    /// filesystem-safe form collides with one already assigned.
    pub fn reserve(&mut self, name: &str) -> String {
        let mut label = name.to_string();
        let mut n = 2;
        while !self.seen.insert(safe_filename(&label)) {
            label = format!("{name}_{n}");
            n += 1;
        }
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example() {
        assert_eq!(
            normalize_stem("6_dir6_noise1-3_20250705_33_dldesign_7_af2pred.pdb"),
            "6_dir6_n1-3_33_7"
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in [
            "6_dir6_noise1-3_20250705_33_dldesign_7_af2pred.pdb",
            "1_dir1_noise0-8_20250705_1_26.pdb",
            "plain_name.pdb",
            "dldesign_af2pred.pdb",
            "a.b.pdb",
            "model_v1.2_noise1-3.pdb",
        ] {
            let once = normalize_stem(raw);
            assert_eq!(normalize_stem(&once), once, "not idempotent for {raw}");
        }
    }

    #[test]
    fn only_known_extensions_are_stripped() {
        // A dotted stem keeps every segment on repeated passes
        assert_eq!(normalize_stem("a.b.pdb"), "a.b");
        assert_eq!(normalize_stem("a.b"), "a.b");
        assert_eq!(normalize_stem("seqs.FASTA"), "seqs");
        assert_eq!(normalize_stem("notes.txt"), "notes.txt");
        assert_eq!(normalize_stem(".pdb"), ".pdb");
    }

    #[test]
    fn short_numeric_tokens_survive() {
        // Only fixed-width date stamps are dropped
        assert_eq!(normalize_stem("6_33_7.pdb"), "6_33_7");
        assert_eq!(normalize_stem("6_20250705.pdb"), "6");
    }

    #[test]
    fn all_boilerplate_falls_back_to_stem() {
        assert_eq!(normalize_stem("dldesign_af2pred.pdb"), "dldesign_af2pred");
    }

    #[test]
    fn collisions_get_numeric_suffixes() {
        let mut registry = LabelRegistry::new();
        // Distinct raw names, identical normalized identifier
        let a = registry.assign("6_dir6_noise1-3_20250705_33_dldesign_7_af2pred.pdb");
        let b = registry.assign("6_dir6_noise1-3_20250706_33_dldesign_7_af2pred.pdb");
        let c = registry.assign("6_dir6_noise1-3_20250707_33_dldesign_7_af2pred.pdb");

        assert_eq!(a, "6_dir6_n1-3_33_7");
        assert_eq!(b, "6_dir6_n1-3_33_7_2");
        assert_eq!(c, "6_dir6_n1-3_33_7_3");
    }

    #[test]
    fn sanitized_collisions_get_suffixes() {
        // Distinct identifiers whose filesystem-safe forms coincide must not
        // share an output filename
        let mut registry = LabelRegistry::new();
        let a = registry.reserve("a b");
        let b = registry.reserve("a*b");

        assert_eq!(a, "a b");
        assert_eq!(b, "a*b_2");
        assert_ne!(safe_filename(&a), safe_filename(&b));
    }

    #[test]
    fn safe_filenames() {
        assert_eq!(safe_filename("6_dir6_n1-3_33_7"), "6_dir6_n1-3_33_7");
        assert_eq!(safe_filename("a/b:c*d"), "a_b_c_d");
        assert_eq!(safe_filename("__weird__name__"), "weird_name");
    }
}
