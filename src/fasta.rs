//! Minimal FASTA reading and writing.
//!
//! Input records may be line-wrapped; output records are always written with
//! the whole sequence on a single line so that downstream stages of the
//! pipeline can re-parse them trivially.

use crate::errors::PrepError;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

/// One FASTA record: an identifier and its residue sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// Identifier from the `>` header line, without the `>` prefix
    pub id: String,
    /// Residue sequence with any line wrapping and whitespace removed
    pub seq: String,
}

impl FastaRecord {
    /// Create a record from an identifier and a sequence.
    pub fn new(id: impl Into<String>, seq: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            seq: seq.into(),
        }
    }
}

/// Read all records from a FASTA file.
///
/// Sequence lines up to the next header are concatenated, so wrapped input is
/// accepted. Whitespace inside sequence lines is discarded.
///
/// # Errors
///
/// Returns [`PrepError::MalformedRecord`] for sequence data appearing before
/// any header and for headers with an empty body.
pub fn read_fasta(path: &Path) -> Result<Vec<FastaRecord>, PrepError> {
    let reader = BufReader::new(File::open(path)?);

    let mut records: Vec<FastaRecord> = Vec::new();
    let mut current: Option<FastaRecord> = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(id) = line.strip_prefix('>') {
            if let Some(rec) = current.take() {
                records.push(finish_record(rec, path)?);
            }
            current = Some(FastaRecord::new(id.trim(), String::new()));
        } else {
            match current.as_mut() {
                Some(rec) => rec.seq.extend(line.split_whitespace().flat_map(str::chars)),
                None => {
                    return Err(PrepError::MalformedRecord(format!(
                        "{}: sequence data before the first header",
                        path.display()
                    )))
                }
            }
        }
    }
    if let Some(rec) = current.take() {
        records.push(finish_record(rec, path)?);
    }

    Ok(records)
}

fn finish_record(rec: FastaRecord, path: &Path) -> Result<FastaRecord, PrepError> {
    if rec.seq.is_empty() {
        return Err(PrepError::MalformedRecord(format!(
            "{}: record {} has an empty sequence",
            path.display(),
            rec.id
        )));
    }
    Ok(rec)
}

/// Format one record with the sequence on a single line.
pub fn format_record(rec: &FastaRecord) -> String {
    format!(">{}\n{}\n", rec.id, rec.seq)
}

/// Write records to a FASTA file, one line per sequence.
pub fn write_fasta(path: &Path, records: &[FastaRecord]) -> Result<(), PrepError> {
    let mut file = File::create(path)?;
    for rec in records {
        file.write_all(format_record(rec).as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seqs.fasta");

        let records = vec![
            FastaRecord::new("6_dir6_n1-3_33_7", "MKVLYT"),
            FastaRecord::new("multimer_1", "MKVLYT:ASSEP"),
        ];
        write_fasta(&path, &records).unwrap();

        let parsed = read_fasta(&path).unwrap();
        assert_eq!(records, parsed);
    }

    #[test]
    fn wrapped_input_is_concatenated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wrapped.fasta");
        std::fs::write(&path, ">design_1\nMKVLYT\nEDEWQK\n\n>design_2\nASSEP\n").unwrap();

        let parsed = read_fasta(&path).unwrap();
        assert_eq!(
            parsed,
            vec![
                FastaRecord::new("design_1", "MKVLYTEDEWQK"),
                FastaRecord::new("design_2", "ASSEP"),
            ]
        );
    }

    #[test]
    fn body_before_header_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.fasta");
        std::fs::write(&path, "MKVLYT\n>design_1\nASSEP\n").unwrap();

        assert!(matches!(
            read_fasta(&path),
            Err(PrepError::MalformedRecord(_))
        ));
    }

    #[test]
    fn empty_body_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.fasta");
        std::fs::write(&path, ">design_1\n>design_2\nASSEP\n").unwrap();

        assert!(matches!(
            read_fasta(&path),
            Err(PrepError::MalformedRecord(_))
        ));
    }

    #[test]
    fn formatted_record_is_single_line() {
        let rec = FastaRecord::new("d", "A".repeat(200));
        let text = format_record(&rec);
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with('\n'));
    }
}
