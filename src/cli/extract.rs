use clap::Parser;
use domainprep::{
    extract_domain, read_fasta, validate_flanks, write_fasta, FastaRecord, PrepError,
};
use std::path::PathBuf;
use tracing::{debug, error, info, trace, warn};

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// Input FASTA file with full-length sequences
    #[arg(short, long)]
    input: PathBuf,

    /// Output FASTA file for the extracted domains
    #[arg(short, long, default_value = "extracted_domains.fasta")]
    output: PathBuf,

    /// N-terminal conserved flank motif
    #[arg(short, long)]
    n_flank: String,

    /// C-terminal conserved flank motif
    #[arg(short, long)]
    c_flank: String,

    /// Number of residues to keep from each flank
    #[arg(short, long, default_value_t = 5)]
    keep: usize,
}

pub(crate) fn run(args: &Args) {
    trace!("{args:?}");

    // A bad keep count or motif would fail every item identically
    if let Err(e) = validate_flanks(&args.n_flank, &args.c_flank, args.keep) {
        error!("{e}");
        return;
    }
    debug!(
        "Extracted domains will start with {} and end with {}",
        &args.n_flank[args.n_flank.len() - args.keep..],
        &args.c_flank[..args.keep]
    );

    let records = match read_fasta(&args.input) {
        Ok(records) => records,
        Err(e) => {
            error!("Failed to read {}: {e}", args.input.display());
            return;
        }
    };
    info!("Extracting domains from {} sequences", records.len());

    let mut extracted: Vec<FastaRecord> = Vec::new();
    let mut failures: Vec<(String, PrepError)> = Vec::new();

    for record in &records {
        match extract_domain(&record.id, &record.seq, &args.n_flank, &args.c_flank, args.keep) {
            Ok(domain) => {
                debug!(
                    "{}: {} residues at {}..{}, starting {}",
                    domain.id,
                    domain.seq.len(),
                    domain.start,
                    domain.end,
                    domain.seq.chars().take(20).collect::<String>()
                );
                extracted.push(FastaRecord::new(domain.id, domain.seq));
            }
            Err(e) => {
                warn!("Skipping {}: {e}", record.id);
                failures.push((record.id.clone(), e));
            }
        }
    }

    if extracted.is_empty() {
        error!("No domains were extracted");
        return;
    }
    if let Err(e) = write_fasta(&args.output, &extracted) {
        error!("Failed to write {}: {e}", args.output.display());
        return;
    }

    info!(
        "Extracted {}/{} domains to {}",
        extracted.len(),
        records.len(),
        args.output.display()
    );
    if !failures.is_empty() {
        warn!("{} sequence(s) failed:", failures.len());
        for (id, e) in &failures {
            warn!("  {id}: {e}");
        }
    }
}
