use clap::Parser;
use domainprep::{
    assemble_multimer, read_fasta, safe_filename, write_fasta, ChainOrder, FastaRecord,
    LabelRegistry, PrepError,
};
use std::path::PathBuf;
use tracing::{debug, error, info, trace, warn};

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// Input FASTA file with extracted domain sequences
    #[arg(short, long)]
    input: PathBuf,

    /// FASTA file with the partner sequence paired with every domain
    #[arg(short, long)]
    partner: PathBuf,

    /// Order of the two chains in the colon-separated sequence
    #[arg(short = 'r', long, value_enum, default_value_t = ChainOrder::PartnerFirst)]
    order: ChainOrder,

    /// Output directory for the individual multimer files
    #[arg(short, long, default_value = "multimer_inputs")]
    output: PathBuf,

    /// Name of the combined multimer FASTA file
    #[arg(short = 'f', long, default_value_t = String::from("all_multimer_inputs.fasta"))]
    combined: String,
}

pub(crate) fn run(args: &Args) {
    trace!("{args:?}");

    // A missing partner would fail every item identically
    let partner = match read_partner(&args.partner) {
        Ok(partner) => partner,
        Err(e) => {
            error!("{e}");
            return;
        }
    };
    info!(
        "Partner sequence {} ({} residues), order {}",
        partner.id,
        partner.seq.len(),
        args.order
    );

    let domains = match read_fasta(&args.input) {
        Ok(records) => records,
        Err(e) => {
            error!("Failed to read {}: {e}", args.input.display());
            return;
        }
    };
    info!("Pairing {} domains with the partner", domains.len());

    if let Err(e) = std::fs::create_dir_all(&args.output) {
        error!("Failed to create {}: {e}", args.output.display());
        return;
    }

    // Domain identifiers whose filesystem-safe forms coincide would
    // otherwise overwrite each other's files
    let mut registry = LabelRegistry::new();
    let mut combined: Vec<FastaRecord> = Vec::new();
    let mut failures: Vec<(String, PrepError)> = Vec::new();

    for domain in &domains {
        let mut record = assemble_multimer(domain, &partner.seq, args.order);
        record.id = registry.reserve(&record.id);
        debug!(
            "{}: {} residues across both chains",
            record.id,
            record.seq.len() - 1
        );

        let item_file = args
            .output
            .join(format!("{}.fasta", safe_filename(&record.id)));
        if let Err(e) = write_fasta(&item_file, std::slice::from_ref(&record)) {
            warn!("Skipping {}: {e}", record.id);
            failures.push((record.id.clone(), e));
            continue;
        }
        combined.push(record);
    }

    if !combined.is_empty() {
        let combined_file = args.output.join(&args.combined);
        if let Err(e) = write_fasta(&combined_file, &combined) {
            error!("Failed to write combined file: {e}");
            return;
        }
        info!("Combined multimer FASTA written to {}", combined_file.display());
    }

    info!("Prepared {}/{} multimer inputs", combined.len(), domains.len());
    if !failures.is_empty() {
        warn!("{} domain(s) failed:", failures.len());
        for (id, e) in &failures {
            warn!("  {id}: {e}");
        }
    }
}

fn read_partner(path: &PathBuf) -> Result<FastaRecord, PrepError> {
    let mut records = read_fasta(path)?;
    if records.is_empty() {
        return Err(PrepError::InvalidConfiguration(format!(
            "partner file {} contains no sequences",
            path.display()
        )));
    }
    if records.len() > 1 {
        warn!(
            "Partner file {} contains {} records; using the first",
            path.display(),
            records.len()
        );
    }
    Ok(records.swap_remove(0))
}
