use clap::Parser;
use domainprep::{
    chain_sequence, get_sequences, load_model, safe_filename, write_fasta, FastaRecord,
    LabelRegistry, PrepError,
};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, trace, warn};

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub(crate) struct Args {
    /// Directory containing the PDB files to be converted
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory; defaults to the input directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Chain to extract from each structure
    #[arg(short, long, default_value_t = String::from("A"))]
    chain: String,

    /// Name of the combined FASTA file
    #[arg(short = 'f', long, default_value_t = String::from("all_sequences.fasta"))]
    combined: String,
}

pub(crate) fn run(args: &Args) {
    trace!("{args:?}");

    // Make sure `input` exists
    let input_path = match Path::new(&args.input).canonicalize() {
        Ok(path) => path,
        Err(e) => {
            error!("Failed to retrieve input directory: {}", e);
            return;
        }
    };
    let output_path = args.output.clone().unwrap_or_else(|| input_path.clone());
    let _ = std::fs::create_dir_all(&output_path);

    let mut pdb_files = match list_pdb_files(&input_path) {
        Ok(files) => files,
        Err(e) => {
            error!("Failed to list PDB files in {}: {e}", input_path.display());
            return;
        }
    };
    if pdb_files.is_empty() {
        error!("No PDB files found in {}", input_path.display());
        return;
    }
    // Deterministic processing order
    pdb_files.sort();
    info!(
        "Converting chain {} of {} PDB files",
        args.chain,
        pdb_files.len()
    );

    let mut registry = LabelRegistry::new();
    let mut combined: Vec<FastaRecord> = Vec::new();
    let mut failures: Vec<(String, PrepError)> = Vec::new();

    for path in &pdb_files {
        let filename = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or_default()
            .to_string();

        match convert_file(path, &args.chain) {
            Ok(seq) => {
                let label = registry.assign(&filename);
                debug!("{filename} -> {label} ({} residues)", seq.len());

                let record = FastaRecord::new(label.clone(), seq);
                let item_file = output_path.join(format!("{}.fasta", safe_filename(&label)));
                if let Err(e) = write_fasta(&item_file, std::slice::from_ref(&record)) {
                    failures.push((filename, e));
                    continue;
                }
                combined.push(record);
            }
            Err(e) => {
                warn!("Skipping {filename}: {e}");
                failures.push((filename, e));
            }
        }
    }

    if !combined.is_empty() {
        let combined_file = output_path.join(&args.combined);
        if let Err(e) = write_fasta(&combined_file, &combined) {
            error!("Failed to write combined file: {e}");
            return;
        }
        info!("Combined FASTA written to {}", combined_file.display());
    }

    info!(
        "Processed {}/{} PDB files",
        combined.len(),
        pdb_files.len()
    );
    if !failures.is_empty() {
        warn!("{} file(s) failed:", failures.len());
        for (filename, e) in &failures {
            warn!("  {filename}: {e}");
        }
    }
}

fn list_pdb_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "pdb") {
            files.push(path);
        }
    }
    Ok(files)
}

fn convert_file(path: &Path, chain: &str) -> Result<String, PrepError> {
    let input_file = path.to_str().ok_or_else(|| {
        PrepError::MalformedRecord(format!("non-UTF-8 path {}", path.display()))
    })?;

    let (pdb, pdb_warnings) = load_model(input_file)?;
    if !pdb_warnings.is_empty() {
        pdb_warnings.iter().for_each(|e| match e.level() {
            pdbtbx::ErrorLevel::BreakingError => error!("{e}"),
            pdbtbx::ErrorLevel::InvalidatingError => error!("{e}"),
            _ => warn!("{e}"),
        });
    }

    // Information on the sequence of the chains in the model
    debug!("Loaded {} chains", pdb.chain_count());
    for (chain_id, seq) in get_sequences(&pdb) {
        trace!(">{chain_id}\n{seq}");
    }

    chain_sequence(&pdb, chain)
}
