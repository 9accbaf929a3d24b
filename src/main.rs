mod cli;

use clap::{Parser, Subcommand};
use tracing::Level;

/// Prepare multimer structure-prediction inputs from designed PDB models
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbosity of the program:
    /// -v for info, -vv for debug, and -vvv for trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert PDB files to FASTA sequences for one chain
    Pdb2Fasta(cli::pdb2fasta::Args),
    /// Extract variable domains between two conserved flank motifs
    Extract(cli::extract::Args),
    /// Pair extracted domains with a partner sequence for multimer prediction
    Multimer(cli::multimer::Args),
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    match &cli.command {
        Command::Pdb2Fasta(args) => cli::pdb2fasta::run(args),
        Command::Extract(args) => cli::extract::run(args),
        Command::Multimer(args) => cli::multimer::run(args),
    }
}
