use thiserror::Error;

/// Side of the variable region a flank motif bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlankSide {
    /// The conserved region preceding the variable domain
    NTerminal,
    /// The conserved region following the variable domain
    CTerminal,
}

impl std::fmt::Display for FlankSide {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            FlankSide::NTerminal => write!(f, "N-terminal"),
            FlankSide::CTerminal => write!(f, "C-terminal"),
        }
    }
}

/// Errors raised while preparing multimer prediction inputs.
#[derive(Debug, Error)]
pub enum PrepError {
    /// The requested chain has no atom records in the structure
    #[error("no atom records found for chain {chain}")]
    NoChainFound {
        /// Chain identifier that was requested
        chain: String,
    },

    /// A flank motif could not be located in the sequence
    #[error("{side} flank not found in sequence {id}")]
    FlankNotFound {
        /// Which flank was missing
        side: FlankSide,
        /// Identifier of the sequence being searched
        id: String,
    },

    /// Run parameters that would fail every item are rejected up front
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Unparseable structure or FASTA input
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// Underlying filesystem error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
