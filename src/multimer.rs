//! Pairing extracted domains with a fixed partner sequence.
//!
//! LocalColabFold and compatible tools accept multimers as a single FASTA
//! record whose sequence holds both chains separated by a colon. Every
//! extracted domain is paired with the same partner sequence, so the record
//! header carries only the domain identifier.

use crate::errors::PrepError;
use crate::fasta::FastaRecord;
use std::str::FromStr;

/// Order of the two chains in the colon-separated sequence.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
#[value(rename_all = "snake_case")]
pub enum ChainOrder {
    /// Partner sequence first: `partner:domain`
    PartnerFirst,
    /// Domain sequence first: `domain:partner`
    DomainFirst,
}

impl std::fmt::Display for ChainOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ChainOrder::PartnerFirst => write!(f, "partner_first"),
            ChainOrder::DomainFirst => write!(f, "domain_first"),
        }
    }
}

impl FromStr for ChainOrder {
    type Err = PrepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "partner_first" => Ok(ChainOrder::PartnerFirst),
            "domain_first" => Ok(ChainOrder::DomainFirst),
            other => Err(PrepError::InvalidConfiguration(format!(
                "unknown chain order {other:?}; use partner_first or domain_first"
            ))),
        }
    }
}

/// Build the multimer record for one domain.
///
/// The header equals the domain identifier; the partner is constant across
/// the batch and is not encoded in it.
pub fn assemble_multimer(domain: &FastaRecord, partner: &str, order: ChainOrder) -> FastaRecord {
    let seq = match order {
        ChainOrder::PartnerFirst => format!("{partner}:{}", domain.seq),
        ChainOrder::DomainFirst => format!("{}:{partner}", domain.seq),
    };
    FastaRecord::new(domain.id.clone(), seq)
}
