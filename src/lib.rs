#![warn(missing_debug_implementations, rust_2018_idioms, missing_docs)]

//! Scanning of dbSNP XML for candidate CpG sites.
//!
//! A CpG site is a `C` followed by a `G` on the next position. Deamination of methylated
//! cytosines makes these sites hot spots for `C -> T` changes on the forward strand and the
//! complementary `G -> A` changes on the reverse strand. This crate streams `SnpInfo` records,
//! keeps the maximum observed allele frequency per base for each record and reports pairs of
//! adjacent SNPs where both bases of the dinucleotide are polymorphic above a threshold.
//!
pub mod adjacency;
pub mod candidate;
pub mod driver;
pub mod error;
pub mod filter;
pub mod frequency;
pub mod markup;

/// Nucleotide alphabet used, in slot order
pub const NUCLEOTIDES: [u8; 4] = [b'A', b'C', b'G', b'T'];
/// Reference build whose coordinates are used unless configured otherwise
pub const DEFAULT_REFERENCE_BUILD: &str = "37:GRCh37";

/// Result type used across the crate
pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub use adjacency::{find_cpg_pairs, CpgPair};
pub use candidate::{Candidate, NucleotideClass};
pub use driver::{scan_snps, ScanConfig, ScanSummary};
pub use error::Error;
