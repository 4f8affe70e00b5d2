//! Candidate bases of a CpG site and the threshold applied when emitting them.
use crate::frequency::BaseFrequencies;
use log::debug;
use std::fmt;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// Base of the CpG dinucleotide a candidate can stand for
pub enum NucleotideClass {
    /// The `C` of the site, polymorphic to `T`
    C,
    /// The `G` of the site, polymorphic to `A`
    G,
}

impl fmt::Display for NucleotideClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NucleotideClass::C => write!(f, "C"),
            NucleotideClass::G => write!(f, "G"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// SNP whose maximum allele frequencies make it one half of a possible CpG site
pub struct Candidate {
    /// Coordinate on the reference build, `0` when unknown
    pub position: u64,
    /// refSNP id
    pub snp_id: u64,
    /// Which half of the site this is
    pub class: NucleotideClass,
    /// Frequency of `C` for class C, of `A` for class G
    pub freq_primary: f32,
    /// Frequency of `T` for class C, of `G` for class G
    pub freq_secondary: f32,
}

/// Appends the candidates supported by `freqs` to `candidates` and returns how many were added.
///
/// Class C requires both `C` and `T` and class G requires both `A` and `G` to reach
/// `threshold`; the two tests are independent.
pub fn emit_if_qualifying(
    candidates: &mut Vec<Candidate>,
    snp_id: u64,
    position: u64,
    freqs: &BaseFrequencies,
    threshold: f32,
) -> usize {
    let before = candidates.len();
    if freqs.c >= threshold && freqs.t >= threshold {
        candidates.push(Candidate {
            position,
            snp_id,
            class: NucleotideClass::C,
            freq_primary: freqs.c,
            freq_secondary: freqs.t,
        });
    }
    if freqs.a >= threshold && freqs.g >= threshold {
        candidates.push(Candidate {
            position,
            snp_id,
            class: NucleotideClass::G,
            freq_primary: freqs.a,
            freq_secondary: freqs.g,
        });
    }

    for candidate in &candidates[before..] {
        debug!(
            "rs{} at {} is a {} candidate ({}, {})",
            candidate.snp_id,
            candidate.position,
            candidate.class,
            candidate.freq_primary,
            candidate.freq_secondary
        );
    }
    candidates.len() - before
}
