//! Running per base maxima of allele frequencies within one SNP record.
use crate::filter::Orientation;
use log::trace;

/// Returns the slot index of a nucleotide (A=0, C=1, G=2, T=3) or `None` for anything else
pub fn base_index(nuc: u8) -> Option<usize> {
    crate::NUCLEOTIDES.iter().position(|n| *n == nuc)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
/// Maximum observed allele frequency of each base for the SNP being read
pub struct FrequencyAggregator {
    snp_id: u64,
    freqs: [f32; 4],
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
/// Final per base maxima of a SNP record
pub struct BaseFrequencies {
    /// Adenine
    pub a: f32,
    /// Cytosine
    pub c: f32,
    /// Guanine
    pub g: f32,
    /// Thymine
    pub t: f32,
}

impl FrequencyAggregator {
    /// Starts a new record, forgetting any frequencies seen so far
    pub fn begin_record(&mut self, snp_id: u64) {
        self.snp_id = snp_id;
        self.freqs = [0.0; 4];
    }

    /// Identifier of the record being aggregated
    pub fn snp_id(&self) -> u64 {
        self.snp_id
    }

    /// Folds a frequency for `base` into the slot selected by `orientation`, keeping the maximum.
    /// Unknown bases are ignored.
    pub fn observe_frequency(&mut self, base: u8, orientation: Orientation, freq: f32) {
        if let Some(idx) = base_index(base) {
            let slot = orientation.slot(idx);
            trace!(
                "rs{}: {} at {} observed in slot {}",
                self.snp_id,
                base as char,
                freq,
                slot
            );
            if freq > self.freqs[slot] {
                self.freqs[slot] = freq;
            }
        }
    }

    /// Returns the maxima of the record
    pub fn end_record(&self) -> BaseFrequencies {
        BaseFrequencies {
            a: self.freqs[0],
            c: self.freqs[1],
            g: self.freqs[2],
            t: self.freqs[3],
        }
    }
}
