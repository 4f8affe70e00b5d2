//! Pairing of candidates on consecutive positions into CpG sites.
use crate::candidate::{Candidate, NucleotideClass};
use log::debug;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
/// A C candidate directly followed by a G candidate on the next position
pub struct CpgPair {
    /// Half of the site on the lower coordinate
    pub c: Candidate,
    /// Half of the site on `c.position + 1`
    pub g: Candidate,
}

impl fmt::Display for CpgPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {:.6} {:.6} {:.6} {:.6}",
            self.c.position,
            self.c.snp_id,
            self.g.snp_id,
            self.c.freq_primary,
            self.c.freq_secondary,
            self.g.freq_primary,
            self.g.freq_secondary
        )
    }
}

/// Sorts candidates by position, keeping emission order among equal positions
pub fn sort_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by_key(|candidate| candidate.position);
}

/// Sorts `candidates` and returns every C candidate followed by a G candidate one position
/// later.
///
/// For each candidate the comparison partner is found by walking back over candidates sharing
/// its position until a different position or the start of the list is reached. When several
/// candidates share a position only that boundary element is ever compared.
pub fn find_cpg_pairs(candidates: &mut [Candidate]) -> Vec<CpgPair> {
    sort_candidates(candidates);

    let mut pairs = Vec::new();
    for i in 1..candidates.len() {
        let current = &candidates[i];
        let mut j = i - 1;
        while j > 0 && candidates[j].position == current.position {
            j -= 1;
        }
        let previous = &candidates[j];

        if current.class == NucleotideClass::G
            && previous.class == NucleotideClass::C
            && previous.position.checked_add(1) == Some(current.position)
        {
            debug!(
                "CpG at {}: rs{} and rs{}",
                previous.position, previous.snp_id, current.snp_id
            );
            pairs.push(CpgPair {
                c: *previous,
                g: *current,
            });
        }
    }
    pairs
}
