//! Interpretation of `SnpLoc` and `SsInfo` attributes.
use crate::markup::Attributes;
use crate::{error::Error, Result};

/// Element carrying the location of a SNP on a reference build
pub const LOCATION_ELEMENT: &str = "SnpLoc";
/// Element describing a submitted SNP and its strand relative to the refSNP
pub const SUBMISSION_ELEMENT: &str = "SsInfo";

/// Offset folding a base index onto its complement, see [`Orientation::slot`]
const REVERSE_OFFSET: usize = 3;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// Strand of a submitted SNP relative to the refSNP
pub enum Orientation {
    /// Same strand, bases are attributed as reported
    Forward,
    /// Opposite strand, bases are attributed to their complement
    Reverse,
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Forward
    }
}

impl Orientation {
    /// Compensation offset, `0` on forward and `3` on reverse
    pub fn offset(self) -> usize {
        match self {
            Orientation::Forward => 0,
            Orientation::Reverse => REVERSE_OFFSET,
        }
    }

    /// Frequency slot for the base at `base_idx` (A=0, C=1, G=2, T=3). On reverse the distance
    /// from the offset maps A<->T and C<->G.
    pub fn slot(self, base_idx: usize) -> usize {
        (self.offset() as isize - base_idx as isize).abs() as usize
    }
}

/// Checks if the `genomicAssembly` of a location matches `build` exactly
pub fn is_target_build(attributes: &Attributes, build: &str) -> Result<bool> {
    Ok(attributes.require("genomicAssembly", LOCATION_ELEMENT)? == build)
}

/// Returns the `start` coordinate of a location or `0` when it is not given
pub fn extract_position(attributes: &Attributes) -> Result<u64> {
    match attributes.get("start") {
        Some(start) => start.trim().parse().map_err(|_| Error::InvalidNumber {
            attribute: "start".to_string(),
            element: LOCATION_ELEMENT.to_string(),
            value: start.to_string(),
        }),
        None => Ok(0),
    }
}

/// Reads `ssOrientToRs`, anything other than `rev` is forward
pub fn compute_orientation(attributes: &Attributes) -> Result<Orientation> {
    match attributes.require("ssOrientToRs", SUBMISSION_ELEMENT)? {
        "rev" => Ok(Orientation::Reverse),
        _ => Ok(Orientation::Forward),
    }
}
