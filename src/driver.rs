//! State machine turning the `SnpInfo` / `SnpLoc` / `SsInfo` / `AlleleFreq` elements of a dbSNP
//! XML stream into [`Candidate`]s.
//!
//! Frequencies are aggregated across every submission of a refSNP: the maximum frequency seen
//! for a base anywhere inside one `SnpInfo` is the one compared against the threshold.
use crate::candidate::{emit_if_qualifying, Candidate};
use crate::filter::{self, Orientation};
use crate::frequency::{base_index, FrequencyAggregator};
use crate::markup::{Attributes, MarkupEvent};
use crate::{error::Error, Result};
use log::{debug, info};

/// Element wrapping one refSNP record
pub const RECORD_ELEMENT: &str = "SnpInfo";
/// Element holding the frequency of one allele
pub const FREQUENCY_ELEMENT: &str = "AlleleFreq";

#[derive(Debug, Clone)]
/// Settings of a scan
pub struct ScanConfig {
    /// `genomicAssembly` whose coordinates are used
    pub reference_build: String,
    /// Minimum frequency (fraction) both alleles of a class need
    pub threshold: f32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            reference_build: crate::DEFAULT_REFERENCE_BUILD.to_string(),
            threshold: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// Counts collected while scanning
pub struct ScanSummary {
    /// Number of `SnpInfo` records closed
    pub records: usize,
    /// Number of candidates emitted
    pub candidates: usize,
}

#[derive(Debug, Default)]
/// Context of the SNP record currently being read
pub struct ParseContext {
    /// Position on the configured build, `0` until a matching location is seen
    pub snp_position: u64,
    /// Strand of the most recent submission
    pub orientation: Orientation,
    /// Maxima of the record
    pub freqs: FrequencyAggregator,
}

impl ParseContext {
    fn begin_record(&mut self, snp_id: u64) {
        self.snp_position = 0;
        self.orientation = Orientation::Forward;
        self.freqs.begin_record(snp_id);
    }
}

/// Dispatches markup events into a [`ParseContext`] and collects the emitted candidates
#[derive(Debug)]
pub struct ParseDriver<'a> {
    config: &'a ScanConfig,
    context: ParseContext,
    candidates: Vec<Candidate>,
    summary: ScanSummary,
}

impl<'a> ParseDriver<'a> {
    /// Creates a driver with an empty candidate list
    pub fn new(config: &'a ScanConfig) -> Self {
        Self {
            config,
            context: ParseContext::default(),
            candidates: Vec::new(),
            summary: ScanSummary::default(),
        }
    }

    /// Handles a single event
    pub fn handle(&mut self, event: &MarkupEvent) -> Result<()> {
        match event {
            MarkupEvent::Start { name, attributes } => self.start(name, attributes),
            MarkupEvent::End { name } => {
                if name == RECORD_ELEMENT {
                    self.end_record();
                }
                Ok(())
            }
        }
    }

    fn start(&mut self, name: &str, attributes: &Attributes) -> Result<()> {
        match name {
            RECORD_ELEMENT => {
                let snp_id = parse_number(attributes.require("rsId", name)?, "rsId", name)?;
                self.context.begin_record(snp_id);
            }
            filter::LOCATION_ELEMENT => {
                if filter::is_target_build(attributes, &self.config.reference_build)? {
                    self.context.snp_position = filter::extract_position(attributes)?;
                }
            }
            filter::SUBMISSION_ELEMENT => {
                self.context.orientation = filter::compute_orientation(attributes)?;
            }
            FREQUENCY_ELEMENT => {
                let base = match attributes.value_at(0).and_then(|allele| allele.bytes().next()) {
                    Some(base) if base_index(base).is_some() => base,
                    _ => return Ok(()),
                };
                let (freq_attr, freq) =
                    attributes
                        .entry_at(1)
                        .ok_or_else(|| Error::MissingAttribute {
                            attribute: "frequency".to_string(),
                            element: name.to_string(),
                        })?;
                let freq = freq.trim().parse::<f32>().map_err(|_| Error::InvalidNumber {
                    attribute: freq_attr.to_string(),
                    element: name.to_string(),
                    value: freq.to_string(),
                })?;
                self.context
                    .freqs
                    .observe_frequency(base, self.context.orientation, freq);
            }
            _ => {}
        }
        Ok(())
    }

    fn end_record(&mut self) {
        let freqs = self.context.freqs.end_record();
        self.summary.records += 1;
        self.summary.candidates += emit_if_qualifying(
            &mut self.candidates,
            self.context.freqs.snp_id(),
            self.context.snp_position,
            &freqs,
            self.config.threshold,
        );
    }

    /// Returns the collected candidates together with the scan counts
    pub fn finish(self) -> (Vec<Candidate>, ScanSummary) {
        (self.candidates, self.summary)
    }
}

fn parse_number(value: &str, attribute: &str, element: &str) -> Result<u64> {
    value.trim().parse().map_err(|_| Error::InvalidNumber {
        attribute: attribute.to_string(),
        element: element.to_string(),
        value: value.to_string(),
    })
}

/// Consumes all events and returns the unsorted candidates. The first error aborts the scan.
pub fn scan_snps<I>(events: I, config: &ScanConfig) -> Result<(Vec<Candidate>, ScanSummary)>
where
    I: IntoIterator<Item = Result<MarkupEvent>>,
{
    info!(
        "Scanning SNPs on build {} with a minimum frequency of {}",
        config.reference_build, config.threshold
    );
    let mut driver = ParseDriver::new(config);
    for event in events {
        driver.handle(&event?)?;
    }

    let (candidates, summary) = driver.finish();
    debug!(
        "{} candidates from {} SNP records",
        summary.candidates, summary.records
    );
    Ok((candidates, summary))
}
