use log::LevelFilter;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "rustycpg",
    about = "Reports adjacent dbSNP records forming a CpG site polymorphic on both bases"
)]
pub(crate) struct RustyCpg {
    #[structopt(
        help = "Minimum allele frequency in percent (0-100) required for both alleles of a base"
    )]
    pub(crate) threshold: Option<f32>,
    #[structopt(
        short,
        long,
        help = "dbSNP XML to scan, optionally gzipped [default: stdin]",
        parse(from_os_str)
    )]
    pub(crate) input: Option<PathBuf>,
    #[structopt(
        short,
        long,
        help = "Reference build whose coordinates are used",
        default_value = "37:GRCh37"
    )]
    pub(crate) build: String,
    #[structopt(
        short,
        long,
        help = "Increase logging verbosity (-v info, -vv debug, -vvv trace)",
        parse(from_occurrences)
    )]
    pub(crate) verbose: u8,
    #[structopt(short, long, help = "Only log errors")]
    pub(crate) quiet: bool,
}

impl RustyCpg {
    pub(crate) fn set_logging(&self) {
        let level = if self.quiet {
            LevelFilter::Error
        } else {
            match self.verbose {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        };
        env_logger::Builder::new().filter_level(level).init();
    }

    /// Threshold as a fraction
    pub(crate) fn frequency_threshold(&self) -> crate::Result<f32> {
        match self.threshold {
            Some(pct) if (0.0..=100.0).contains(&pct) => Ok(pct / 100.0),
            Some(pct) => Err(rustycpg::Error::InvalidThreshold(pct)),
            None => Ok(0.0),
        }
    }
}
