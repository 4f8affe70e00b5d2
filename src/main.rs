#![warn(missing_debug_implementations, rust_2018_idioms, missing_docs)]

//! Reports candidate CpG sites where dbSNP records polymorphic on both bases sit side by side.
mod cli;

use log::{debug, error, info};
use rustycpg::markup::{MarkupEvents, BUFFSIZE};
use rustycpg::{find_cpg_pairs, scan_snps, ScanConfig};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::PathBuf;
use structopt::StructOpt;

/// Shortest input niffler can sniff a compression format from
const MAGIC_LEN: usize = 5;

type Result<T> = std::result::Result<T, rustycpg::Error>;

fn main() {
    let opt = cli::RustyCpg::from_args();
    opt.set_logging();

    if let Err(e) = run(&opt) {
        error!("{}", e);
        std::process::exit(1)
    }
}

fn run(opt: &cli::RustyCpg) -> Result<()> {
    let config = ScanConfig {
        reference_build: opt.build.clone(),
        threshold: opt.frequency_threshold()?,
    };

    let rdr = open_input(opt.input.as_ref())?;
    let (mut candidates, summary) = scan_snps(MarkupEvents::new(rdr), &config)?;
    let pairs = find_cpg_pairs(&mut candidates);
    info!(
        "Read {} SNP records, {} candidates, {} CpG sites",
        summary.records,
        summary.candidates,
        pairs.len()
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for pair in &pairs {
        writeln!(out, "{}", pair)?;
    }
    out.flush()?;
    Ok(())
}

/// Opens the input file or stdin, decompressing it when needed
fn open_input(path: Option<&PathBuf>) -> Result<Box<dyn BufRead>> {
    let rdr: Box<dyn Read> = match path {
        Some(path) => {
            info!("Reading {}...", path.display());
            Box::new(File::open(path)?)
        }
        None => {
            info!("Reading from stdin...");
            Box::new(io::stdin())
        }
    };

    decompress(rdr)
}

/// Sniffs the compression format, reading until `MAGIC_LEN` bytes or end of input are reached
fn decompress(mut rdr: Box<dyn Read>) -> Result<Box<dyn BufRead>> {
    let mut magic = Vec::with_capacity(MAGIC_LEN);
    (&mut rdr).take(MAGIC_LEN as u64).read_to_end(&mut magic)?;
    let short = magic.len() < MAGIC_LEN;
    let rdr = io::Cursor::new(magic).chain(rdr);
    if short {
        return Ok(Box::new(BufReader::with_capacity(BUFFSIZE, rdr)));
    }

    let (rdr, format) = niffler::get_reader(Box::new(rdr))?;
    debug!("Input compression is {:?}", format);
    Ok(Box::new(BufReader::with_capacity(BUFFSIZE, rdr)))
}
