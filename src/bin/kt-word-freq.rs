//! Print a word frequency table for an annotated corpus
//!
//! This simple script takes the directory of a Juman-annotated corpus (KNBC
//! layout), tallies every surface-form token across all documents, and prints
//! one `token<TAB>count` line per distinct token to stdout. Counts are merged
//! across the whole corpus, not per document. Line order is whatever the hash
//! map gives; pipe through sort if you need stable output.

// argument parsing
#[macro_use] extern crate clap;
// logging
#[macro_use] extern crate log;
extern crate env_logger;
// lastly, this library
extern crate kotoba;

use std::io::{self, Write, BufWriter};

use kotoba::errors::*;
use kotoba::knbc::Corpus;
use kotoba::{tally, report};

pub fn main() {
    // Main can't return a Result, and the ? operator needs the enclosing function to return Result
    inner_main().expect("Could not recover. Exiting.");
}
pub fn inner_main() -> Result<()> {
    env_logger::init().unwrap();
    let args = app_from_crate!()
        .arg_from_usage("<corpus> 'directory containing the annotated corpus files'")
        .get_matches();

    let corpus = Corpus::open(args.value_of("corpus").unwrap())?;
    info!("Tallying {} documents", corpus.doc_ids().len());

    // Nothing is printed until the whole corpus has been read, so a bad
    // document aborts the run without a half-written table on stdout.
    let table = tally::count(corpus.tokens())?;
    info!("{} distinct tokens", table.len());

    let stdout = io::stdout();
    let mut sink = BufWriter::new(stdout.lock());
    report::report(&table, &mut sink)?;
    sink.flush()?;
    Ok(())
}
