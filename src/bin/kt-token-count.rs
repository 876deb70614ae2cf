//! Count the tokens in an annotated corpus
//!
//! Prints the total number of token occurrences across all documents. The
//! number of distinct types goes to the log, mostly as a sanity check that
//! the corpus actually parsed.

// argument parsing
#[macro_use] extern crate clap;
// logging
#[macro_use] extern crate log;
extern crate env_logger;
// lastly, this library
extern crate kotoba;

use kotoba::errors::*;
use kotoba::knbc::Corpus;
use kotoba::tally;

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
    let table = tally::count(corpus.tokens())?;
    let total: usize = table.values().sum();
    info!("{} distinct types", table.len());

    println!("{}", total);
    Ok(())
}
