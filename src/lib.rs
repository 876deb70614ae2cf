//! Helper functions for corpus frequency programs
//!
//! This code is intended to reduce the boilerplate in the included binaries and probably does not
//! serve much use elsewhere. But if you do use it, please consider citing it!


#[macro_use] extern crate log;
extern crate regex;
extern crate farmhash;
pub mod errors;
pub mod knbc;
pub mod tally;
pub mod report;
