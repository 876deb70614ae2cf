//! Emit a frequency table as `token<TAB>count` lines
use std::io::Write;
use tally::FreqTable;
use errors::*;

/// Write one `{token}\t{count}` line per table entry.
///
/// Entries come out in whatever order the map iterates; sort downstream if
/// you need stable output. Token bytes pass through untouched, so any script
/// the corpus uses survives the round trip. The sink is explicit so the
/// caller keeps control of buffering and locking.
pub fn report<W: Write>(table: &FreqTable, sink: &mut W) -> Result<()> {
    for (token, count) in table {
        writeln!(sink, "{}\t{}", token, count)?;
    }
    Ok(())
}
