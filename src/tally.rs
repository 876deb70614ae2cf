//! Frequency tallies over token streams
//!
//! The table is an ordinary HashMap behind a faster (but not DoS-resistant)
//! hash, since corpus tokens are not attacker controlled.
use farmhash;
use std::collections::HashMap;
use std::hash::{Hasher, BuildHasherDefault};
use errors::*;

/// Act like a farmhash
///
/// But since farmhash isn't a streaming hash we only compute the last bytes
/// so it's not really fulfilling the Hasher trait. But it's enough for us.
pub struct FarmHashLie (u64);

impl Default for FarmHashLie {
    #[inline]
    fn default() -> FarmHashLie { FarmHashLie(0) }
}

impl Hasher for FarmHashLie {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.0 = farmhash::hash64(bytes);
    }
}

pub type Farm = BuildHasherDefault<FarmHashLie>;

/// Token to occurrence count, merged across the whole corpus.
///
/// Iteration order is unspecified; every entry is at least 1.
pub type FreqTable = HashMap<String, usize, Farm>;

pub fn new_table() -> FreqTable {
    Default::default()
}

/// Tally every token in the stream.
///
/// An empty stream yields an empty table. Counts are global: the same token
/// in two documents lands in one entry. The first `Err` item aborts the pass
/// and the partial tally is dropped.
pub fn count<I>(tokens: I) -> Result<FreqTable>
    where I: IntoIterator<Item=Result<String>> {
    let mut table = new_table();
    for token in tokens {
        *table.entry(token?).or_insert(0) += 1;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::{count, FreqTable};
    use errors::{Error, Result};

    fn stream(tokens: &[&str]) -> Vec<Result<String>> {
        tokens.iter().map(|t| Ok(t.to_string())).collect()
    }

    fn entries(table: &FreqTable) -> Vec<(String, usize)> {
        let mut pairs: Vec<(String, usize)> =
            table.iter().map(|(t, c)| (t.clone(), *c)).collect();
        pairs.sort();
        pairs
    }

    #[test]
    fn empty_stream_yields_empty_table() {
        let table = count(stream(&[])).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn counts_equal_multiplicities() {
        // 猫 twice, 犬 once
        let table = count(stream(&["猫", "猫", "犬"])).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table["猫"], 2);
        assert_eq!(table["犬"], 1);
    }

    #[test]
    fn counts_merge_across_documents() {
        let doc1 = stream(&["a", "b"]);
        let doc2 = stream(&["b", "c"]);
        let table = count(doc1.into_iter().chain(doc2.into_iter())).unwrap();
        assert_eq!(entries(&table),
            vec![("a".to_string(), 1), ("b".to_string(), 2), ("c".to_string(), 1)]);
    }

    #[test]
    fn count_is_order_insensitive() {
        let forward = count(stream(&["a", "b", "b", "c", "a", "a"])).unwrap();
        let shuffled = count(stream(&["b", "a", "c", "a", "b", "a"])).unwrap();
        assert_eq!(entries(&forward), entries(&shuffled));
    }

    #[test]
    fn no_entry_is_zero() {
        let table = count(stream(&["x", "y", "x"])).unwrap();
        assert!(table.values().all(|&c| c > 0));
    }

    #[test]
    fn first_error_aborts_the_pass() {
        let tokens: Vec<Result<String>> = vec![
            Ok("a".to_string()),
            Err(Error::MalformedDocument("doc2".to_string(), "broken".to_string())),
            Ok("b".to_string()),
        ];
        match count(tokens) {
            Err(Error::MalformedDocument(doc, _)) => assert_eq!(doc, "doc2"),
            other => panic!("expected the source error back, got {:?}", other.map(|t| t.len())),
        }
    }
}
