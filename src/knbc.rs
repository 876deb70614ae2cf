//! Juman-annotated corpus reader (KNBC directory layout)
//!
//! A corpus is a directory tree of annotated text files, one document per file.
//! Each document is line oriented: `#` lines are comments, `*` and `+` lines
//! mark bunsetsu and tag segments, `EOS` ends a sentence, and every other
//! non-blank line is one morpheme whose first column is the surface form.
//! We only keep the surface forms; the rest of the annotation is ignored.
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::vec;
use regex::Regex;
use errors::*;

/// A handle on an annotated corpus directory.
///
/// Document ids are paths relative to the corpus root, sorted so that every
/// enumeration visits the documents in the same order.
pub struct Corpus {
    root: PathBuf,
    doc_ids: Vec<String>,
}

impl Corpus {
    /// Open a corpus directory and enumerate its documents.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Corpus> {
        let root = root.as_ref().to_path_buf();
        let mut doc_ids = vec![];
        walk(&root, &root, &mut doc_ids)
            .map_err(|err| Error::MissingCorpus(root.display().to_string(), Some(err)))?;
        doc_ids.sort();
        info!("Found {} documents under {}", doc_ids.len(), root.display());
        Ok(Corpus {
            root: root,
            doc_ids: doc_ids,
        })
    }

    /// The ids of every document in the corpus, in enumeration order.
    pub fn doc_ids(&self) -> &[String] {
        &self.doc_ids
    }

    /// The surface-form tokens of one document, in document order.
    pub fn words(&self, doc_id: &str) -> Result<Vec<String>> {
        let file = File::open(self.root.join(doc_id))
            .map_err(|err| Error::DocumentRead(doc_id.to_owned(), err))?;
        parse_document(doc_id, BufReader::new(file))
    }

    /// All tokens of all documents, flattened in enumeration order.
    ///
    /// Documents are read one at a time as the stream is consumed, and a
    /// document that cannot be read or parsed surfaces as an `Err` item.
    pub fn tokens(&self) -> TokenStream {
        TokenStream {
            corpus: self,
            next_doc: 0,
            pending: vec![].into_iter(),
        }
    }
}

/// Iterator over every token in the corpus, yielding `Err` where a document
/// cannot be produced.
pub struct TokenStream<'c> {
    corpus: &'c Corpus,
    next_doc: usize,
    pending: vec::IntoIter<String>,
}

impl<'c> Iterator for TokenStream<'c> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.next() {
                return Some(Ok(token));
            }
            if self.next_doc >= self.corpus.doc_ids.len() {
                return None;
            }
            let doc_id = &self.corpus.doc_ids[self.next_doc];
            self.next_doc += 1;
            match self.corpus.words(doc_id) {
                Ok(words) => self.pending = words.into_iter(),
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

/// Collect the relative paths of all files under `dir` into `out`.
fn walk(root: &Path, dir: &Path, out: &mut Vec<String>) -> ::std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk(root, &path, out)?;
        } else {
            // The id is the path relative to the root, as the original
            // tagging tools name their files in plain ASCII.
            let id = path.strip_prefix(root)
                .unwrap_or(&path)
                .to_string_lossy()
                .into_owned();
            out.push(id);
        }
    }
    Ok(())
}

/// Parse one annotated document, keeping only the morpheme surface forms.
pub fn parse_document<R: BufRead>(doc_id: &str, reader: R) -> Result<Vec<String>> {
    // A morpheme line carries at least surface, reading and base columns.
    let morpheme = Regex::new(r"^(\S+)\s+\S+\s+\S+").unwrap();
    let mut words = vec![];
    for line in reader.lines() {
        let line = line.map_err(|err| Error::DocumentRead(doc_id.to_owned(), err))?;
        let line = line.trim_right();
        if line.is_empty() {
            continue;
        }
        if line.starts_with('#') || line.starts_with('*') || line.starts_with('+') {
            continue;
        }
        if line == "EOS" {
            continue;
        }
        match morpheme.captures(line) {
            Some(caps) => words.push(caps[1].to_owned()),
            None => {
                return Err(Error::MalformedDocument(
                    doc_id.to_owned(),
                    format!("not a morpheme line: {:?}", line),
                ));
            }
        }
    }
    Ok(words)
}
