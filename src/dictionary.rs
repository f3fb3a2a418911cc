//! Loads a word list into a [`ChainedTable`] keyed by signature, so every
//! word built from the same letters can be pulled back out in one lookup.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    time::Instant,
};

use log::{debug, info};

use crate::bucket::InsertMode;
use crate::error::{Error, Result};
use crate::lossy_lines::LossyLines;
use crate::signature::signature;
use crate::table::ChainedTable;

/// A word list indexed by signature.
pub enum Dictionary {
    /// One entry per word, many entries per signature. Lookups return the
    /// most recently loaded word first.
    Chained(ChainedTable<String>),

    /// One entry per signature holding every word that shares it, in the
    /// order the words were loaded.
    Grouped(ChainedTable<Vec<String>>),
}

impl Dictionary {
    /// An empty dictionary whose table has `capacity` buckets. `mode` picks
    /// how words sharing a signature are stored:
    /// [`InsertMode::PrependAlways`] gives [`Dictionary::Chained`] and
    /// [`InsertMode::Update`] gives [`Dictionary::Grouped`].
    pub fn with_capacity(mode: InsertMode, capacity: usize) -> Result<Self> {
        Ok(match mode {
            InsertMode::PrependAlways => Dictionary::Chained(ChainedTable::with_capacity(capacity)?),
            InsertMode::Update => Dictionary::Grouped(ChainedTable::with_capacity(capacity)?),
        })
    }

    /// Reads a word list from the file at `path`, one word per line.
    pub fn open<P: AsRef<Path>>(path: P, mode: InsertMode, capacity: usize) -> Result<Self> {
        let path = path.as_ref();
        let io_err = |source: io::Error| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        info!("loading words from {}", path.display());

        let mut dictionary = Dictionary::with_capacity(mode, capacity)?;
        dictionary.load(BufReader::new(file)).map_err(io_err)?;
        Ok(dictionary)
    }

    /// Reads a word list from any buffered reader, one word per line.
    pub fn from_reader<R: BufRead>(reader: R, mode: InsertMode, capacity: usize) -> Result<Self> {
        let mut dictionary = Dictionary::with_capacity(mode, capacity)?;
        dictionary.load(reader).map_err(|source| Error::Io {
            path: "<reader>".into(),
            source,
        })?;
        Ok(dictionary)
    }

    /// Adds every line of `reader` to the dictionary. Lines are lowercased
    /// and stripped of trailing whitespace; blank lines are skipped. Bytes
    /// that aren't UTF-8 are replaced rather than failing the load.
    pub fn load<R: BufRead>(&mut self, reader: R) -> io::Result<usize> {
        let before = Instant::now();
        let mut added = 0;

        for line in LossyLines::new(reader) {
            let word = line?.trim_end().to_lowercase();
            if word.is_empty() {
                continue;
            }

            self.add(word);
            added += 1;
        }

        info!(
            "loaded {} words in {:.6}s, average bucket length {:.3}",
            added,
            before.elapsed().as_secs_f64(),
            self.average_bucket_length()
        );

        Ok(added)
    }

    /// Files a single word under its signature.
    pub fn add(&mut self, word: String) {
        let key = signature(&word);

        match self {
            Dictionary::Chained(table) => table.insert_all(key, word),
            Dictionary::Grouped(table) => match table.search_mut(&key) {
                Some(words) => words.push(word),
                None => {
                    table.insert(key, vec![word]);
                }
            },
        }
    }

    /// Every word sharing `query`'s signature. Empty when there are none.
    pub fn lookup(&self, query: &str) -> Vec<&str> {
        let key = signature(query);
        let before = Instant::now();

        let words: Vec<&str> = match self {
            Dictionary::Chained(table) => table
                .search_all(&key)
                .into_iter()
                .map(String::as_str)
                .collect(),
            Dictionary::Grouped(table) => table
                .search(&key)
                .map(|words| words.iter().map(String::as_str).collect())
                .unwrap_or_default(),
        };

        debug!(
            "searched for {:?} in {:.9}s, {} hits",
            key,
            before.elapsed().as_secs_f64(),
            words.len()
        );

        words
    }

    /// Drops `word` from the dictionary. Returns whether it was there.
    pub fn remove(&mut self, word: &str) -> bool {
        let word = word.to_lowercase();
        let key = signature(&word);

        match self {
            Dictionary::Chained(table) => {
                // words sharing a signature share a chain, so set the others
                // aside until the right entry surfaces at the head
                let mut skipped = Vec::new();
                let mut found = false;
                while let Some(head) = table.search(&key) {
                    if *head == word {
                        found = table.delete(&key);
                        break;
                    }
                    skipped.push(head.clone());
                    table.delete(&key);
                }
                for other in skipped.into_iter().rev() {
                    table.insert_all(key.clone(), other);
                }
                found
            }
            Dictionary::Grouped(table) => {
                let emptied = match table.search_mut(&key) {
                    Some(words) => match words.iter().position(|w| *w == word) {
                        Some(pos) => {
                            words.remove(pos);
                            words.is_empty()
                        }
                        None => return false,
                    },
                    None => return false,
                };
                if emptied {
                    table.delete(&key);
                }
                true
            }
        }
    }

    /// The number of words stored.
    pub fn len(&self) -> usize {
        match self {
            Dictionary::Chained(table) => table.size(),
            Dictionary::Grouped(table) => table
                .iter_buckets()
                .flat_map(|bucket| bucket.iter())
                .map(|entry| entry.value.len())
                .sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mean number of entries per bucket in the backing table.
    pub fn average_bucket_length(&self) -> f64 {
        match self {
            Dictionary::Chained(table) => table.average_bucket_length(),
            Dictionary::Grouped(table) => table.average_bucket_length(),
        }
    }

    pub fn mode(&self) -> InsertMode {
        match self {
            Dictionary::Chained(_) => InsertMode::PrependAlways,
            Dictionary::Grouped(_) => InsertMode::Update,
        }
    }
}
