//! Errors surfaced by the dictionary. Not finding a word is never one of
//! them; lookups report that with `None` or an empty Vec.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A table needs at least one bucket to hash into.
    #[error("a table needs at least one bucket, got a capacity of 0")]
    ZeroCapacity,

    /// The word list couldn't be opened or read.
    #[error("couldn't read word list {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a query or writing its results failed.
    #[error("prompt I/O failed: {0}")]
    Prompt(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
