//! A quick and dirty anagram finder: a word list hashed by letter signature
//! into a fixed-size, separately chained hash table.

mod bucket;
mod checksum;
mod config;
mod dictionary;
mod error;
mod linked_list;
mod logger;
mod lossy_lines;
pub mod repl;
mod signature;
mod table;

pub use bucket::{Bucket, Entry, InsertMode};
pub use checksum::{bucket_index, BuildByteSumHasher, ByteSumHasher};
pub use config::{Config, Layout};
pub use dictionary::Dictionary;
pub use error::{Error, Result};
pub use logger::initialize_logger;
pub use signature::signature;
pub use table::ChainedTable;
