use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::bucket::InsertMode;

pub const DEFAULT_WORDS: &str = "words.txt";
pub const DEFAULT_CAPACITY: usize = 1000;

/// How words that share a signature are stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    /// An entry per word; matches come back newest first.
    Chained,
    /// An entry per signature holding a list of words, in file order.
    Grouped,
}

impl From<Layout> for InsertMode {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Chained => InsertMode::PrependAlways,
            Layout::Grouped => InsertMode::Update,
        }
    }
}

/// Type in a run of letters, get back every dictionary word made of them.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Word list to load, one word per line.
    #[arg(short, long, default_value = DEFAULT_WORDS)]
    pub words: PathBuf,

    /// Number of buckets in the table.
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    #[arg(short, long, value_enum, default_value_t = Layout::Chained)]
    pub layout: Layout,

    /// Log load and search timings. Repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    pub fn mode(&self) -> InsertMode {
        self.layout.into()
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use log::LevelFilter;

    use super::{Config, Layout};
    use crate::bucket::InsertMode;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["mysterious_dictionary"]);
        assert_eq!(std::path::PathBuf::from("words.txt"), config.words);
        assert_eq!(1000, config.capacity);
        assert_eq!(Layout::Chained, config.layout);
        assert_eq!(InsertMode::PrependAlways, config.mode());
        assert_eq!(LevelFilter::Warn, config.log_level());
    }

    #[test]
    fn test_flags() {
        let config = Config::parse_from([
            "mysterious_dictionary",
            "--words",
            "/usr/share/dict/words",
            "-c",
            "250",
            "--layout",
            "grouped",
            "-vv",
        ]);
        assert_eq!(250, config.capacity);
        assert_eq!(InsertMode::Update, config.mode());
        assert_eq!(LevelFilter::Debug, config.log_level());
    }

    #[test]
    fn test_bad_capacity_rejected() {
        assert!(Config::try_parse_from(["mysterious_dictionary", "-c", "lots"]).is_err());
        assert!(Config::try_parse_from(["mysterious_dictionary", "-c", "-3"]).is_err());
    }
}
