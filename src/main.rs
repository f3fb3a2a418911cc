use std::io;
use std::process;

use clap::Parser;
use mysterious_dictionary::{initialize_logger, repl, Config, Dictionary};

fn main() {
    let config = Config::parse();
    initialize_logger(config.log_level());

    println!("Welcome to mysterious_dictionary.");
    println!("Type in a continuous string of characters to find like words:");

    let dictionary = match Dictionary::open(&config.words, config.mode(), config.capacity) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    if let Err(e) = repl::run(&dictionary, stdin.lock(), io::stdout()) {
        eprintln!("{}", e);
        process::exit(1);
    }
}
