use common_words::{identify_common_words_with_frequencies, write_frequencies_csv, NumWords};
use log::{error, info};
use std::io::{self, Read};

const DEFAULT_NUM_WORDS: NumWords = 10;

fn main() {
    // Initialize the logger
    env_logger::init();

    let mut num_words = DEFAULT_NUM_WORDS;
    let mut as_csv = false;

    for arg in std::env::args().skip(1) {
        if arg == "--csv" {
            as_csv = true;
            continue;
        }

        match arg.parse::<NumWords>() {
            Ok(value) => num_words = value,
            Err(e) => {
                error!("Invalid word count `{}`: {}", arg, e);
                eprintln!("Usage: common-words-cli [NUM_WORDS] [--csv] < document.txt");
                std::process::exit(2);
            }
        }
    }

    // Read the document from stdin
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    info!("Read {} bytes from stdin", input.len());

    match identify_common_words_with_frequencies(input.as_str(), num_words) {
        Ok(results) => {
            if as_csv {
                if let Err(e) = write_frequencies_csv(io::stdout().lock(), &results) {
                    error!("Failed to write CSV output: {}", e);
                    std::process::exit(1);
                }
            } else {
                for (word, _frequency) in results {
                    println!("{}", word);
                }
            }
        }
        Err(e) => {
            error!("Error identifying common words: {}", e);
            std::process::exit(1);
        }
    }
}
