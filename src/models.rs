pub mod error;
pub use error::Error;

pub mod frequency_ranker;
pub use frequency_ranker::FrequencyRanker;

pub mod frequency_table;
pub use frequency_table::{FrequencyEntry, FrequencyTable};

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod word_counter_config;
pub use word_counter_config::WordCounterConfig;

pub mod word_frequency_pair;
pub use word_frequency_pair::WordFrequencyPair;
