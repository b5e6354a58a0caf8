#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::DEFAULT_WORD_COUNTER_CONFIG;
mod constants;
pub mod models;
pub use models::{
    Error, FrequencyEntry, FrequencyRanker, FrequencyTable, Tokenizer, WordCounterConfig,
    WordFrequencyPair,
};
pub mod types;
mod utils;
pub use types::{NumWords, Word, WordFrequency, WordKey, WordRef};
pub use utils::write_frequencies_csv;

/// Returns the `num_words` most frequent words in `text`, most frequent first.
///
/// Words are compared case-insensitively and reported with the casing of their first
/// occurrence. An absent or empty document yields an empty list.
///
/// # Errors
/// Returns `Error::InvalidArgument` if `num_words` is not positive.
///
/// # Example
/// ```
/// use common_words::identify_common_words;
///
/// let words = identify_common_words("the cat and the hat", 1).unwrap();
/// assert_eq!(words, vec!["the"]);
/// ```
pub fn identify_common_words<'a, T>(text: T, num_words: NumWords) -> Result<Vec<Word>, Error>
where
    T: Into<Option<&'a str>>,
{
    identify_common_words_with_custom_config(DEFAULT_WORD_COUNTER_CONFIG, text, num_words)
}

pub fn identify_common_words_with_custom_config<'a, T>(
    word_counter_config: &WordCounterConfig,
    text: T,
    num_words: NumWords,
) -> Result<Vec<Word>, Error>
where
    T: Into<Option<&'a str>>,
{
    let ranked = rank_words(word_counter_config, text.into(), num_words)?;

    Ok(ranked.into_iter().map(|pair| pair.word).collect())
}

/// Like `identify_common_words`, but keeps each word's frequency.
pub fn identify_common_words_with_frequencies<'a, T>(
    text: T,
    num_words: NumWords,
) -> Result<Vec<(Word, WordFrequency)>, Error>
where
    T: Into<Option<&'a str>>,
{
    let ranked = rank_words(DEFAULT_WORD_COUNTER_CONFIG, text.into(), num_words)?;

    Ok(ranked.into_iter().map(Into::into).collect())
}

fn rank_words(
    word_counter_config: &WordCounterConfig,
    text: Option<&str>,
    num_words: NumWords,
) -> Result<Vec<WordFrequencyPair>, Error> {
    let num_words = validate_num_words(num_words)?;

    let text = match text {
        Some(text) if !text.is_empty() => text,
        _ => return Ok(vec![]),
    };

    let frequency_table = Tokenizer::new(word_counter_config).aggregate(text);

    Ok(FrequencyRanker::rank(frequency_table, num_words))
}

fn validate_num_words(num_words: NumWords) -> Result<usize, Error> {
    if num_words <= 0 {
        return Err(Error::InvalidArgument(format!(
            "num_words must be a positive integer (got {})",
            num_words
        )));
    }

    Ok(num_words as usize)
}
