use crate::config::DEFAULT_WORD_COUNTER_CONFIG;
use crate::models::{FrequencyTable, WordCounterConfig};
use crate::types::WordRef;
use crate::utils::{
    is_letter, is_single_character_word, is_word_joiner, is_word_middle_character,
};
use log::{debug, trace};

/// Segments a document into words in a single forward pass.
///
/// A word starts on a letter, may continue through letters and word joiners (apostrophes
/// and hyphens by default), and always ends on a letter: trailing joiners are trimmed.
/// Every other character is a boundary. Letters configured as single-character words
/// (CJK ideographs by default) close any open word and are emitted on their own.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    config: &'a WordCounterConfig,
}

impl Tokenizer<'static> {
    /// Tokenizer using the default character policy.
    pub fn default_word_parser() -> Self {
        Self::new(DEFAULT_WORD_COUNTER_CONFIG)
    }
}

impl<'a> Tokenizer<'a> {
    pub fn new(config: &'a WordCounterConfig) -> Self {
        Self { config }
    }

    /// Calls `on_word` for every word in `text`, in document order.
    ///
    /// Yielded words borrow from `text` and retain their original casing.
    pub fn for_each_word<'t, F>(&self, text: &'t WordRef, mut on_word: F)
    where
        F: FnMut(&'t WordRef),
    {
        // Byte offset of the open word's first character
        let mut word_start: Option<usize> = None;

        for (idx, c) in text.char_indices() {
            let is_single_char_word = is_single_character_word(c, self.config);

            match word_start {
                None => {
                    if is_letter(c) && !is_single_char_word {
                        word_start = Some(idx);
                    }
                }
                Some(start) => {
                    if is_single_char_word || !is_word_middle_character(c, self.config) {
                        on_word(self.close_word(&text[start..idx]));
                        word_start = None;
                    }
                }
            }

            if is_single_char_word {
                on_word(&text[idx..idx + c.len_utf8()]);
            }
        }

        if let Some(start) = word_start {
            on_word(self.close_word(&text[start..]));
        }
    }

    /// Collects every word occurrence in `text`.
    pub fn tokenize<'t>(&self, text: &'t WordRef) -> Vec<&'t WordRef> {
        let mut words = Vec::new();
        self.for_each_word(text, |word| words.push(word));
        words
    }

    /// Counts word occurrences in `text`, case-insensitively.
    pub fn aggregate(&self, text: &WordRef) -> FrequencyTable {
        let mut frequency_table = FrequencyTable::new();

        self.for_each_word(text, |word| {
            trace!("Word: {}", word);
            frequency_table.add_word(word);
        });

        debug!(
            "Aggregated {} distinct words from {} occurrences",
            frequency_table.len(),
            frequency_table.total_occurrences()
        );

        frequency_table
    }

    /// Trims trailing word joiners from a candidate word.
    ///
    /// Candidates always begin with a letter, so the result is never empty.
    fn close_word<'t>(&self, candidate: &'t WordRef) -> &'t WordRef {
        candidate.trim_end_matches(|c: char| is_word_joiner(c, self.config))
    }
}
