use crate::types::{Word, WordFrequency};

/// A word tagged with the number of times it occurred. The frequency is the key the
/// counting sort routes on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFrequencyPair {
    pub frequency: WordFrequency,
    pub word: Word,
}

impl WordFrequencyPair {
    pub fn new(word: Word, frequency: WordFrequency) -> Self {
        WordFrequencyPair { frequency, word }
    }
}

impl From<WordFrequencyPair> for (Word, WordFrequency) {
    fn from(pair: WordFrequencyPair) -> Self {
        (pair.word, pair.frequency)
    }
}
