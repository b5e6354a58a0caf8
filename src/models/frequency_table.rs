use crate::models::WordFrequencyPair;
use crate::types::{Word, WordFrequency, WordKey, WordRef};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
    /// Spelling of the word's first occurrence.
    pub word: Word,
    pub frequency: WordFrequency,
}

/// Case-insensitive word counts, kept in the order the words were discovered.
///
/// The sum of all entry frequencies always equals `total_occurrences`.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    index: HashMap<WordKey, usize>,
    entries: Vec<FrequencyEntry>,
    total_occurrences: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes a word into the key used for case-insensitive aggregation.
    pub fn word_key(word: &WordRef) -> WordKey {
        word.to_lowercase()
    }

    /// Records one occurrence of `word`.
    pub fn add_word(&mut self, word: &WordRef) {
        let key = Self::word_key(word);

        match self.index.get(&key) {
            Some(&entry_idx) => self.entries[entry_idx].frequency += 1,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(FrequencyEntry {
                    word: word.to_string(),
                    frequency: 1,
                });
            }
        }

        self.total_occurrences += 1;
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of words seen, repeats included.
    pub fn total_occurrences(&self) -> usize {
        self.total_occurrences
    }

    /// Case-insensitive lookup of a word's frequency.
    pub fn frequency_of(&self, word: &WordRef) -> Option<WordFrequency> {
        self.index
            .get(&Self::word_key(word))
            .map(|&entry_idx| self.entries[entry_idx].frequency)
    }

    /// Entries in discovery order.
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    pub fn into_word_frequency_pairs(self) -> Vec<WordFrequencyPair> {
        self.entries
            .into_iter()
            .map(|entry| WordFrequencyPair::new(entry.word, entry.frequency))
            .collect()
    }
}

