use crate::models::{FrequencyTable, WordFrequencyPair};
use crate::utils::counting_sort;
use log::debug;

/// Orders the words of a frequency table from most to least frequent.
pub struct FrequencyRanker;

impl FrequencyRanker {
    /// Returns at most `num_words` pairs, most frequent first.
    ///
    /// Pairs are counting-sorted ascending by frequency (stable with respect to discovery
    /// order) and then reversed, so among words of equal frequency the word discovered
    /// later in the document comes first.
    pub fn rank(frequency_table: FrequencyTable, num_words: usize) -> Vec<WordFrequencyPair> {
        let total_occurrences = frequency_table.total_occurrences();
        let pairs = frequency_table.into_word_frequency_pairs();

        debug!(
            "Ranking {} distinct words (total occurrences: {})",
            pairs.len(),
            total_occurrences
        );

        let ranked: Vec<WordFrequencyPair> = counting_sort(pairs, total_occurrences)
            .into_iter()
            .rev()
            .take(num_words)
            .collect();

        debug!("Ranked {} words", ranked.len());

        ranked
    }
}
