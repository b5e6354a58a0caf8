use common_words::FrequencyTable;

#[cfg(test)]
mod frequency_table_tests {
    use super::*;

    #[test]
    fn test_add_word_is_case_insensitive() {
        let mut frequency_table = FrequencyTable::new();
        frequency_table.add_word("Maître");
        frequency_table.add_word("maître");
        frequency_table.add_word("MAÎTRE");

        assert_eq!(frequency_table.len(), 1);
        assert_eq!(frequency_table.total_occurrences(), 3);
        assert_eq!(frequency_table.frequency_of("maîTRE"), Some(3));
        assert_eq!(frequency_table.entries()[0].word, "Maître");
    }

    #[test]
    fn test_entries_keep_discovery_order() {
        let mut frequency_table = FrequencyTable::new();
        for word in ["b", "a", "c", "a", "b", "d"] {
            frequency_table.add_word(word);
        }

        let words: Vec<&str> = frequency_table
            .entries()
            .iter()
            .map(|entry| entry.word.as_str())
            .collect();
        assert_eq!(words, vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_total_occurrences_matches_frequency_sum() {
        let mut frequency_table = FrequencyTable::new();
        for word in "one two two three three three Two".split(' ') {
            frequency_table.add_word(word);
        }

        let sum: usize = frequency_table
            .entries()
            .iter()
            .map(|entry| entry.frequency)
            .sum();
        assert_eq!(sum, frequency_table.total_occurrences());
        assert!(frequency_table
            .entries()
            .iter()
            .all(|entry| entry.frequency >= 1
                && entry.frequency <= frequency_table.total_occurrences()));
        assert_eq!(frequency_table.frequency_of("two"), Some(3));
        assert_eq!(frequency_table.frequency_of("four"), None);
    }

    #[test]
    fn test_empty_table() {
        let frequency_table = FrequencyTable::new();

        assert!(frequency_table.is_empty());
        assert_eq!(frequency_table.total_occurrences(), 0);
        assert!(frequency_table.into_word_frequency_pairs().is_empty());
    }
}
