use common_words::{Tokenizer, WordCounterConfig};

#[cfg(test)]
mod tokenizer_tests {
    use super::*;

    #[test]
    fn test_tokenize_with_single_spaces() {
        let tokenizer = Tokenizer::default_word_parser();

        let tokens = tokenizer.tokenize("This is a test string");
        assert_eq!(tokens, vec!["This", "is", "a", "test", "string"]);
    }

    #[test]
    fn test_tokenize_with_tabs_and_line_breaks() {
        let tokenizer = Tokenizer::default_word_parser();

        let tokens = tokenizer.tokenize("This\tis\r\na\ntest");
        assert_eq!(tokens, vec!["This", "is", "a", "test"]);
    }

    #[test]
    fn test_tokenize_keeps_inner_joiners() {
        let tokenizer = Tokenizer::default_word_parser();

        let tokens = tokenizer.tokenize("cul-de-sac don't rock'n'roll");
        assert_eq!(tokens, vec!["cul-de-sac", "don't", "rock'n'roll"]);
    }

    #[test]
    fn test_tokenize_trims_trailing_joiners() {
        let tokenizer = Tokenizer::default_word_parser();

        let tokens = tokenizer.tokenize("childrens' well-- ok'-' end'");
        assert_eq!(tokens, vec!["childrens", "well", "ok", "end"]);
    }

    #[test]
    fn test_tokenize_ignores_leading_joiners() {
        let tokenizer = Tokenizer::default_word_parser();

        let tokens = tokenizer.tokenize("'tis -dash '-'");
        assert_eq!(tokens, vec!["tis", "dash"]);
    }

    #[test]
    fn test_tokenize_lone_joiner_at_document_start() {
        let tokenizer = Tokenizer::default_word_parser();

        assert!(tokenizer.tokenize("'").is_empty());
        assert!(tokenizer.tokenize("-").is_empty());
    }

    #[test]
    fn test_tokenize_digits_and_symbols_are_boundaries() {
        let tokenizer = Tokenizer::default_word_parser();

        let tokens = tokenizer.tokenize("abc123def ghi¾jkl mno_pqr stu.vwx");
        assert_eq!(
            tokens,
            vec!["abc", "def", "ghi", "jkl", "mno", "pqr", "stu", "vwx"]
        );
    }

    #[test]
    fn test_tokenize_modifier_letters_are_boundaries() {
        let tokenizer = Tokenizer::default_word_parser();

        // U+02B0 MODIFIER LETTER SMALL H (Lm)
        let tokens = tokenizer.tokenize("k\u{02B0}at");
        assert_eq!(tokens, vec!["k", "at"]);
    }

    #[test]
    fn test_tokenize_ideographs_as_single_character_words() {
        let tokenizer = Tokenizer::default_word_parser();

        let tokens = tokenizer.tokenize("北京是中国的首都");
        assert_eq!(tokens, vec!["北", "京", "是", "中", "国", "的", "首", "都"]);
    }

    #[test]
    fn test_tokenize_ideograph_closes_open_word() {
        let tokenizer = Tokenizer::default_word_parser();

        let tokens = tokenizer.tokenize("abc中def");
        assert_eq!(tokens, vec!["abc", "中", "def"]);

        let tokens = tokenizer.tokenize("it's'中");
        assert_eq!(tokens, vec!["it's", "中"]);
    }

    #[test]
    fn test_tokenize_kana_runs_form_words() {
        let tokenizer = Tokenizer::default_word_parser();

        let tokens = tokenizer.tokenize("蜂蜜とはミツバチが花");
        assert_eq!(tokens, vec!["蜂", "蜜", "とはミツバチが", "花"]);
    }

    #[test]
    fn test_tokenize_preserves_case() {
        let tokenizer = Tokenizer::default_word_parser();

        let tokens = tokenizer.tokenize("Maître MAÎTRE maître");
        assert_eq!(tokens, vec!["Maître", "MAÎTRE", "maître"]);
    }

    #[test]
    fn test_tokenize_empty_text() {
        let tokenizer = Tokenizer::default_word_parser();

        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("   \n\t").is_empty());
    }

    #[test]
    fn test_aggregate_counts_every_occurrence() {
        let tokenizer = Tokenizer::default_word_parser();

        let frequency_table = tokenizer.aggregate("The cat saw the other cat. 猫 猫");

        assert_eq!(frequency_table.total_occurrences(), 8);
        assert_eq!(frequency_table.len(), 5);
        assert_eq!(frequency_table.frequency_of("the"), Some(2));
        assert_eq!(frequency_table.frequency_of("cat"), Some(2));
        assert_eq!(frequency_table.frequency_of("猫"), Some(2));
        assert_eq!(frequency_table.entries()[0].word, "The");
    }

    #[test]
    fn test_custom_word_joiners() {
        static UNDERSCORE_CONFIG: WordCounterConfig = WordCounterConfig {
            word_joiners: &['_'],
            single_character_word_ranges: &[],
        };
        let tokenizer = Tokenizer::new(&UNDERSCORE_CONFIG);

        let tokens = tokenizer.tokenize("snake_case kebab-case trailing_");
        assert_eq!(tokens, vec!["snake_case", "kebab", "case", "trailing"]);
    }

    #[test]
    fn test_custom_single_character_word_ranges() {
        // Hangul syllables
        static HANGUL_CONFIG: WordCounterConfig = WordCounterConfig {
            word_joiners: &['\'', '-'],
            single_character_word_ranges: &[('\u{AC00}', '\u{D7A3}')],
        };
        let tokenizer = Tokenizer::new(&HANGUL_CONFIG);

        let tokens = tokenizer.tokenize("한국어 中文");
        assert_eq!(tokens, vec!["한", "국", "어", "中文"]);
    }
}
