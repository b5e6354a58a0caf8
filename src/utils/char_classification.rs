use crate::models::WordCounterConfig;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Returns `true` for characters in the Lu, Ll, Lt or Lo general categories.
///
/// Modifier letters (Lm), combining marks and letter-like numbers are not letters here, so
/// this is narrower than `char::is_alphabetic`.
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::LowercaseLetter
            | GeneralCategory::UppercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::OtherLetter
    )
}

pub fn is_word_joiner(c: char, config: &WordCounterConfig) -> bool {
    config.word_joiners.contains(&c)
}

/// Characters which may appear inside a word: letters and word joiners.
pub fn is_word_middle_character(c: char, config: &WordCounterConfig) -> bool {
    is_letter(c) || is_word_joiner(c, config)
}

/// Letters which always form a complete word by themselves (e.g. CJK ideographs).
pub fn is_single_character_word(c: char, config: &WordCounterConfig) -> bool {
    is_letter(c)
        && config
            .single_character_word_ranges
            .iter()
            .any(|&(start, end)| (start..=end).contains(&c))
}
