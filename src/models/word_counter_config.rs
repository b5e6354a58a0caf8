use crate::types::CodePointRange;

/// Character policy used when segmenting a document into words.
///
/// Letters (Unicode general categories Lu, Ll, Lt and Lo) are always word characters and are
/// not configurable.
#[derive(Debug, Clone, Copy)]
pub struct WordCounterConfig {
    /// Non-letter characters which may appear inside a word, but never start or end one.
    pub word_joiners: &'static [char],
    /// Inclusive code point ranges whose letters are each counted as a complete word.
    pub single_character_word_ranges: &'static [CodePointRange],
}
