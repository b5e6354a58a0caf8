use crate::constants::{SINGLE_CHARACTER_WORD_RANGES, WORD_JOINERS};
use crate::models::WordCounterConfig;

pub const DEFAULT_WORD_COUNTER_CONFIG: &WordCounterConfig = &WordCounterConfig {
    word_joiners: WORD_JOINERS,
    single_character_word_ranges: SINGLE_CHARACTER_WORD_RANGES,
};
