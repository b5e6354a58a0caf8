use crate::types::CodePointRange;

/// Characters allowed inside a word (possessives, contractions and hyphenated words) but
/// never at its start or end.
pub const WORD_JOINERS: &[char] = &['\'', '-'];

/// Common Japanese Kanji.
pub const KANJI_RANGE: CodePointRange = ('\u{4E00}', '\u{9FBF}');

/// CJK Unified Ideographs. Subsumes `KANJI_RANGE`.
pub const CJK_UNIFIED_IDEOGRAPHS_RANGE: CodePointRange = ('\u{4E00}', '\u{9FFF}');

/// Letters in these ranges are always counted as complete one-character words.
pub const SINGLE_CHARACTER_WORD_RANGES: &[CodePointRange] =
    &[KANJI_RANGE, CJK_UNIFIED_IDEOGRAPHS_RANGE];
