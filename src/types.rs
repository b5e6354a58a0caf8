// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a word as an owned `String`, spelled as it was first seen in the document.
pub type Word = String;

/// Represents a borrowed view of a word as a `str`. Words yielded by the tokenizer borrow
/// directly from the document text.
pub type WordRef = str;

/// The case-normalized form of a word, used to aggregate occurrences case-insensitively.
pub type WordKey = String;

/// Represents the total number of occurrences of a word within a text document.
pub type WordFrequency = usize;

/// The number of words requested by a caller. Signed so that non-positive requests can be
/// represented and rejected.
pub type NumWords = isize;

/// An inclusive range of code points, stored as `(start, end)`.
pub type CodePointRange = (char, char);
