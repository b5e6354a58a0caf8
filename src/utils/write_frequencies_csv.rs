use crate::types::{Word, WordFrequency};
use crate::Error;
use std::io::Write;

/// Writes ranked words as CSV rows with a `word,frequency` header.
///
/// # Example
/// ```
/// use common_words::write_frequencies_csv;
///
/// let mut buffer = Vec::new();
/// write_frequencies_csv(&mut buffer, &[("text".to_string(), 4), ("a".to_string(), 3)]).unwrap();
/// assert_eq!(String::from_utf8(buffer).unwrap(), "word,frequency\ntext,4\na,3\n");
/// ```
pub fn write_frequencies_csv<W: Write>(
    writer: W,
    frequencies: &[(Word, WordFrequency)],
) -> Result<(), Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["word", "frequency"])?;
    for (word, frequency) in frequencies {
        csv_writer.write_record([word.as_str(), frequency.to_string().as_str()])?;
    }
    csv_writer.flush()?;

    Ok(())
}
