pub mod char_classification;
pub mod counting_sort;
pub mod write_frequencies_csv;

pub use char_classification::{
    is_letter, is_single_character_word, is_word_joiner, is_word_middle_character,
};
pub use counting_sort::counting_sort;
pub use write_frequencies_csv::write_frequencies_csv;
