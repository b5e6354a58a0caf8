pub mod constants;
pub mod models;

use common_words::{identify_common_words, NumWords, Word};
use constants::{EXPECTED_WORDS_DELIMITER, INLINE_CASES_CSV_PATH, TEST_FILES_DIRECTORY};
use csv::Reader;
use models::EvaluationResult;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

const EXPECTED_PREFIX: &str = "EXPECTED:";
const NUM_WORDS_PREFIX: &str = "NUM_WORDS:";
const COMMENT_PREFIX: &str = "COMMENT:";

/// A document paired with the ranking it must produce.
#[derive(Debug)]
pub struct InlineCase {
    pub name: String,
    pub text: String,
    pub num_words: NumWords,
    pub expected: Vec<Word>,
}

/// Loads the inline cases listed in the CSV manifest.
///
/// Columns: `name,num_words,expected,text`, where `expected` is a `|`-separated list.
pub fn load_inline_cases() -> Result<Vec<InlineCase>, Box<dyn Error>> {
    load_inline_cases_from_file(&INLINE_CASES_CSV_PATH)
}

pub fn load_inline_cases_from_file(file_path: &Path) -> Result<Vec<InlineCase>, Box<dyn Error>> {
    let mut cases = Vec::new();
    let mut reader = Reader::from_path(file_path)?;

    for record in reader.records() {
        let record = record?;
        if record.len() != 4 {
            eprintln!("Skipping invalid row: {:?}", record);
            continue;
        }

        let expected = record[2]
            .split(EXPECTED_WORDS_DELIMITER)
            .filter(|word| !word.is_empty())
            .map(|word| word.to_string())
            .collect();

        cases.push(InlineCase {
            name: record[0].to_string(),
            num_words: record[1].trim().parse()?,
            expected,
            text: record[3].to_string(),
        });
    }

    Ok(cases)
}

/// Lists every `.txt` fixture in the test files directory, sorted by path.
pub fn list_test_files() -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = fs::read_dir(&*TEST_FILES_DIRECTORY)
        .expect("Failed to read test files directory")
        .map(|entry| entry.expect("Failed to read file").path())
        .filter(|path| path.is_file() && path.extension().map_or(false, |ext| ext == "txt"))
        .collect();

    files.sort();
    files
}

// Helper function to get the expected words, in ranked order, from the text file
pub fn get_expected_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            line.strip_prefix(EXPECTED_PREFIX)
                .map(|word| word.trim().to_string())
        })
        .collect()
}

// Helper function to get the requested word count from the text file
pub fn get_num_words(content: &str) -> Option<NumWords> {
    content.lines().find_map(|line| {
        line.trim()
            .strip_prefix(NUM_WORDS_PREFIX)
            .and_then(|value| value.trim().parse().ok())
    })
}

/// Strips the header lines, leaving only the document.
pub fn get_document_text(content: &str) -> String {
    content
        .lines()
        .filter(|line| {
            let line = line.trim_start();
            !line.starts_with(EXPECTED_PREFIX)
                && !line.starts_with(NUM_WORDS_PREFIX)
                && !line.starts_with(COMMENT_PREFIX)
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Runs a fixture file and returns how it compares to its expectations.
pub fn run_test_for_file(test_file_path: &Path, use_assertions: bool) -> EvaluationResult {
    let content = fs::read_to_string(test_file_path).expect("Failed to read test file");

    let num_words = get_num_words(&content).unwrap_or_else(|| {
        panic!(
            "{} - Missing `{}` line",
            test_file_path.display(),
            NUM_WORDS_PREFIX
        )
    });
    let expected_words = get_expected_words(&content);
    let document_text = get_document_text(&content);

    eprintln!("Testing file: {}", test_file_path.display());

    let results = identify_common_words(document_text.as_str(), num_words)
        .expect("Failed to identify common words");

    let evaluation_result = EvaluationResult::new(&expected_words, &results);

    if use_assertions {
        assert!(
            evaluation_result.is_match(),
            "{} - {} Expected: {:?}, but got: {:?}",
            test_file_path.display(),
            evaluation_result.failure_reason().unwrap_or_default(),
            expected_words,
            results
        );
    }

    evaluation_result
}
