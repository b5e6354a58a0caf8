use common_words::Word;

/// Comparison of a ranked word list against the expected ranking.
pub struct EvaluationResult {
    pub expected: Vec<Word>,
    pub results: Vec<Word>,
    pub missing: Vec<Word>,
    pub unexpected: Vec<Word>,
    /// Index of the first position where both lists disagree, if any.
    pub first_mismatch_idx: Option<usize>,
}

impl EvaluationResult {
    pub fn new(expected: &[Word], results: &[Word]) -> Self {
        let missing: Vec<Word> = expected
            .iter()
            .filter(|word| !results.contains(word))
            .cloned()
            .collect();
        let unexpected: Vec<Word> = results
            .iter()
            .filter(|word| !expected.contains(word))
            .cloned()
            .collect();

        let first_mismatch_idx = (0..expected.len().max(results.len()))
            .find(|&idx| expected.get(idx) != results.get(idx));

        Self {
            expected: expected.to_vec(),
            results: results.to_vec(),
            missing,
            unexpected,
            first_mismatch_idx,
        }
    }

    pub fn is_match(&self) -> bool {
        self.first_mismatch_idx.is_none()
    }

    /// Human readable explanation of the first discrepancy.
    pub fn failure_reason(&self) -> Option<String> {
        let idx = self.first_mismatch_idx?;

        let reason = if !self.missing.is_empty() {
            format!("Missing expected words: {:?}.", self.missing)
        } else if !self.unexpected.is_empty() {
            format!("Unexpected words found: {:?}.", self.unexpected)
        } else {
            format!(
                "Order mismatch at position {}: expected {:?}, got {:?}.",
                idx,
                self.expected.get(idx),
                self.results.get(idx)
            )
        };

        Some(reason)
    }
}
