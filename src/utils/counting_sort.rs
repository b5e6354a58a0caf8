use crate::models::WordFrequencyPair;
use log::debug;

/// Stable counting sort of word/frequency pairs, ascending by frequency.
///
/// Runs in `O(n + k)` where `n` is the number of pairs and `k` is `max_frequency`. Pairs with
/// equal frequencies keep their input order.
///
/// # Panics
/// If any pair's frequency exceeds `max_frequency`. The frequency table guarantees this
/// cannot happen when `max_frequency` is its total occurrence count.
pub fn counting_sort(
    pairs: Vec<WordFrequencyPair>,
    max_frequency: usize,
) -> Vec<WordFrequencyPair> {
    debug_assert!(pairs.iter().all(|pair| pair.frequency <= max_frequency));

    // Histogram of frequencies
    let mut positions = vec![0usize; max_frequency + 1];
    for pair in &pairs {
        positions[pair.frequency] += 1;
    }

    // Convert to the first output index of each frequency
    let mut total = 0;
    for position in positions.iter_mut() {
        let frequency_count = *position;
        *position = total;
        total += frequency_count;
    }

    debug!(
        "Counting sort: {} pairs over {} histogram slots",
        pairs.len(),
        positions.len()
    );

    let mut output: Vec<Option<WordFrequencyPair>> = vec![None; pairs.len()];
    for pair in pairs {
        let position = &mut positions[pair.frequency];
        output[*position] = Some(pair);
        *position += 1;
    }

    output.into_iter().flatten().collect()
}
