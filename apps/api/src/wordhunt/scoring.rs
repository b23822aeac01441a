/// Points awarded for a word, by length:
/// ≤2 → 0, 3–4 → 1, 5 → 2, 6 → 3, 7 → 5, ≥8 → 11.
pub fn score_word(word: &str) -> u32 {
    match word.chars().count() {
        0..=2 => 0,
        3 | 4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}

/// Sum of `score_word` over `words`.
pub fn total_score<S: AsRef<str>>(words: &[S]) -> u32 {
    words.iter().map(|w| score_word(w.as_ref())).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_table() {
        let expected = [(1, 0), (2, 0), (3, 1), (4, 1), (5, 2), (6, 3), (7, 5), (8, 11), (9, 11), (15, 11)];
        for (len, points) in expected {
            let word = "A".repeat(len);
            assert_eq!(score_word(&word), points, "length {len}");
        }
    }

    #[test]
    fn test_empty_word_scores_zero() {
        assert_eq!(score_word(""), 0);
    }

    #[test]
    fn test_total_score() {
        assert_eq!(total_score(&["CAT", "STONE", "RANGER", "STARTED"]), 1 + 2 + 3 + 5);
        assert_eq!(total_score::<&str>(&[]), 0);
    }
}
