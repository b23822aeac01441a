//! Word-membership lookup used to filter submissions.
//!
//! Held by the ledger as `Arc<dyn Dictionary>`, so a larger list can be
//! loaded from `WORD_LIST_PATH` without touching the validator.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

/// Read-only word membership. Lookups take the uppercase word.
pub trait Dictionary: Send + Sync {
    fn contains(&self, word: &str) -> bool;

    fn len(&self) -> usize;
}

/// Built-in demo list. Replace with a real word list via `WORD_LIST_PATH`.
pub const DEMO_WORDS: &[&str] = &[
    "CAT", "DOG", "TREE", "READ", "WORD", "HUNT", "GAME", "SCORE", "GRID", "JAVA", "CODE",
    "MONGO", "SPRING", "BEAN", "USER", "ROLE", "WAVE", "TONE", "STONE", "NOTE", "HONEY", "RING",
    "RANGE", "RANGER", "MEAN", "MEANT", "GO", "GOAL", "GOALS", "TEA", "EAT", "ATE", "RATE",
    "RATED", "RATES", "STAR", "START", "STARTS", "TAR", "ART",
];

/// In-memory set of uppercase words.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    pub fn demo() -> Self {
        Self::new(DEMO_WORDS.iter().copied())
    }

    /// Parses one word per line. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?;
        Ok(Self::parse(&text))
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_demo_list() {
        let dict = WordList::demo();
        assert_eq!(dict.len(), 40);
        assert!(dict.contains("STONE"));
        assert!(!dict.contains("stone"));
        assert!(!dict.contains("ZEBRA"));
    }

    #[test]
    fn test_parse_normalizes_and_skips_comments() {
        let dict = WordList::parse("# header\n  bee \n\nNode\nbee\n");
        assert_eq!(dict.len(), 2);
        assert!(dict.contains("BEE"));
        assert!(dict.contains("NODE"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "brew\nweb").unwrap();
        let dict = WordList::from_file(file.path()).unwrap();
        assert!(dict.contains("BREW"));
        assert!(dict.contains("WEB"));
    }

    #[test]
    fn test_from_missing_file_errors() {
        let err = WordList::from_file("/definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("failed to read word list"));
    }
}
