use serde::{Serialize, Serializer};

use crate::wordhunt::rng::SeededRng;

pub const DEFAULT_GRID_SIZE: usize = 4;
pub const MIN_GRID_SIZE: usize = 3;
pub const MAX_GRID_SIZE: usize = 6;

/// Frequency-weighted letter pool (99 entries). Vowels and common consonants
/// are repeated so that grids contain playable words. Part of the persisted
/// grid contract together with `SeededRng`: never reorder or edit.
pub const ALPHABET: &[u8; 99] =
    b"EEEEEEEEEEEEAAAAAAAAAIIIIIIIIIIOOOOOOOOONNNNNNRRRRRRTTTTTLLLLSSSSUUUUDDDDGGGBBCCMMPPFFHHVVWWYYKJXQZ";

/// Square board of uppercase letters. Derived from (seed, size), never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Builds a hand-made grid from row strings. Rows are uppercased.
    /// Returns `None` unless the rows form a non-empty square.
    #[cfg(test)]
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        let rows: Vec<Vec<char>> = rows
            .iter()
            .map(|r| r.as_ref().to_uppercase().chars().collect())
            .collect();
        let n = rows.len();
        if n == 0 || rows.iter().any(|r| r.len() != n) {
            return None;
        }
        Some(Self { rows })
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Letter at (row, col), or `None` outside the board.
    pub fn get(&self, row: isize, col: isize) -> Option<char> {
        if row < 0 || col < 0 {
            return None;
        }
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|r| r.iter().collect())
    }
}

/// Rows serialize as strings, e.g. `["UEBE","WERQ","DNYD","NOYY"]`.
impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

/// Clamps a requested board size into `[MIN_GRID_SIZE, MAX_GRID_SIZE]`,
/// defaulting to `DEFAULT_GRID_SIZE`. Never fails.
pub fn clamp_size(requested: Option<i64>) -> usize {
    match requested {
        None => DEFAULT_GRID_SIZE,
        Some(n) => n.clamp(MIN_GRID_SIZE as i64, MAX_GRID_SIZE as i64) as usize,
    }
}

/// Generates the board for `seed`. Cells are filled row-major with one
/// `next_int(99)` draw each, indexing into `ALPHABET`.
pub fn generate(seed: i64, size: usize) -> Grid {
    let size = size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
    let mut rng = SeededRng::new(seed);
    let rows = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| ALPHABET[rng.next_int(ALPHABET.len() as u32) as usize] as char)
                .collect()
        })
        .collect();
    Grid { rows }
}
