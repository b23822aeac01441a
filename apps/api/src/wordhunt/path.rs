//! Word-path validation on a letter grid.
//!
//! A word is on the board when its letters can be traced through
//! 8-directionally adjacent cells without reusing a cell. Search is a
//! depth-first backtrack from every cell matching the first letter and stops
//! at the first complete path. Grids are at most 6×6, so the exponential
//! worst case stays small.

use crate::wordhunt::grid::Grid;

const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Returns true if `word` (compared uppercase) can be traced on `grid`.
/// The empty word is never on the board.
pub fn exists(word: &str, grid: &Grid) -> bool {
    let letters: Vec<char> = word.to_uppercase().chars().collect();
    let Some(&first) = letters.first() else {
        return false;
    };

    let n = grid.size() as isize;
    for row in 0..n {
        for col in 0..n {
            if grid.get(row, col) != Some(first) {
                continue;
            }
            // Occupancy belongs to this attempt only.
            let mut search = PathSearch::new(grid, &letters);
            if search.extend(0, row, col) {
                return true;
            }
        }
    }
    false
}

struct PathSearch<'a> {
    grid: &'a Grid,
    letters: &'a [char],
    occupied: Vec<bool>,
}

impl<'a> PathSearch<'a> {
    fn new(grid: &'a Grid, letters: &'a [char]) -> Self {
        let n = grid.size();
        Self {
            grid,
            letters,
            occupied: vec![false; n * n],
        }
    }

    fn index(&self, row: isize, col: isize) -> usize {
        row as usize * self.grid.size() + col as usize
    }

    /// `(row, col)` already holds `letters[idx]`; try to finish the word from it.
    fn extend(&mut self, idx: usize, row: isize, col: isize) -> bool {
        // The last letter (and so a one-letter word) is accepted as soon as its
        // cell matches, without looking at neighbours.
        if idx + 1 == self.letters.len() {
            return true;
        }

        let here = self.index(row, col);
        self.occupied[here] = true;

        let next = self.letters[idx + 1];
        for (dr, dc) in NEIGHBOURS {
            let (r, c) = (row + dr, col + dc);
            if self.grid.get(r, c) != Some(next) || self.occupied[self.index(r, c)] {
                continue;
            }
            if self.extend(idx + 1, r, c) {
                self.occupied[here] = false;
                return true;
            }
        }

        self.occupied[here] = false;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordhunt::grid::generate;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_cat_on_two_by_two() {
        let g = grid(&["AT", "CT"]);
        assert!(exists("CAT", &g));
        assert!(exists("cat", &g));
        assert!(exists("TACT", &g));
    }

    #[test]
    fn test_rejects_repeated_cell() {
        let g = grid(&["AT", "CT"]);
        assert!(!exists("CAC", &g));
        assert!(!exists("ATA", &g));
        assert!(!exists("CATTC", &g));
    }

    #[test]
    fn test_rejects_missing_letters() {
        let g = grid(&["AT", "CT"]);
        assert!(!exists("DOG", &g));
        assert!(!exists("CAZ", &g));
    }

    #[test]
    fn test_rejects_non_adjacent_cells() {
        let g = grid(&["ABC", "DEF", "GHI"]);
        assert!(exists("AEI", &g));
        assert!(exists("CEG", &g));
        assert!(!exists("ACB", &g));
        assert!(!exists("AI", &g));
    }

    #[test]
    fn test_backtracks_out_of_dead_ends() {
        // First E reached from S leads nowhere; the path must retry via the other E.
        let g = grid(&["SEX", "EXX", "ATX"]);
        assert!(exists("SEAT", &g));
    }

    #[test]
    fn test_single_letter_accepted_when_cell_matches() {
        let g = grid(&["AT", "CT"]);
        assert!(exists("A", &g));
        assert!(!exists("Z", &g));
    }

    #[test]
    fn test_empty_word_rejected() {
        assert!(!exists("", &grid(&["AT", "CT"])));
    }

    #[test]
    fn test_words_on_reference_grid() {
        // UEBE / WERQ / DNYD / NOYY
        let g = generate(20_240_115, 4);
        for word in ["BEE", "NODE", "BREW", "ONE", "DEN", "BEER", "REDO", "WEB"] {
            assert!(exists(word, &g), "{word} should be on the board");
        }
        for word in ["CAT", "NOON", "ROBE", "EYED", "BEEB"] {
            assert!(!exists(word, &g), "{word} should not be on the board");
        }
    }
}
