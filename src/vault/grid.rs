/*
 * MIT License
 *
 * Copyright (c) 2022 Joseph Sacchini
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use super::{prelude::*, daily::*, selection::*};

/// One letter tile of the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub character: char,
    pub is_selected: bool,
    /// set once the cell was part of a submitted solution word, never cleared
    pub is_locked: bool,
    pub is_unselectable: bool,
}

impl GridCell {
    fn new(character: char) -> Self {
        Self {
            character,
            is_selected: false,
            is_locked: false,
            is_unselectable: false,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectErr {
    #[error("there is no cell at row {row}, column {col}")]
    OutOfBounds { row: usize, col: usize },
    #[error("the cell at row {row}, column {col} can no longer be selected")]
    Unselectable { row: usize, col: usize },
    #[error("no selectable '{0}' left on the grid")]
    NoSuchLetter(char),
}

///
/// The letter grid together with the player's current selection.
///
/// A cell's is_selected flag and the selection list describe the same thing, so both are only
/// ever changed together, through the methods here.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [[GridCell; GRID_COLS]; GRID_ROWS],
    selection: Selection,
}

impl Grid {
    ///
    /// Lays the letters of the solution words out on the grid. The letters are concatenated in
    /// slot order, shuffled (cosmetic only, any rng will do) and placed row by row.
    ///
    /// The grid holds exactly the letters of the words: nothing is added or dropped.
    ///
    pub fn build<R>(words: &[String], rng: &mut R) -> Result<Self, PuzzleErr>
    where
        R: Rng + ?Sized,
    {
        if words.len() != NUM_SLOTS {
            return Err(PuzzleErr::NotFiveWords { found: words.len() });
        }

        let mut letters: Vec<char> = words.iter().flat_map(|w| w.chars()).collect();
        if letters.len() < GRID_CELLS {
            return Err(PuzzleErr::InsufficientLetters { found: letters.len() });
        }
        if letters.len() > GRID_CELLS {
            log::warn!("{} letters for {} cells, dropping the rest", letters.len(), GRID_CELLS);
            letters.truncate(GRID_CELLS);
        }

        letters.shuffle(rng);
        Ok(Self::with_letters(&letters))
    }

    /// Places exactly GRID_CELLS letters row by row, without shuffling
    fn with_letters(letters: &[char]) -> Self {
        debug_assert_eq!(letters.len(), GRID_CELLS);
        let mut cells = [[GridCell::new(' '); GRID_COLS]; GRID_ROWS];
        for (idx, c) in letters.iter().enumerate() {
            cells[idx / GRID_COLS][idx % GRID_COLS] = GridCell::new(*c);
        }

        Self {
            cells,
            selection: Selection::default(),
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&GridCell> {
        self.cells.get(row)?.get(col)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[GridCell; GRID_COLS]> {
        self.cells.iter()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected letters, read in the order they were picked
    pub fn selected_word(&self) -> String {
        self.selection.word()
    }

    ///
    /// Toggles the cell in and out of the selection. Returns whether the cell ended up selected.
    ///
    /// Unselectable cells are left alone and reported as an error.
    ///
    pub fn select(&mut self, row: usize, col: usize) -> Result<bool, SelectErr> {
        let cell = self.cells
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(SelectErr::OutOfBounds { row, col })?;

        if cell.is_unselectable {
            return Err(SelectErr::Unselectable { row, col });
        }

        let selected = self.selection.toggle(SelectedLetter {
            character: cell.character,
            row,
            col,
        });
        cell.is_selected = selected;
        Ok(selected)
    }

    ///
    /// Keyboard selection: picks the first cell (row by row) showing this letter which is neither
    /// selected already nor unselectable.
    ///
    pub fn select_letter(&mut self, c: char) -> Result<(usize, usize), SelectErr> {
        let found = self.cells.iter().enumerate().find_map(|(row, cells)| {
            cells.iter()
                .position(|cell| cell.character == c && !cell.is_selected && !cell.is_unselectable)
                .map(|col| (row, col))
        });

        let (row, col) = found.ok_or(SelectErr::NoSuchLetter(c))?;
        self.select(row, col)?;
        Ok((row, col))
    }

    /// Backspace: deselects the specific cell which was picked last
    pub fn deselect_last(&mut self) -> Option<SelectedLetter> {
        let last = self.selection.pop()?;
        self.cells[last.row][last.col].is_selected = false;
        Some(last)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        for cell in self.cells.iter_mut().flatten() {
            cell.is_selected = false;
        }
    }

    ///
    /// Permanently locks every selected cell (they spelled a solution word), then clears the
    /// selection. Returns how many cells were locked.
    ///
    pub fn lock_selection(&mut self) -> usize {
        let mut locked = 0;
        for letter in self.selection.iter() {
            let cell = &mut self.cells[letter.row][letter.col];
            cell.is_locked = true;
            cell.is_unselectable = true;
            locked += 1;
        }

        self.clear_selection();
        locked
    }

    /// Makes cells selectable again unless they are locked. Returns how many cells changed.
    pub fn release_unlocked(&mut self) -> usize {
        let mut released = 0;
        for cell in self.cells.iter_mut().flatten() {
            if cell.is_unselectable && !cell.is_locked {
                cell.is_unselectable = false;
                cell.is_selected = false;
                released += 1;
            }
        }
        released
    }

    pub fn num_locked(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_locked).count()
    }

    /// Every letter on the grid, sorted (handy for comparing against the solution words)
    pub fn sorted_letters(&self) -> Vec<char> {
        let mut out: Vec<char> = self.cells.iter().flatten().map(|c| c.character).collect();
        out.sort_unstable();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn solution_words() -> Vec<String> {
        words(&["APPLE", "CRANE", "SLATE", "PAPER", "GHOST"])
    }

    /// a grid with known placement: row n holds the letters of word n
    fn unshuffled() -> Grid {
        let letters: Vec<char> = solution_words().iter().flat_map(|w| w.chars()).collect();
        Grid::with_letters(&letters)
    }

    #[test]
    fn test_build_keeps_the_letter_multiset() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::build(&solution_words(), &mut rng).unwrap();

        let mut expected: Vec<char> = solution_words().concat().chars().collect();
        expected.sort_unstable();
        assert_eq!(grid.sorted_letters(), expected);
        assert!(grid.rows().flatten().all(|c| !c.is_selected && !c.is_locked && !c.is_unselectable));
    }

    #[test]
    fn test_build_errors() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            Grid::build(&words(&["APPLE", "CRANE"]), &mut rng),
            Err(PuzzleErr::NotFiveWords { found: 2 })
        );
        assert_eq!(
            Grid::build(&words(&["APPLE", "CRANE", "SLATE", "PAPER", "GHO"]), &mut rng),
            Err(PuzzleErr::InsufficientLetters { found: 23 })
        );
    }

    #[test]
    fn test_select_toggles_cell_and_selection() {
        let mut grid = unshuffled();
        assert_eq!(grid.select(0, 1), Ok(true));
        assert!(grid.cell(0, 1).unwrap().is_selected);
        assert_eq!(grid.selected_word(), "P");

        assert_eq!(grid.select(0, 1), Ok(false));
        assert!(!grid.cell(0, 1).unwrap().is_selected);
        assert!(grid.selection().is_empty());
    }

    #[test]
    fn test_select_out_of_bounds() {
        let mut grid = unshuffled();
        assert_eq!(grid.select(5, 0), Err(SelectErr::OutOfBounds { row: 5, col: 0 }));
        assert_eq!(grid.select(0, 9), Err(SelectErr::OutOfBounds { row: 0, col: 9 }));
    }

    #[test]
    fn test_select_letter_skips_selected_duplicates() {
        let mut grid = unshuffled();
        // APPLE: the first two P's are on row 0
        assert_eq!(grid.select_letter('P'), Ok((0, 1)));
        assert_eq!(grid.select_letter('P'), Ok((0, 2)));
        // the next P is the first letter of PAPER on row 3
        assert_eq!(grid.select_letter('P'), Ok((3, 0)));
        assert_eq!(grid.select_letter('Q'), Err(SelectErr::NoSuchLetter('Q')));
        assert_eq!(grid.selected_word(), "PPP");
    }

    #[test]
    fn test_deselect_last_targets_the_picked_cell() {
        let mut grid = unshuffled();
        grid.select(3, 2).unwrap(); // P
        grid.select(0, 0).unwrap(); // A
        grid.select(0, 1).unwrap(); // P

        let last = grid.deselect_last().unwrap();
        assert_eq!((last.row, last.col), (0, 1));
        assert!(!grid.cell(0, 1).unwrap().is_selected);
        assert!(grid.cell(3, 2).unwrap().is_selected, "the other P stays selected");
        assert_eq!(grid.selected_word(), "PA");
    }

    #[test]
    fn test_clear_selection() {
        let mut grid = unshuffled();
        grid.select(1, 1).unwrap();
        grid.select(2, 2).unwrap();
        grid.clear_selection();
        assert!(grid.selection().is_empty());
        assert!(grid.rows().flatten().all(|c| !c.is_selected));
    }

    #[test]
    fn test_locked_cells_cannot_be_selected() {
        let mut grid = unshuffled();
        for col in 0..GRID_COLS {
            grid.select(1, col).unwrap();
        }
        assert_eq!(grid.selected_word(), "CRANE");
        assert_eq!(grid.lock_selection(), 5);
        assert!(grid.selection().is_empty());
        assert_eq!(grid.deselect_last(), None, "locked cells leave the selection");
        assert_eq!(grid.num_locked(), 5);

        assert_eq!(grid.select(1, 0), Err(SelectErr::Unselectable { row: 1, col: 0 }));
        assert!(!grid.cell(1, 0).unwrap().is_selected);
        // the C of CRANE is the only C on the grid
        assert_eq!(grid.select_letter('C'), Err(SelectErr::NoSuchLetter('C')));

        assert_eq!(grid.release_unlocked(), 0, "locked cells stay locked");
        assert_eq!(grid.num_locked(), 5);
    }
}
