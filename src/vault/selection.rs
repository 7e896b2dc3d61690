use serde::{Deserialize, Serialize};

/// A picked grid cell, as it looked when it was picked
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedLetter {
    pub character: char,
    pub row: usize,
    pub col: usize,
}

impl SelectedLetter {
    pub fn is_at(&self, row: usize, col: usize) -> bool {
        self.row == row && self.col == col
    }
}

///
/// The ordered list of cells the player has picked. Order is the order of picking, which is also
/// the order the letters are read in when the selection is submitted.
///
/// Cells are identified by position, never by character, so duplicate letters on the grid are
/// told apart.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    letters: Vec<SelectedLetter>,
}

impl Selection {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.letters.iter().any(|l| l.is_at(row, col))
    }

    /// Adds the letter if its cell isn't picked yet, otherwise removes it. Returns whether the cell
    /// is picked afterwards.
    pub fn toggle(&mut self, letter: SelectedLetter) -> bool {
        match self.letters.iter().position(|l| l.is_at(letter.row, letter.col)) {
            Some(idx) => {
                self.letters.remove(idx);
                false
            }
            None => {
                self.letters.push(letter);
                true
            }
        }
    }

    /// Removes the most recently picked cell
    pub fn pop(&mut self) -> Option<SelectedLetter> {
        self.letters.pop()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    /// The picked letters read in order
    pub fn word(&self) -> String {
        self.letters.iter().map(|l| l.character).collect()
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectedLetter> {
        self.letters.iter()
    }
}
