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

use std::fmt::{Display, Formatter};
use std::ops::Index;
use serde::{Deserialize, Serialize};
use self::LetterColor::*;
use super::prelude::*;

///
/// The colors a letter in the vault can be...
///   * Green = the letter is in the solution word at this position
///   * Yellow = the letter is in the solution word, but not at this position
///   * Red = the letter is not in the solution word (also indicates no further instances of a
///           letter when another square with the same letter is already green/yellow)
///   * Black = a letter of a slot which is already solved, being drawn again. Scoring never
///             produces this color, see Hint::redrawn
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterColor {
    Green,
    Yellow,
    Red,
    Black,
}

impl LetterColor {
    /// The colors scoring can produce
    pub const SCORED: [LetterColor; 3] = [Green, Yellow, Red];

    /// Gives the best emoji to represent the color (used for debug printing)
    pub fn emoji(&self) -> &'static str {
        match self {
            Green => "🟩",
            Yellow => "🟨",
            Red => "🟥",
            Black => "⬛",
        }
    }
}

/// One square of a vault row: the guessed character and the color it earned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VaultLetter {
    pub character: char,
    pub color: LetterColor,
}

impl VaultLetter {
    pub fn new(character: char, color: LetterColor) -> Self {
        Self { character, color }
    }

    pub fn is_green(&self) -> bool {
        self.color == Green
    }
}

/// The array of VaultLetters, one per position of the guess.
pub type HintArray = [VaultLetter; WORD_SIZE];

/// The feedback a guess earned against one solution word. Every position is its own value, so
/// hints for different slots never share state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Hint(pub HintArray);

/// Automatic conversion of [VaultLetter; WORD_SIZE] -> Hint
impl From<HintArray> for Hint {
    fn from(arr: HintArray) -> Self {
        Self(arr)
    }
}

/// Delegate indexing of the struct to it's inner value
impl Index<usize> for Hint {
    type Output = VaultLetter;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Hint {
    ///
    /// Compute what colors would be shown given some guess & solution word. For example if the
    /// guess was "PAPER" and the solution was "APPLE" we should compute
    /// [Yellow, Yellow, Green, Yellow, Red]
    ///
    /// This is implemented by:
    /// * creating a [VaultLetter; WORD_SIZE] where all colors are defaulted to Red
    /// * computing a "budget" for each character (based on their frequency in the solution)
    /// * performing a "GREEN pass" which marks all correctly positioned letters (and updates the budget)
    /// * performing a "YELLOW pass" to mark all misplaced letters (based on the remaining budget)
    ///
    /// The green pass must run first, otherwise a repeated letter could be marked yellow while
    /// every occurrence of it in the solution is already spoken for by a green elsewhere.
    ///
    pub fn with_guess_answer(guess: &WordChars, answer: &WordChars) -> Self {
        let mut out = [VaultLetter::new(' ', Red); WORD_SIZE];
        for (letter, c) in out.iter_mut().zip(guess) {
            letter.character = *c;
        }

        let mut budget = LetterBudget::new(answer);

        // GREEN pass
        for i in 0..WORD_SIZE {
            if guess[i] == answer[i] {
                budget.consume(guess[i]);
                out[i].color = Green;
            }
        }

        // YELLOW pass
        for i in 0..WORD_SIZE {
            if out[i].color != Green && budget.consume(guess[i]) {
                out[i].color = Yellow;
            }
        }

        Self(out)
    }

    /// String convenience over with_guess_answer. None when either word is not WORD_SIZE long.
    pub fn score(guess: &str, answer: &str) -> Option<Self> {
        Some(Self::with_guess_answer(&word_chars(guess)?, &word_chars(answer)?))
    }

    /// An all green hint for the word, as produced when the guess is the solution itself
    pub fn solved(word: &WordChars) -> Self {
        Self::with_guess_answer(word, word)
    }

    /// Whether or not every letter is green, meaning the slot this hint belongs to is solved
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(VaultLetter::is_green)
    }

    /// The same letters, all drawn black. Used when a solved slot is drawn again.
    pub fn redrawn(&self) -> Self {
        let mut out = *self;
        for letter in out.0.iter_mut() {
            letter.color = Black;
        }
        out
    }

    /// The guessed word this hint was computed for
    pub fn word(&self) -> String {
        self.0.iter().map(|l| l.character).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VaultLetter> {
        self.0.iter()
    }

    pub fn count_color(&self, color: LetterColor) -> usize {
        self.0.iter().filter(|l| l.color == color).count()
    }
}

impl Display for Hint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for letter in self.iter() {
            f.write_str(letter.color.emoji())?;
        }

        Ok(())
    }
}

///
/// Remaining count of each distinct character of a solution word. Words are only WORD_SIZE long
/// so a fixed array with a linear scan beats hashing, and it does not assume the alphabet.
///
struct LetterBudget {
    entries: [(char, usize); WORD_SIZE],
    len: usize,
}

impl LetterBudget {
    fn new(word: &WordChars) -> Self {
        let mut out = Self {
            entries: [(' ', 0); WORD_SIZE],
            len: 0,
        };
        for c in word {
            match out.entries[..out.len].iter_mut().find(|(e, _)| e == c) {
                Some((_, count)) => *count += 1,
                None => {
                    out.entries[out.len] = (*c, 1);
                    out.len += 1;
                }
            }
        }
        out
    }

    /// Takes one instance of the character out of the budget, returning false when none is left
    fn consume(&mut self, c: char) -> bool {
        match self.entries[..self.len].iter_mut().find(|(e, _)| *e == c) {
            Some((_, count)) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const G: LetterColor = Green;
    const Y: LetterColor = Yellow;
    const R: LetterColor = Red;

    fn colors(hint: &Hint) -> [LetterColor; WORD_SIZE] {
        let mut out = [Red; WORD_SIZE];
        for (o, l) in out.iter_mut().zip(hint.iter()) {
            *o = l.color;
        }
        out
    }

    #[test_case("PAPER", "APPLE", [Y, Y, G, Y, R])]
    #[test_case("CRANE", "CRANE", [G, G, G, G, G])]
    #[test_case("CRONE", "CRANE", [G, G, R, G, G])]
    #[test_case("TARES", "SCARE", [R, Y, Y, Y, Y])]
    #[test_case("SPARE", "SCARE", [G, R, G, G, G])]
    #[test_case("ZITIS", "ZIZEL", [G, G, R, R, R])]
    #[test_case("ROMAN", "APRON", [Y, Y, R, Y, G])]
    #[test_case("LEMMA", "LEGAL", [G, G, R, R, Y])]
    #[test_case("ELITE", "LEDGE", [Y, Y, R, R, G])]
    #[test_case("LLAMA", "HELLO", [Y, Y, R, R, R])]
    #[test_case("EERIE", "THEME", [Y, R, R, R, G])]
    #[test_case("ABBEY", "KEBAB", [Y, Y, G, Y, R])]
    fn test_scoring(guess: &str, answer: &str, expected: [LetterColor; WORD_SIZE]) {
        let hint = Hint::score(guess, answer).unwrap();
        assert_eq!(colors(&hint), expected, "guess={}, answer={}", guess, answer);
        assert_eq!(hint.word(), guess);
    }

    #[test_case("SPEED", "ABIDE")]
    #[test_case("EERIE", "THEME")]
    #[test_case("MAMMA", "MOMMY")]
    #[test_case("ALLEY", "LLAMA")]
    #[test_case("PAPER", "APPLE")]
    fn test_budget_is_never_exceeded(guess: &str, answer: &str) {
        let hint = Hint::score(guess, answer).unwrap();
        let positional = guess.chars().zip(answer.chars()).filter(|(g, a)| g == a).count();
        assert_eq!(hint.count_color(Green), positional);

        for c in guess.chars() {
            let marked = hint.iter()
                .filter(|l| l.character == c && l.color != Red)
                .count();
            let available = answer.chars().filter(|a| *a == c).count();
            assert!(marked <= available, "{} marked {} times, only {} in {}", c, marked, available, answer);
        }
    }

    #[test]
    fn test_wrong_length_is_not_scored() {
        assert_eq!(Hint::score("CRAN", "CRANE"), None);
        assert_eq!(Hint::score("CRANES", "CRANE"), None);
    }

    #[test]
    fn test_solved_and_redrawn() {
        let word = word_chars("APPLE").unwrap();
        let solved = Hint::solved(&word);
        assert!(solved.is_solved());

        let redrawn = solved.redrawn();
        assert!(!redrawn.is_solved());
        assert_eq!(redrawn.count_color(Black), WORD_SIZE);
        assert_eq!(redrawn.word(), "APPLE");
        assert!(!Hint::score("PAPER", "APPLE").unwrap().is_solved());
    }

    #[test]
    fn test_display() {
        let hint = Hint::score("PAPER", "APPLE").unwrap();
        assert_eq!(hint.to_string(), "🟨🟨🟩🟨🟥");
    }
}
