use std::fmt::{Display, Formatter};
use std::ops::Index;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use super::{prelude::*, rng::*};

/// What a puzzle's word selection is derived from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleSeed {
    /// The shared puzzle of a calendar day (local midnight boundary)
    Daily(NaiveDate),
    /// A one-off practice puzzle, seeded by a millisecond timestamp
    Practice(u64),
}

impl PuzzleSeed {
    ///
    /// The string fed to the seeded generator. Daily seeds are "{year}-{month}-{day}" without zero
    /// padding (2024-10-07 is "2024-10-7"), practice seeds are the decimal timestamp.
    ///
    /// Changing this format changes every past and future puzzle.
    ///
    pub fn seed_string(&self) -> String {
        match self {
            Self::Daily(date) => format!("{}-{}-{}", date.year(), date.month(), date.day()),
            Self::Practice(millis) => millis.to_string(),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Daily(date) => Some(*date),
            Self::Practice(_) => None,
        }
    }

    pub fn is_daily(&self) -> bool {
        matches!(self, Self::Daily(_))
    }
}

impl Display for PuzzleSeed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Daily(date) => write!(f, "daily {}", date),
            Self::Practice(millis) => write!(f, "practice {}", millis),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleErr {
    #[error("need at least {} words to pick solutions from, found {found}", NUM_SLOTS)]
    InsufficientWordPool { found: usize },
    #[error("need at least {} letters to fill the grid, found {found}", GRID_CELLS)]
    InsufficientLetters { found: usize },
    #[error("need exactly {} solution words, found {found}", NUM_SLOTS)]
    NotFiveWords { found: usize },
    #[error("solution word '{0}' is not {} characters long", WORD_SIZE)]
    MalformedSolution(String),
}

/// The day's solution words, one per solution slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solutions {
    words: [String; NUM_SLOTS],
    chars: [WordChars; NUM_SLOTS],
}

impl Solutions {
    pub fn new(words: Vec<String>) -> Result<Self, PuzzleErr> {
        let words: [String; NUM_SLOTS] = words
            .try_into()
            .map_err(|words: Vec<String>| PuzzleErr::NotFiveWords { found: words.len() })?;

        let mut chars = [[' '; WORD_SIZE]; NUM_SLOTS];
        for (out, word) in chars.iter_mut().zip(&words) {
            *out = word_chars(word).ok_or_else(|| PuzzleErr::MalformedSolution(word.clone()))?;
        }

        Ok(Self { words, chars })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn chars(&self, slot: usize) -> &WordChars {
        &self.chars[slot]
    }

    /// The first slot whose word is exactly the guess
    pub fn slot_of(&self, guess: &str) -> Option<usize> {
        self.words.iter().position(|w| w == guess)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_str())
    }
}

impl Index<usize> for Solutions {
    type Output = str;

    fn index(&self, slot: usize) -> &Self::Output {
        &self.words[slot]
    }
}

///
/// Picks the solution words for a puzzle: the whole pool is shuffled with a generator seeded from
/// the puzzle seed and the first NUM_SLOTS words are taken.
///
/// Same pool + same seed = same words, on every machine.
///
pub fn select_solutions(pool: &[String], seed: &PuzzleSeed) -> Result<Solutions, PuzzleErr> {
    if pool.len() < NUM_SLOTS {
        return Err(PuzzleErr::InsufficientWordPool { found: pool.len() });
    }

    let seed_str = seed.seed_string();
    let shuffled = shuffled_pool(pool, &mut SeedRandom::new(&seed_str));
    log::debug!("selected solutions for {} (seed '{}')", seed, seed_str);
    Solutions::new(shuffled.into_iter().take(NUM_SLOTS).collect())
}

/// The pool in the order a given generator shuffles it into
pub fn shuffled_pool<R>(pool: &[String], rng: &mut R) -> Vec<String>
where
    R: UnitRng + ?Sized,
{
    let mut out = pool.to_vec();
    seeded_shuffle(&mut out, rng);
    out
}
