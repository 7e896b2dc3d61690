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

use crate::vault::prelude::*;
use lazy_static::lazy_static;
use rust_embed::RustEmbed;
use std::collections::HashSet;
use std::str::Utf8Error;
use thiserror::Error;

// Word lists are plain text, one word per line
pub const DATA_DIRECTORY: &str = "data/";
pub const SOLUTION_WORDS_FILE_NAME: &str = "solution_words.txt";
pub const VALID_WORDS_FILE_NAME: &str = "valid_words.txt";

lazy_static! {
    pub static ref DATA: WordLists = WordLists::read().expect("should have no failures reading data...");
}

#[derive(RustEmbed)]
#[folder = "data/"]
struct RawData;

/// Holds all of the data represented by the static/embedded text files
#[derive(Clone, Debug)]
pub struct WordLists {
    /// The curated pool the daily solution words are drawn from, in file order. The order matters:
    /// it is the input to the daily shuffle.
    pub solution_pool: Vec<String>,
    /// Every word which is accepted as a guess
    pub dictionary: Dictionary,
}

#[derive(Error, Debug)]
pub enum LoadDataErr {
    #[error("missing word list file '{0}'")]
    MissingFile(&'static str),
    #[error(transparent)]
    EncodingError(#[from] Utf8Error),
}

impl WordLists {
    pub fn read() -> Result<Self, LoadDataErr> {
        let solution_pool = parse_word_list(&retrieve_file_as_str(SOLUTION_WORDS_FILE_NAME)?
            .ok_or(LoadDataErr::MissingFile(SOLUTION_WORDS_FILE_NAME))?);
        let valid_words = retrieve_file_as_str(VALID_WORDS_FILE_NAME)?
            .ok_or(LoadDataErr::MissingFile(VALID_WORDS_FILE_NAME))?;

        let out = Self::from_parts(solution_pool, &valid_words);
        log::debug!(
            "got {} solution words and {} valid guesses from data files",
            out.solution_pool.len(),
            out.dictionary.len()
        );
        Ok(out)
    }

    /// Builds the lists from already loaded text. Every solution word is also a valid guess.
    pub fn from_parts(solution_pool: Vec<String>, valid_words: &str) -> Self {
        let mut dictionary = Dictionary::from_text(valid_words);
        dictionary.extend(solution_pool.iter().cloned());
        Self {
            solution_pool,
            dictionary,
        }
    }
}

///
/// Parses a newline separated word list. The whole text is trimmed first (so a trailing newline
/// doesn't produce an empty entry), then every line is normalized.
///
/// Content isn't validated here, and order is preserved.
///
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.trim()
        .lines()
        .map(normalize_vault_word)
        .collect()
}

/// The set of words which may be guessed. Lookups expect normalized (uppercase) words.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn from_text(text: &str) -> Self {
        text.lines().map(normalize_vault_word).collect()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<String> for Dictionary {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().filter(|w| !w.is_empty()).collect(),
        }
    }
}

impl Extend<String> for Dictionary {
    fn extend<T: IntoIterator<Item = String>>(&mut self, iter: T) {
        self.words.extend(iter.into_iter().filter(|w| !w.is_empty()))
    }
}

fn retrieve_file_as_str(name: &str) -> Result<Option<String>, LoadDataErr> {
    let f: rust_embed::EmbeddedFile = if let Some(data) = RawData::get(name) {
        data
    } else {
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(out) = std::fs::read_to_string(format!("{}{}", DATA_DIRECTORY, name)) {
            return Ok(Some(out));
        }

        return Ok(None);
    };

    Ok(Some(
        std::str::from_utf8(&f.data)
            .map_err(LoadDataErr::EncodingError)?
            .to_string(),
    ))
}
