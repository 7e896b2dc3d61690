use serde::{Deserialize, Serialize};
use thiserror::Error;
use super::{prelude::*, color::*, state::*};

/// An accepted guess and the hints it produced against every solution slot at the time
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessedWord {
    pub word: String,
    pub hints: [Hint; NUM_SLOTS],
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryErr {
    #[error("there is no guess #{0} in the time capsule")]
    NoSuchGuess(usize),
}

///
/// The time capsule: every accepted guess of the session, oldest first. Entries are never changed
/// or removed, and an entry's index is its identity.
///
/// Replaying an entry pushes its hints back into the vault under the vault's usual rules, so a
/// replay can never un-solve a slot.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeCapsule {
    entries: Vec<GuessedWord>,
    /// the entry the vault is currently showing, None when showing the latest guess
    viewing: Option<usize>,
}

impl TimeCapsule {
    /// Adds the guess to the end and returns its index
    pub fn append(&mut self, guess: GuessedWord) -> usize {
        self.entries.push(guess);
        self.viewing = None;
        self.entries.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&GuessedWord> {
        self.entries.get(index)
    }

    pub fn latest(&self) -> Option<&GuessedWord> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The index of the entry being looked at, None when looking at the latest guess
    pub fn viewing(&self) -> Option<usize> {
        self.viewing
    }

    /// The index which should be highlighted: the entry being looked at, or the latest guess
    pub fn highlighted(&self) -> Option<usize> {
        self.viewing.or_else(|| self.entries.len().checked_sub(1))
    }

    /// Applies the hints of entry `index` to the vault. Returns how many slots changed.
    pub fn replay(&mut self, index: usize, vault: &mut VaultState) -> Result<usize, HistoryErr> {
        let entry = self.entries.get(index).ok_or(HistoryErr::NoSuchGuess(index))?;
        let changed = vault.apply_all(&entry.hints);
        self.viewing = Some(index);
        log::debug!("replayed guess #{} ({}), {} slots changed", index, entry.word, changed);
        Ok(changed)
    }

    ///
    /// Goes back to showing the latest guess: its hints are replayed, so the vault looks exactly as
    /// it did right after that guess (solved slots included). With no guesses this does nothing.
    ///
    pub fn return_to_current(&mut self, vault: &mut VaultState) -> usize {
        let changed = self.latest()
            .map(|latest| vault.apply_all(&latest.hints))
            .unwrap_or(0);
        self.viewing = None;
        changed
    }

    ///
    /// A page of the capsule for display, newest first: the `size` entries ending `offset`
    /// positions back from the latest. offset is clamped to [0, len - size] so a page is always
    /// full when there are enough entries.
    ///
    /// Each entry comes with its index, for use with replay.
    ///
    pub fn window_view(&self, offset: usize, size: usize) -> Vec<(usize, &GuessedWord)> {
        let offset = self.clamp_offset(offset, size);
        let end = self.entries.len() - offset;
        let start = end.saturating_sub(size);

        self.entries[start..end]
            .iter()
            .enumerate()
            .map(|(i, entry)| (start + i, entry))
            .rev()
            .collect()
    }

    pub fn clamp_offset(&self, offset: usize, size: usize) -> usize {
        offset.min(self.entries.len().saturating_sub(size))
    }
}
