use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use super::{prelude::*, state::*};

/// Keys of the small flags the page persists between visits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlagKey {
    /// ISO date of the last day the vault was solved (drives the streak)
    LastSolvedDate,
    /// ISO date of the last day whose completion was reported
    VaultCompleted,
    CurrentStreak,
    MaxStreak,
}

impl FlagKey {
    pub const ALL: [FlagKey; 4] = [Self::LastSolvedDate, Self::VaultCompleted, Self::CurrentStreak, Self::MaxStreak];

    /// The storage key, as used by the page
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LastSolvedDate => "lastSolvedDate",
            Self::VaultCompleted => "vaultCompleted",
            Self::CurrentStreak => "currentStreak",
            Self::MaxStreak => "maxStreak",
        }
    }

    pub fn from_str(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

impl Display for FlagKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the persisted flags live. Values are plain strings (dates are ISO YYYY-MM-DD).
pub trait FlagStore {
    fn get(&self, key: FlagKey) -> Option<String>;
    fn set(&mut self, key: FlagKey, value: String);
}

/// Flags held in memory, optionally seeded with what the page had stored
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryFlags {
    values: HashMap<FlagKey, String>,
}

impl MemoryFlags {
    /// Seeds the store from raw key/value pairs, skipping keys it doesn't know
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut out = Self::default();
        for (key, value) in pairs {
            match FlagKey::from_str(key.as_ref()) {
                Some(key) => out.set(key, value.into()),
                None => log::debug!("ignoring unknown flag '{}'", key.as_ref()),
            }
        }
        out
    }
}

impl FlagStore for MemoryFlags {
    fn get(&self, key: FlagKey) -> Option<String> {
        self.values.get(&key).cloned()
    }

    fn set(&mut self, key: FlagKey, value: String) {
        self.values.insert(key, value);
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagErr {
    #[error("flag {key} holds '{value}', which is not a YYYY-MM-DD date")]
    BadDate { key: FlagKey, value: String },
    #[error("flag {key} holds '{value}', which is not a count")]
    BadCount { key: FlagKey, value: String },
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn read_date(flags: &impl FlagStore, key: FlagKey) -> Result<Option<NaiveDate>, FlagErr> {
    flags.get(key)
        .map(|value| NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .map_err(|_| FlagErr::BadDate { key, value }))
        .transpose()
}

fn read_count(flags: &impl FlagStore, key: FlagKey) -> Result<u32, FlagErr> {
    flags.get(key)
        .map(|value| value.trim().parse::<u32>().map_err(|_| FlagErr::BadCount { key, value }))
        .transpose()
        .map(|v| v.unwrap_or(0))
}

/// Flags are best effort: a value that can't be read counts as missing
fn or_missing<T: Default>(result: Result<T, FlagErr>) -> T {
    result.unwrap_or_else(|err| {
        log::warn!("{}", err);
        T::default()
    })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub current: u32,
    pub max: u32,
}

impl Streak {
    pub fn read(flags: &impl FlagStore) -> Self {
        Self {
            current: or_missing(read_count(flags, FlagKey::CurrentStreak)),
            max: or_missing(read_count(flags, FlagKey::MaxStreak)),
        }
    }

    ///
    /// The streak after solving on `today`. Solving the day after the last solve continues the
    /// streak, anything else starts over at 1. Solving twice on the same day changes nothing.
    ///
    pub fn after_solving(&self, last_solved: Option<NaiveDate>, today: NaiveDate) -> Self {
        if last_solved == Some(today) {
            return *self;
        }

        let current = if last_solved.is_some() && last_solved == today.pred_opt() {
            self.current.saturating_add(1)
        } else {
            1
        };

        Self {
            current,
            max: self.max.max(current),
        }
    }
}

/// What the stats collaborator receives, fire and forget
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionStats {
    /// HH:MM:SS
    pub completion_time: String,
    /// YYYY-MM-DD
    pub completion_date: String,
    pub attempts: u32,
}

/// What the page needs to congratulate the player
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionSummary {
    pub final_time: String,
    pub elapsed_secs: u64,
    pub attempts: u32,
    /// the vault number, None for practice puzzles
    pub day: Option<i64>,
    pub streak: Option<Streak>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionReport {
    pub summary: CompletionSummary,
    /// None for practice puzzles, and when no time has elapsed
    pub stats: Option<CompletionStats>,
    /// Flags written to the store by this completion, in write order
    pub written: Vec<(FlagKey, String)>,
}

///
/// Watches for the vault being complete and makes sure the side effects of completing happen at
/// most once: once per session, and for daily puzzles once per calendar day (tracked through the
/// VaultCompleted flag, so a reload doesn't report the same day again).
///
/// Whether the vault is complete is always read from the VaultState.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionTracker {
    /// None for practice puzzles, which never touch the flags
    date: Option<NaiveDate>,
    reported: bool,
}

impl CompletionTracker {
    pub fn daily(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            reported: false,
        }
    }

    pub fn practice() -> Self {
        Self {
            date: None,
            reported: false,
        }
    }

    pub fn reported(&self) -> bool {
        self.reported
    }

    /// Whether this day's completion was already reported, in this session or an earlier one
    pub fn already_completed(&self, flags: &impl FlagStore) -> bool {
        if self.reported {
            return true;
        }

        match self.date {
            Some(date) => or_missing(read_date(flags, FlagKey::VaultCompleted)) == Some(date),
            None => false,
        }
    }

    ///
    /// Call after anything that might have completed the vault. Returns a report the first time
    /// the vault is seen complete, and None every other time.
    ///
    pub fn check<F: FlagStore>(
        &mut self,
        vault: &VaultState,
        flags: &mut F,
        elapsed_secs: u64,
        attempts: u32,
    ) -> Option<CompletionReport> {
        if !vault.is_game_complete() || self.already_completed(flags) {
            return None;
        }
        self.reported = true;

        let final_time = format_elapsed(elapsed_secs);
        let date = match self.date {
            Some(date) => date,
            None => {
                log::debug!("practice vault complete in {}", final_time);
                return Some(CompletionReport {
                    summary: CompletionSummary {
                        final_time,
                        elapsed_secs,
                        attempts,
                        day: None,
                        streak: None,
                    },
                    stats: None,
                    written: Vec::new(),
                });
            }
        };

        let today = iso_date(date);
        let mut written = Vec::with_capacity(FlagKey::ALL.len());
        let mut write = |flags: &mut F, key: FlagKey, value: String| {
            flags.set(key, value.clone());
            written.push((key, value));
        };

        let last_solved = or_missing(read_date(flags, FlagKey::LastSolvedDate));
        let before = Streak::read(flags);
        let streak = before.after_solving(last_solved, date);
        if last_solved != Some(date) {
            write(flags, FlagKey::LastSolvedDate, today.clone());
            write(flags, FlagKey::CurrentStreak, streak.current.to_string());
            write(flags, FlagKey::MaxStreak, streak.max.to_string());
        }
        write(flags, FlagKey::VaultCompleted, today.clone());

        let stats = if elapsed_secs > 0 {
            Some(CompletionStats {
                completion_time: final_time.clone(),
                completion_date: today,
                attempts,
            })
        } else {
            None
        };

        log::debug!("vault {} complete in {} after {} attempts", date, final_time, attempts);
        Some(CompletionReport {
            summary: CompletionSummary {
                final_time,
                elapsed_secs,
                attempts,
                day: Some(vault_day(date)),
                streak: Some(streak),
            },
            stats,
            written,
        })
    }
}
