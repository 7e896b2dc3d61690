// This file allows you to configure some of the constants that define the game of vault.
//
// The grid is always square and holds exactly the letters of the solution words, so NUM_SLOTS *
// WORD_SIZE must equal GRID_CELLS. Change them together or not at all.

use chrono::{Datelike, NaiveDate};

// how many characters are in a solution word / a guess?
pub const WORD_SIZE: usize = 5;
// how many solution words are hidden in the vault each day?
pub const NUM_SLOTS: usize = 5;
// dimensions of the letter grid
pub const GRID_ROWS: usize = 5;
pub const GRID_COLS: usize = 5;
pub const GRID_CELLS: usize = GRID_ROWS * GRID_COLS;
// how many 1 Hz ticks a transient message stays on screen
pub const MESSAGE_TICKS: u8 = 3;
// how many guesses the time capsule shows per page
pub const TIME_CAPSULE_PAGE: usize = 5;
// 2024-10-07 (the first vault) as a count of days from the common era, see vault_day
pub const VAULT_EPOCH_DAYS_FROM_CE: i32 = 739_166;

/// A word split into its characters, one per position.
pub type WordChars = [char; WORD_SIZE];

/// Given some input &str, clean it up the way every word list line and guess is cleaned up:
/// surrounding whitespace is removed and letters are converted to uppercase.
///
/// This does not check the length or the content of the word.
pub fn normalize_vault_word(str: &str) -> String {
    str.trim().to_uppercase()
}

/// Splits a word into exactly WORD_SIZE characters, or None if it has any other length.
pub fn word_chars(word: &str) -> Option<WordChars> {
    let mut out = [' '; WORD_SIZE];
    let mut chars = word.chars();
    for slot in out.iter_mut() {
        *slot = chars.next()?;
    }

    match chars.next() {
        Some(_) => None,
        None => Some(out),
    }
}

/// Checks whether the passed string is a "vault_str": exactly WORD_SIZE uppercase ASCII letters
pub fn is_vault_str(v: &str) -> bool {
    v.len() == WORD_SIZE && v.bytes().all(|b| b.is_ascii_uppercase())
}

/// The day number of the vault for a given calendar date. 2024-10-07 is vault #1, and the number
/// goes up by one every midnight. Dates before the first vault produce zero or negative numbers.
pub fn vault_day(date: NaiveDate) -> i64 {
    (date.num_days_from_ce() - VAULT_EPOCH_DAYS_FROM_CE) as i64 + 1
}

/// Renders elapsed seconds as HH:MM:SS. The hours column grows past two digits if it has to.
pub fn format_elapsed(secs: u64) -> String {
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, "00:00:00")]
    #[test_case(59, "00:00:59")]
    #[test_case(61, "00:01:01")]
    #[test_case(3600, "01:00:00")]
    #[test_case(86399, "23:59:59")]
    #[test_case(360000, "100:00:00")]
    fn test_format_elapsed(secs: u64, expected: &str) {
        assert_eq!(format_elapsed(secs), expected);
    }

    #[test_case(2024, 10, 7, 1)]
    #[test_case(2024, 10, 8, 2)]
    #[test_case(2024, 11, 1, 26)]
    #[test_case(2025, 10, 7, 366)]
    #[test_case(2024, 10, 6, 0)]
    fn test_vault_day(y: i32, m: u32, d: u32, expected: i64) {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(vault_day(date), expected);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_vault_word("  crane\r"), "CRANE");
        assert_eq!(normalize_vault_word("Apple"), "APPLE");
    }

    #[test]
    fn test_word_chars_requires_exact_length() {
        assert_eq!(word_chars("CRANE"), Some(['C', 'R', 'A', 'N', 'E']));
        assert_eq!(word_chars("CRAN"), None);
        assert_eq!(word_chars("CRANES"), None);
        assert_eq!(word_chars(""), None);
    }

    #[test]
    fn test_is_vault_str() {
        assert!(is_vault_str("CRANE"));
        assert!(!is_vault_str("crane"));
        assert!(!is_vault_str("CRAN3"));
        assert!(!is_vault_str("CRANES"));
    }

    #[test]
    fn test_grid_holds_every_solution_letter() {
        assert_eq!(NUM_SLOTS * WORD_SIZE, GRID_CELLS);
    }
}
