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

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use super::{
    prelude::*, color::*, data::*, daily::*, grid::*, state::*, history::*, completion::*,
};

pub const SOLUTION_ADDED_MESSAGE: &str = "Solution word has been added to the vault.";
pub const VALID_WORD_ADDED_MESSAGE: &str = "Valid word added to the vault and colored.";
pub const VALID_WORDS_RETURNED_MESSAGE: &str = "All valid words have been returned.";

///
/// The game as it is almost always used: words from the embedded data files and flags held in
/// memory (mirrored to the page through PersistFlag directives).
///
pub type StaticVaultGame = VaultGame<'static, MemoryFlags>;

///
/// A rejected submission. The Display text is exactly what the player is shown.
///
/// Every rejection still counts as an attempt, and clears the selection.
///
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessErr {
    #[error("No letters selected!")]
    NoLetters,
    #[error("Only {}-letter words are allowed!", WORD_SIZE)]
    InvalidLength(usize),
    #[error("The word \"{0}\" is not valid!")]
    UnknownWord(String),
}

/// An accepted submission
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub word: String,
    /// where the guess landed in the time capsule
    pub index: usize,
    /// the slot whose solution word this guess is, solved before or not
    pub solved_slot: Option<usize>,
    /// whether the guess solved a slot which wasn't solved yet
    pub newly_solved: bool,
    /// how many vault slots show something different now
    pub changed: usize,
}

impl Submission {
    pub fn message(&self) -> &'static str {
        match self.solved_slot {
            Some(_) => SOLUTION_ADDED_MESSAGE,
            None => VALID_WORD_ADDED_MESSAGE,
        }
    }
}

/// Something which happened on the page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Start,
    Select { row: usize, col: usize },
    TypeLetter(char),
    Backspace,
    ClearSelection,
    Submit,
    ReplayGuess(usize),
    ReturnToCurrent,
    ReturnValidWords,
    /// the 1 Hz timer
    Tick,
}

/// Side effects the host has to carry out after an event
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Directive {
    ShowMessage(String),
    ClearMessage,
    PersistFlag { key: FlagKey, value: String },
    /// fire and forget, failures only get logged
    SubmitStats(CompletionStats),
    ShowCompletion(CompletionSummary),
}

/// A message on screen, removed after MESSAGE_TICKS ticks
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransientMessage {
    pub text: String,
    pub ticks_left: u8,
}

///
/// One player's game: the grid, the vault, the time capsule and the counters around them.
///
/// Every change happens through an event (see handle) or one of the methods it dispatches to.
/// Nothing here blocks or does I/O, side effects come back as Directives.
///
/// Like the word lists it borrows, a VaultGame is usually 'static, see StaticVaultGame.
///
pub struct VaultGame<'a, F: FlagStore> {
    /// every word which may be guessed
    dictionary: &'a Dictionary,
    solutions: Solutions,
    seed: PuzzleSeed,

    grid: Grid,
    vault: VaultState,
    capsule: TimeCapsule,

    completion: CompletionTracker,
    flags: F,

    /// every submission counts, accepted or not
    attempts: u32,
    elapsed_secs: u64,
    started: bool,
    message: Option<TransientMessage>,
}

impl<F: FlagStore> VaultGame<'static, F> {
    /// Starts a game for the seed using the embedded word lists
    pub fn from_embedded<R>(seed: PuzzleSeed, flags: F, rng: &mut R) -> Result<Self, PuzzleErr>
    where
        R: Rng + ?Sized,
    {
        Self::new(&DATA, seed, flags, rng)
    }
}

impl<'a, F: FlagStore> VaultGame<'a, F> {
    ///
    /// Picks the puzzle's solution words from the pool and lays out the grid. `rng` only decides
    /// where the letters end up on the grid, the words themselves come from the seed.
    ///
    pub fn new<R>(lists: &'a WordLists, seed: PuzzleSeed, flags: F, rng: &mut R) -> Result<Self, PuzzleErr>
    where
        R: Rng + ?Sized,
    {
        let solutions = select_solutions(&lists.solution_pool, &seed)
            .map_err(|err| {
                log::error!("cannot start the {} puzzle: {}", seed, err);
                err
            })?;

        Self::with_solutions(&lists.dictionary, solutions, seed, flags, rng)
    }

    pub fn with_solutions<R>(
        dictionary: &'a Dictionary,
        solutions: Solutions,
        seed: PuzzleSeed,
        flags: F,
        rng: &mut R,
    ) -> Result<Self, PuzzleErr>
    where
        R: Rng + ?Sized,
    {
        let grid = Grid::build(solutions.words(), rng)?;
        let completion = match seed.date() {
            Some(date) => CompletionTracker::daily(date),
            None => CompletionTracker::practice(),
        };

        Ok(Self {
            dictionary,
            solutions,
            seed,
            grid,
            vault: VaultState::default(),
            capsule: TimeCapsule::default(),
            completion,
            flags,
            attempts: 0,
            elapsed_secs: 0,
            started: false,
            message: None,
        })
    }

    ///
    /// Applies the event and returns what the host should do about it. The completion check runs
    /// after every event.
    ///
    pub fn handle(&mut self, event: GameEvent) -> Vec<Directive> {
        use GameEvent::*;

        let mut out = Vec::new();
        match event {
            Start => self.start(),
            Select { row, col } => {
                if let Err(err) = self.select(row, col) {
                    log::debug!("ignoring click: {}", err);
                }
            }
            TypeLetter(c) => {
                if let Err(err) = self.type_letter(c) {
                    log::debug!("ignoring key: {}", err);
                }
            }
            Backspace => {
                self.backspace();
            }
            ClearSelection => self.grid.clear_selection(),
            Submit => {
                let text = match self.submit() {
                    Ok(submission) => submission.message().to_string(),
                    Err(err) => err.to_string(),
                };
                out.push(self.show_message(text));
            }
            ReplayGuess(index) => {
                if let Err(err) = self.replay_guess(index) {
                    log::warn!("{}", err);
                }
            }
            ReturnToCurrent => {
                self.return_to_current();
            }
            ReturnValidWords => {
                if self.return_valid_words() > 0 {
                    out.push(self.show_message(VALID_WORDS_RETURNED_MESSAGE.to_string()));
                }
            }
            Tick => out.extend(self.tick()),
        }

        out.extend(self.check_completion());
        out
    }

    /// Starts the clock. Starting twice changes nothing.
    pub fn start(&mut self) {
        if !self.started {
            log::debug!("starting the {} puzzle", self.seed);
            self.started = true;
        }
    }

    pub fn select(&mut self, row: usize, col: usize) -> Result<bool, SelectErr> {
        self.grid.select(row, col)
    }

    pub fn type_letter(&mut self, c: char) -> Result<(usize, usize), SelectErr> {
        self.grid.select_letter(c.to_ascii_uppercase())
    }

    pub fn backspace(&mut self) -> bool {
        self.grid.deselect_last().is_some()
    }

    ///
    /// Submits the current selection as a guess.
    ///
    /// An accepted guess is scored against every solution slot, pushed into the vault and appended
    /// to the time capsule. A guess which is one of the solution words also locks the cells it
    /// was spelled with.
    ///
    pub fn submit(&mut self) -> Result<Submission, GuessErr> {
        self.attempts += 1;
        let word = self.grid.selected_word();
        let result = self.accept(word);
        match &result {
            Ok(submission) => log::debug!(
                "accepted guess #{} {} ({} slots changed, attempt {})",
                submission.index,
                submission.word,
                submission.changed,
                self.attempts
            ),
            Err(err) => {
                log::warn!("rejected guess (attempt {}): {}", self.attempts, err);
                self.grid.clear_selection();
            }
        }

        result
    }

    fn accept(&mut self, word: String) -> Result<Submission, GuessErr> {
        if word.is_empty() {
            return Err(GuessErr::NoLetters);
        }

        let guess = word_chars(&word).ok_or_else(|| GuessErr::InvalidLength(word.chars().count()))?;
        if !self.dictionary.contains(&word) {
            return Err(GuessErr::UnknownWord(word));
        }

        let hints = self.score_guess(&guess);
        let solved_slot = self.solutions.slot_of(&word);
        let newly_solved = solved_slot.map(|slot| !self.vault.is_solved(slot)).unwrap_or(false);

        let changed = self.vault.apply_all(&hints);
        if solved_slot.is_some() {
            self.grid.lock_selection();
        } else {
            self.grid.clear_selection();
        }

        let index = self.capsule.append(GuessedWord { word: word.clone(), hints });
        Ok(Submission {
            word,
            index,
            solved_slot,
            newly_solved,
            changed,
        })
    }

    ///
    /// The hints for a guess, one per slot: scored fresh against the slot's word, unless the slot
    /// is already solved, in which case its stored hint is carried over unchanged.
    ///
    pub fn score_guess(&self, guess: &WordChars) -> [Hint; NUM_SLOTS] {
        std::array::from_fn(|slot| match self.vault.get(slot) {
            Some(stored) if stored.is_solved() => *stored,
            _ => Hint::with_guess_answer(guess, self.solutions.chars(slot)),
        })
    }

    pub fn replay_guess(&mut self, index: usize) -> Result<usize, HistoryErr> {
        self.capsule.replay(index, &mut self.vault)
    }

    pub fn return_to_current(&mut self) -> usize {
        self.capsule.return_to_current(&mut self.vault)
    }

    /// Only possible while some slot shows a hint that isn't a solution
    pub fn can_return_valid_words(&self) -> bool {
        self.vault.has_unsolved_hints()
    }

    ///
    /// Takes every non-solution word back out of the vault (solved slots stay) and makes any cell
    /// which isn't locked selectable again. Returns how many slots were emptied.
    ///
    pub fn return_valid_words(&mut self) -> usize {
        if !self.can_return_valid_words() {
            return 0;
        }

        let cleared = self.vault.clear_unsolved();
        let released = self.grid.release_unlocked();
        log::debug!("returned {} valid words, released {} cells", cleared, released);
        cleared
    }

    /// The clock only runs between start and completion
    pub fn is_running(&self) -> bool {
        self.started && !self.is_complete()
    }

    ///
    /// One second passed: advances the clock (while running) and ages the message on screen,
    /// returning ClearMessage once it expires.
    ///
    pub fn tick(&mut self) -> Option<Directive> {
        if self.is_running() {
            self.elapsed_secs += 1;
        }

        let message = self.message.as_mut()?;
        message.ticks_left = message.ticks_left.saturating_sub(1);
        if message.ticks_left == 0 {
            self.message = None;
            Some(Directive::ClearMessage)
        } else {
            None
        }
    }

    fn show_message(&mut self, text: String) -> Directive {
        self.message = Some(TransientMessage {
            text: text.clone(),
            ticks_left: MESSAGE_TICKS,
        });
        Directive::ShowMessage(text)
    }

    ///
    /// Reports completion the first time the vault is seen complete. Calling this again, from any
    /// path, produces nothing.
    ///
    pub fn check_completion(&mut self) -> Vec<Directive> {
        let report = match self.completion.check(&self.vault, &mut self.flags, self.elapsed_secs, self.attempts) {
            Some(report) => report,
            None => return Vec::new(),
        };

        let mut out: Vec<Directive> = report.written
            .into_iter()
            .map(|(key, value)| Directive::PersistFlag { key, value })
            .collect();

        out.push(Directive::ShowCompletion(report.summary));
        if let Some(stats) = report.stats {
            out.push(Directive::SubmitStats(stats));
        }

        out
    }

    /// Whether this puzzle was already completed (and reported), possibly in an earlier session
    pub fn already_completed(&self) -> bool {
        self.completion.already_completed(&self.flags)
    }

    pub fn is_complete(&self) -> bool {
        self.vault.is_game_complete()
    }

    pub fn seed(&self) -> &PuzzleSeed {
        &self.seed
    }

    pub fn day(&self) -> Option<i64> {
        self.seed.date().map(vault_day)
    }

    pub fn solutions(&self) -> &Solutions {
        &self.solutions
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn vault(&self) -> &VaultState {
        &self.vault
    }

    pub fn capsule(&self) -> &TimeCapsule {
        &self.capsule
    }

    pub fn flags(&self) -> &F {
        &self.flags
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn message(&self) -> Option<&TransientMessage> {
        self.message.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SOLUTIONS: [&str; NUM_SLOTS] = ["APPLE", "CRANE", "SLATE", "PAPER", "GHOST"];

    fn lists() -> WordLists {
        WordLists::from_parts(
            SOLUTIONS.iter().map(|w| w.to_string()).collect(),
            "crone\nplate\nspare\n",
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    fn game(lists: &WordLists, seed: PuzzleSeed) -> VaultGame<'_, MemoryFlags> {
        let solutions = Solutions::new(SOLUTIONS.iter().map(|w| w.to_string()).collect()).unwrap();
        VaultGame::with_solutions(&lists.dictionary, solutions, seed, MemoryFlags::default(), &mut StdRng::seed_from_u64(7))
            .unwrap()
    }

    fn type_word<F: FlagStore>(game: &mut VaultGame<'_, F>, word: &str) {
        for c in word.chars() {
            game.type_letter(c).unwrap();
        }
    }

    fn guess<F: FlagStore>(game: &mut VaultGame<'_, F>, word: &str) -> Result<Submission, GuessErr> {
        type_word(game, word);
        game.submit()
    }

    #[test]
    fn test_every_submission_is_an_attempt() {
        let lists = lists();
        let mut game = game(&lists, PuzzleSeed::Practice(1));

        assert_eq!(game.submit(), Err(GuessErr::NoLetters));
        assert_eq!(game.attempts(), 1);

        assert_eq!(guess(&mut game, "CRA"), Err(GuessErr::InvalidLength(3)));
        assert_eq!(game.attempts(), 2);
        assert!(game.grid().selection().is_empty());

        assert_eq!(guess(&mut game, "PLEAT"), Err(GuessErr::UnknownWord("PLEAT".to_string())));
        assert_eq!(game.attempts(), 3);
        assert!(game.grid().selection().is_empty());
        assert!(game.capsule().is_empty());

        assert!(guess(&mut game, "SPARE").is_ok());
        assert_eq!(game.attempts(), 4);
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(GuessErr::NoLetters.to_string(), "No letters selected!");
        assert_eq!(GuessErr::InvalidLength(6).to_string(), "Only 5-letter words are allowed!");
        assert_eq!(GuessErr::UnknownWord("PLEAT".to_string()).to_string(), "The word \"PLEAT\" is not valid!");
    }

    #[test]
    fn test_six_letters_are_rejected_before_scoring() {
        let lists = lists();
        let mut game = game(&lists, PuzzleSeed::Practice(1));
        assert_eq!(guess(&mut game, "PLATES"), Err(GuessErr::InvalidLength(6)));
        assert_eq!(*game.vault(), VaultState::default());
    }

    #[test]
    fn test_valid_guess_scores_every_slot() {
        let lists = lists();
        let mut game = game(&lists, PuzzleSeed::Practice(1));

        let submission = guess(&mut game, "PLATE").unwrap();
        assert_eq!(submission.index, 0);
        assert_eq!(submission.solved_slot, None);
        assert_eq!(submission.changed, NUM_SLOTS);
        assert_eq!(submission.message(), VALID_WORD_ADDED_MESSAGE);

        for (slot, answer) in SOLUTIONS.iter().enumerate() {
            assert_eq!(game.vault().get(slot), Some(&Hint::score("PLATE", answer).unwrap()));
        }
        assert_eq!(game.grid().num_locked(), 0);
        assert!(game.grid().selection().is_empty());
    }

    #[test]
    fn test_solution_locks_its_cells() {
        let lists = lists();
        let mut game = game(&lists, PuzzleSeed::Practice(1));

        let submission = guess(&mut game, "CRANE").unwrap();
        assert_eq!(submission.solved_slot, Some(1));
        assert!(submission.newly_solved);
        assert_eq!(submission.message(), SOLUTION_ADDED_MESSAGE);
        assert!(game.vault().is_solved(1));
        assert_eq!(game.grid().num_locked(), WORD_SIZE);

        // the other solutions still carry their fresh hints
        guess(&mut game, "PLATE").unwrap();
        assert!(game.vault().is_solved(1));
        assert_eq!(game.vault().get(0), Some(&Hint::score("PLATE", "APPLE").unwrap()));
        assert_eq!(game.capsule().get(1).unwrap().hints[1], Hint::score("CRANE", "CRANE").unwrap());
    }

    #[test]
    fn test_resubmitting_a_solved_word_locks_again() {
        let lists = lists();
        let mut game = game(&lists, PuzzleSeed::Practice(1));
        guess(&mut game, "APPLE").unwrap();
        let solved = game.vault().get(0).copied();

        // the letters of APPLE are still on the grid through PAPER and SLATE
        let submission = guess(&mut game, "APPLE").unwrap();
        assert_eq!(submission.solved_slot, Some(0));
        assert!(!submission.newly_solved);
        assert_eq!(submission.message(), SOLUTION_ADDED_MESSAGE);
        assert_eq!(game.grid().num_locked(), 2 * WORD_SIZE);
        assert!(game.grid().selection().is_empty());
        assert_eq!(game.vault().get(0).copied(), solved);
        assert_eq!(game.capsule().len(), 2);
    }

    #[test]
    fn test_return_valid_words() {
        let lists = lists();
        let mut game = game(&lists, PuzzleSeed::Practice(1));
        assert!(!game.can_return_valid_words());
        assert_eq!(game.handle(GameEvent::ReturnValidWords), Vec::<Directive>::new());

        guess(&mut game, "GHOST").unwrap();
        guess(&mut game, "SPARE").unwrap();
        assert!(game.can_return_valid_words());

        let directives = game.handle(GameEvent::ReturnValidWords);
        assert_eq!(directives, vec![Directive::ShowMessage(VALID_WORDS_RETURNED_MESSAGE.to_string())]);
        assert!(game.vault().is_solved(4));
        for slot in 0..4 {
            assert_eq!(game.vault().get(slot), None);
        }
        assert_eq!(game.grid().num_locked(), WORD_SIZE);
        assert!(!game.can_return_valid_words());
    }

    #[test]
    fn test_replay_and_return_to_current() {
        let lists = lists();
        let mut game = game(&lists, PuzzleSeed::Practice(1));
        guess(&mut game, "CRONE").unwrap();
        guess(&mut game, "SLATE").unwrap();
        let current = game.vault().clone();

        game.handle(GameEvent::ReplayGuess(0));
        assert!(game.vault().is_solved(2));
        assert_eq!(game.vault().get(0), Some(&Hint::score("CRONE", "APPLE").unwrap()));

        game.handle(GameEvent::ReturnToCurrent);
        assert_eq!(*game.vault(), current);

        // an unknown index is logged and ignored
        assert_eq!(game.handle(GameEvent::ReplayGuess(9)), Vec::<Directive>::new());
        assert_eq!(*game.vault(), current);
    }

    #[test]
    fn test_keyboard_and_backspace() {
        let lists = lists();
        let mut game = game(&lists, PuzzleSeed::Practice(1));
        game.handle(GameEvent::TypeLetter('g'));
        game.handle(GameEvent::TypeLetter('h'));
        game.handle(GameEvent::TypeLetter('q'));
        assert_eq!(game.grid().selected_word(), "GH");

        game.handle(GameEvent::Backspace);
        assert_eq!(game.grid().selected_word(), "G");
        game.handle(GameEvent::ClearSelection);
        assert!(game.grid().selection().is_empty());
    }

    #[test]
    fn test_message_expires_after_ticks() {
        let lists = lists();
        let mut game = game(&lists, PuzzleSeed::Practice(1));
        let directives = game.handle(GameEvent::Submit);
        assert_eq!(directives, vec![Directive::ShowMessage("No letters selected!".to_string())]);
        assert_eq!(game.message().map(|m| m.ticks_left), Some(MESSAGE_TICKS));

        for _ in 1..MESSAGE_TICKS {
            assert_eq!(game.handle(GameEvent::Tick), Vec::<Directive>::new());
        }
        assert_eq!(game.handle(GameEvent::Tick), vec![Directive::ClearMessage]);
        assert_eq!(game.message(), None);
        assert_eq!(game.handle(GameEvent::Tick), Vec::<Directive>::new());
    }

    #[test]
    fn test_clock_runs_from_start_to_completion() {
        let lists = lists();
        let mut game = game(&lists, PuzzleSeed::Practice(1));
        game.handle(GameEvent::Tick);
        assert_eq!(game.elapsed_secs(), 0);

        game.handle(GameEvent::Start);
        game.handle(GameEvent::Tick);
        game.handle(GameEvent::Tick);
        assert_eq!(game.elapsed_secs(), 2);

        for word in SOLUTIONS {
            guess(&mut game, word).unwrap();
        }
        assert!(game.is_complete());
        assert!(!game.is_running());
        game.handle(GameEvent::Tick);
        assert_eq!(game.elapsed_secs(), 2);
    }

    #[test]
    fn test_daily_completion_fires_once() {
        let lists = lists();
        let mut game = game(&lists, PuzzleSeed::Daily(today()));
        game.handle(GameEvent::Start);
        game.handle(GameEvent::Tick);

        let mut completions = 0;
        let mut directives = Vec::new();
        for word in SOLUTIONS {
            type_word(&mut game, word);
            let out = game.handle(GameEvent::Submit);
            completions += out.iter().filter(|d| matches!(d, Directive::ShowCompletion(_))).count();
            directives.extend(out);
        }
        for _ in 0..5 {
            directives.extend(game.handle(GameEvent::Tick));
        }
        directives.extend(game.check_completion());

        assert_eq!(completions, 1);
        assert_eq!(directives.iter().filter(|d| matches!(d, Directive::ShowCompletion(_))).count(), 1);
        assert!(directives.contains(&Directive::PersistFlag {
            key: FlagKey::VaultCompleted,
            value: "2025-03-01".to_string(),
        }));
        assert!(directives.contains(&Directive::SubmitStats(CompletionStats {
            completion_time: "00:00:01".to_string(),
            completion_date: "2025-03-01".to_string(),
            attempts: NUM_SLOTS as u32,
        })));
        assert!(game.already_completed());
        assert_eq!(game.day(), Some(146));
    }

    #[test]
    fn test_completion_without_elapsed_time_sends_no_stats() {
        let lists = lists();
        let mut game = game(&lists, PuzzleSeed::Daily(today()));
        let mut directives = Vec::new();
        for word in SOLUTIONS {
            type_word(&mut game, word);
            directives.extend(game.handle(GameEvent::Submit));
        }
        assert!(directives.iter().any(|d| matches!(d, Directive::ShowCompletion(_))));
        assert!(!directives.iter().any(|d| matches!(d, Directive::SubmitStats(_))));
    }

    #[test]
    fn test_new_selects_from_pool() {
        let lists = WordLists::from_parts(
            ["ABCDE", "FGHIJ", "KLMNO", "PQRST", "UVWXY", "ZZZZZ"].iter().map(|w| w.to_string()).collect(),
            "",
        );
        let seed = PuzzleSeed::Daily(NaiveDate::from_ymd_opt(2024, 10, 7).unwrap());
        let game = VaultGame::new(&lists, seed, MemoryFlags::default(), &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(game.solutions().words(), &["ABCDE", "UVWXY", "FGHIJ", "ZZZZZ", "KLMNO"].map(String::from)[..]);
        assert_eq!(game.day(), Some(1));

        let mut expected: Vec<char> = game.solutions().iter().flat_map(|w| w.chars()).collect();
        expected.sort_unstable();
        assert_eq!(game.grid().sorted_letters(), expected);
    }

    #[test]
    fn test_new_with_small_pool_fails() {
        let lists = WordLists::from_parts(vec!["ABCDE".to_string()], "");
        let result = VaultGame::new(&lists, PuzzleSeed::Practice(5), MemoryFlags::default(), &mut StdRng::seed_from_u64(1));
        assert_eq!(result.err(), Some(PuzzleErr::InsufficientWordPool { found: 1 }));
    }
}
