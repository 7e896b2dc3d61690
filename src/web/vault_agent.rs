use std::collections::HashSet;
use chrono::NaiveDate;
use instant::Instant;
use yew_agent::{Agent, AgentLink, HandlerId, Public};
use serde::{Serialize, Deserialize};
use crate::vault::{
    format_elapsed, Directive, GameEvent, GridCell, GuessedWord, Hint, MemoryFlags, PuzzleErr,
    PuzzleSeed, StaticVaultGame, VaultGame, GRID_COLS, NUM_SLOTS, TIME_CAPSULE_PAGE,
};

///
/// Owns the player's game inside a web worker. The page sends events, and gets back the
/// directives each event produced followed by a fresh snapshot of the game.
///
pub struct VaultAgent {
    link: AgentLink<Self>,
    subscribers: HashSet<HandlerId>,
    game: Option<StaticVaultGame>,
    /// how far back from the latest guess the time capsule page starts
    capsule_offset: usize,

    cached_state: Option<GameStateDto>,
}

#[derive(Serialize, Deserialize, Debug)]
pub enum VaultReq {
    Init(InitDto),
    Event(GameEvent),
    ScrollCapsule(usize),
    GetState,
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub enum VaultResp {
    UpdateGameState(GameStateDto),
    Directive(Directive),
    InitFailed(PuzzleErr),
    NotStarted,
}

/// What the page knows and the worker doesn't
#[derive(Clone, Serialize, Deserialize, PartialEq, Debug, Default)]
pub struct InitDto {
    /// the player's local date, the worker's clock is used when missing
    pub today: Option<NaiveDate>,
    /// set for practice puzzles (a millisecond timestamp)
    pub practice_seed: Option<u64>,
    /// everything the page had persisted, as raw key/value pairs
    pub flags: Vec<(String, String)>,
}

impl InitDto {
    fn seed(&self) -> PuzzleSeed {
        match self.practice_seed {
            Some(millis) => PuzzleSeed::Practice(millis),
            None => PuzzleSeed::Daily(self.today.unwrap_or_else(|| chrono::Local::now().date_naive())),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Debug)]
pub struct GameStateDto {
    pub day: Option<i64>,
    pub grid: Vec<[GridCell; GRID_COLS]>,
    pub selected_word: String,
    pub vault: [Option<Hint>; NUM_SLOTS],
    pub capsule: Vec<CapsuleEntryDto>,
    pub capsule_offset: usize,
    pub capsule_len: usize,
    pub highlighted: Option<usize>,
    pub attempts: u32,
    pub elapsed: String,
    pub message: Option<String>,
    pub can_return_valid_words: bool,
    pub complete: bool,
    pub already_completed: bool,
}

impl GameStateDto {
    fn with_game(game: &StaticVaultGame, capsule_offset: usize) -> Self {
        let capsule = game.capsule();
        let capsule_offset = capsule.clamp_offset(capsule_offset, TIME_CAPSULE_PAGE);
        let mut vault = [None; NUM_SLOTS];
        for (out, hint) in vault.iter_mut().zip(game.vault().iter()) {
            *out = hint.copied();
        }

        Self {
            day: game.day(),
            grid: game.grid().rows().copied().collect(),
            selected_word: game.grid().selected_word(),
            vault,
            capsule: capsule
                .window_view(capsule_offset, TIME_CAPSULE_PAGE)
                .into_iter()
                .map(|(index, entry)| CapsuleEntryDto::new(index, entry))
                .collect(),
            capsule_offset,
            capsule_len: capsule.len(),
            highlighted: capsule.highlighted(),
            attempts: game.attempts(),
            elapsed: format_elapsed(game.elapsed_secs()),
            message: game.message().map(|m| m.text.clone()),
            can_return_valid_words: game.can_return_valid_words(),
            complete: game.is_complete(),
            already_completed: game.already_completed(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub struct CapsuleEntryDto {
    pub index: usize,
    pub word: String,
    pub hints: [Hint; NUM_SLOTS],
}

impl CapsuleEntryDto {
    fn new(index: usize, entry: &GuessedWord) -> Self {
        Self {
            index,
            word: entry.word.clone(),
            hints: entry.hints,
        }
    }
}

impl Agent for VaultAgent {
    type Reach = Public<Self>;
    type Message = ();
    type Input = VaultReq;
    type Output = VaultResp;

    fn create(link: AgentLink<Self>) -> Self {
        log::debug!("creating vault agent...");
        Self {
            link,
            subscribers: HashSet::with_capacity(8),
            game: None,
            capsule_offset: 0,

            cached_state: None,
        }
    }

    fn update(&mut self, _: Self::Message) {}

    fn connected(&mut self, id: HandlerId) {
        self.subscribers.insert(id);
    }

    fn handle_input(&mut self, msg: Self::Input, _: HandlerId) {
        use VaultReq::*;
        log::debug!("worker msg {:?}", &msg);
        match msg {
            Init(init) => self.init(init),
            Event(event) => self.handle_event(event),
            ScrollCapsule(offset) => {
                self.capsule_offset = offset;
                self.invalidate_game_state();
                self.send_game_state();
            }
            GetState => self.send_game_state(),
        }
    }

    fn disconnected(&mut self, id: HandlerId) {
        self.subscribers.remove(&id);
        if self.subscribers.is_empty() {
            self.game = None;
            self.invalidate_game_state();
        }
    }

    fn name_of_resource() -> &'static str {
        "worker.js"
    }
}

impl VaultAgent {
    fn init(&mut self, init: InitDto) {
        let seed = init.seed();
        let flags = MemoryFlags::from_pairs(init.flags);

        let start_at = Instant::now();
        match VaultGame::from_embedded(seed, flags, &mut rand::thread_rng()) {
            Ok(game) => {
                log::debug!("{} puzzle setup in {:.02}s", seed, start_at.elapsed().as_secs_f64());
                self.game = Some(game);
                self.capsule_offset = 0;
                self.invalidate_game_state();
                self.send_game_state();
            }
            Err(err) => {
                log::error!("failed to set up the {} puzzle: {}", seed, err);
                self.game = None;
                self.invalidate_game_state();
                self.broadcast(VaultResp::InitFailed(err));
            }
        }
    }

    fn handle_event(&mut self, event: GameEvent) {
        // a new guess goes back to the first page of the capsule
        if matches!(event, GameEvent::Submit) {
            self.capsule_offset = 0;
        }

        let directives = match self.game.as_mut() {
            Some(game) => game.handle(event),
            None => {
                log::warn!("dropping {:?}, the game isn't set up", event);
                self.broadcast(VaultResp::NotStarted);
                return;
            }
        };

        for directive in directives {
            self.broadcast(VaultResp::Directive(directive));
        }

        self.invalidate_game_state();
        self.send_game_state();
    }

    fn send_game_state(&mut self) {
        match self.game_state() {
            Some(state) => {
                let msg = VaultResp::UpdateGameState(state.clone());
                self.broadcast(msg);
            }
            None => self.broadcast(VaultResp::NotStarted),
        }
    }

    fn game_state(&mut self) -> Option<&GameStateDto> {
        if self.cached_state.is_none() {
            self.cached_state = self.game
                .as_ref()
                .map(|game| GameStateDto::with_game(game, self.capsule_offset));
        }

        self.cached_state.as_ref()
    }

    fn invalidate_game_state(&mut self) {
        self.cached_state = None;
    }

    fn broadcast(&self, msg: VaultResp) {
        log::debug!("broadcast {:?}", msg);
        for sub in &self.subscribers {
            self.link.respond(*sub, msg.clone());
        }
    }
}
