use alloc::string::String;
use core::num::Saturating;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    NoRound,
    InProgress,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Self::InProgress)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::NoRound
    }
}

type Board = SmallVec<[EngineCell; 32]>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    config: GameConfig,
    phrase: Option<String>,
    board: Board,
    used_keys: KeySet,
    misses: Saturating<MissCount>,
    state: EngineState,
}

impl PlayEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            phrase: None,
            board: Board::new(),
            used_keys: KeySet::new(),
            misses: Saturating(0),
            state: Default::default(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn phrase(&self) -> Option<&str> {
        self.phrase.as_deref()
    }

    /// Phrase skeleton in display order, spaces included.
    pub fn cells(&self) -> &[EngineCell] {
        &self.board
    }

    /// Only the letter cells, in order.
    pub fn letter_cells(&self) -> impl Iterator<Item = EngineCell> + '_ {
        self.board.iter().copied().filter(|cell| !cell.is_space())
    }

    pub fn misses(&self) -> MissCount {
        self.misses.0
    }

    pub fn max_misses(&self) -> MissCount {
        self.config.max_misses
    }

    pub fn tries_left(&self) -> MissCount {
        self.config.max_misses.saturating_sub(self.misses.0)
    }

    /// Remaining-tries indicator, exactly `max_misses` slots, spent from the end towards the start.
    pub fn try_slots(&self) -> impl Iterator<Item = TrySlot> + use<> {
        let tries_left = self.tries_left();
        (0..self.config.max_misses).map(move |slot| {
            if slot < tries_left {
                TrySlot::Live
            } else {
                TrySlot::Lost
            }
        })
    }

    pub fn used_keys(&self) -> KeySet {
        self.used_keys
    }

    pub fn is_used(&self, letter: Letter) -> bool {
        self.used_keys.contains(letter)
    }

    /// Whether a key would be accepted right now.
    pub fn can_guess(&self, letter: Letter) -> bool {
        self.state.is_in_progress() && !self.is_used(letter)
    }

    /// Rebuilds the phrase from what the player can currently see, hidden cells are skipped.
    pub fn visible_text(&self) -> String {
        self.board
            .iter()
            .filter_map(|cell| cell.visible_char())
            .collect()
    }

    pub fn start_round(&mut self, selector: impl PhraseSelector) {
        let previous = self.phrase.take();

        self.misses = Saturating(0);
        self.board.clear();
        self.used_keys.clear();

        let phrase: String = selector
            .select(&self.config.catalog, previous.as_deref())
            .into();
        self.board
            .extend(phrase.chars().map(EngineCell::from_phrase_char));
        log::debug!(
            "round started: {} letters, {} tries",
            self.letter_cells().count(),
            self.config.max_misses
        );

        self.phrase = Some(phrase);
        self.state = EngineState::InProgress;
    }

    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let Some(letter) = Letter::new(letter) else {
            log::debug!("ignored guess: {:?} is not a letter", letter);
            return GuessOutcome::NoChange;
        };

        if !self.state.is_in_progress() {
            log::debug!("ignored guess {}: no round in progress", letter);
            return GuessOutcome::NoChange;
        }

        if !self.used_keys.insert(letter) {
            log::debug!("ignored guess {}: already used", letter);
            return GuessOutcome::NoChange;
        }

        let revealed = self
            .board
            .iter_mut()
            .fold(0usize, |count, cell| count + usize::from(cell.reveal_if(letter)));

        if revealed == 0 && self.misses.0 < self.config.max_misses {
            self.misses += Saturating(1);
        }

        self.update_state();

        match self.state {
            EngineState::Lost => GuessOutcome::Lost,
            EngineState::Won => GuessOutcome::Won,
            _ if revealed == 0 => GuessOutcome::Missed,
            _ => GuessOutcome::Revealed,
        }
    }

    fn update_state(&mut self) {
        // running out of tries wins over completing the phrase
        if self.misses.0 >= self.config.max_misses {
            self.state = EngineState::Lost;
        } else if self.phrase.as_deref() == Some(self.visible_text().as_str()) {
            self.state = EngineState::Won;
        }
    }
}
