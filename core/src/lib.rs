#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use selector::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod selector;
mod types;

/// Incorrect guesses allowed per round unless configured otherwise.
pub const DEFAULT_MAX_MISSES: MissCount = 5;

const DEFAULT_PHRASES: &[&str] = &[
    "Document Object Model",
    "Front End Development",
    "HTML and CSS",
    "JavaScript",
    "Responsive Web Design",
];

/// Validated, non-empty list of phrases to draw rounds from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct PhraseCatalog {
    phrases: Vec<String>,
}

impl PhraseCatalog {
    pub fn new(phrases: Vec<String>) -> Result<Self> {
        if phrases.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        for phrase in &phrases {
            validate_phrase(phrase)?;
        }
        Ok(Self { phrases })
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

fn validate_phrase(phrase: &str) -> Result<()> {
    if let Some(c) = phrase.chars().find(|&c| c != ' ' && !c.is_ascii_alphabetic()) {
        return Err(GameError::InvalidCharacter(c));
    }
    if !phrase.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(GameError::EmptyPhrase);
    }
    Ok(())
}

impl Default for PhraseCatalog {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|&phrase| phrase.into()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for PhraseCatalog {
    type Error = GameError;

    fn try_from(phrases: Vec<String>) -> Result<Self> {
        Self::new(phrases)
    }
}

impl From<PhraseCatalog> for Vec<String> {
    fn from(catalog: PhraseCatalog) -> Self {
        catalog.phrases
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub catalog: PhraseCatalog,
    pub max_misses: MissCount,
}

impl GameConfig {
    pub fn new(catalog: PhraseCatalog, max_misses: MissCount) -> Self {
        Self {
            catalog,
            max_misses,
        }
    }

    pub fn with_max_misses(self, max_misses: MissCount) -> Self {
        Self { max_misses, ..self }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(PhraseCatalog::default(), DEFAULT_MAX_MISSES)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GuessOutcome {
    NoChange,
    Revealed,
    Missed,
    Won,
    Lost,
}

impl GuessOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn phrases(list: &[&str]) -> Vec<String> {
        list.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn default_catalog_is_valid() {
        let catalog = PhraseCatalog::default();

        assert_eq!(catalog.len(), 5);
        assert_eq!(PhraseCatalog::new(catalog.phrases().to_vec()), Ok(catalog));
    }

    #[test]
    fn catalog_rejects_bad_input() {
        assert_eq!(PhraseCatalog::new(vec![]), Err(GameError::EmptyCatalog));
        assert_eq!(
            PhraseCatalog::new(phrases(&["OK", "   "])),
            Err(GameError::EmptyPhrase)
        );
        assert_eq!(
            PhraseCatalog::new(phrases(&["Hello, World"])),
            Err(GameError::InvalidCharacter(','))
        );
    }

    #[test]
    fn catalog_deserializes_with_validation() {
        let catalog: PhraseCatalog = serde_json::from_str(r#"["A B", "CAT"]"#).unwrap();
        assert_eq!(catalog.phrases(), &phrases(&["A B", "CAT"])[..]);

        assert!(serde_json::from_str::<PhraseCatalog>("[]").is_err());
        assert!(serde_json::from_str::<PhraseCatalog>(r#"["R2D2"]"#).is_err());
    }

    #[test]
    fn default_config_allows_five_misses() {
        let config = GameConfig::default();
        assert_eq!(config.max_misses, DEFAULT_MAX_MISSES);
        assert_eq!(config.with_max_misses(2).max_misses, 2);
    }

    #[test]
    fn outcome_flags() {
        assert!(!GuessOutcome::NoChange.has_update());
        assert!(GuessOutcome::Missed.has_update());
        assert!(!GuessOutcome::Revealed.is_finished());
        assert!(GuessOutcome::Won.is_finished());
        assert!(GuessOutcome::Lost.is_finished());
    }
}
