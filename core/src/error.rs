use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Phrase catalog is empty")]
    EmptyCatalog,
    #[error("Phrase has no letters to guess")]
    EmptyPhrase,
    #[error("Phrase contains unsupported character {0:?}")]
    InvalidCharacter(char),
    #[error("Not a letter: {0:?}")]
    NotALetter(char),
}

pub type Result<T> = core::result::Result<T, GameError>;
