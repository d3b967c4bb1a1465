use core::fmt;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Count type used for misses and tries.
pub type MissCount = u8;

/// Number of keys on the keyboard, one per letter of the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// A single ASCII letter, normalized to upper case.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    pub const fn new(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self((c as u8).to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// Position in the alphabet, `A` is 0.
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }

    pub const fn to_upper(self) -> char {
        self.0 as char
    }

    pub const fn to_lower(self) -> char {
        self.0.to_ascii_lowercase() as char
    }

    /// Case-insensitive comparison against a phrase character.
    pub const fn matches(self, c: char) -> bool {
        c.is_ascii() && (c as u8).to_ascii_uppercase() == self.0
    }

    pub fn all() -> impl Iterator<Item = Letter> {
        (b'A'..=b'Z').map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = GameError;

    fn try_from(c: char) -> Result<Self> {
        Self::new(c).ok_or(GameError::NotALetter(c))
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.to_upper()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_upper())
    }
}

/// Set of letters, used to track which keyboard keys are spent.
#[derive(Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySet(u32);

impl KeySet {
    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    /// Returns `true` if the letter was not already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        let was_present = self.contains(letter);
        self.0 |= Self::bit(letter);
        !was_present
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Letter> {
        Letter::all().filter(move |&letter| self.contains(letter))
    }

    const fn bit(letter: Letter) -> u32 {
        1 << letter.index()
    }
}

impl fmt::Debug for KeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Letter> for KeySet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}
