use serde::{Deserialize, Serialize};

use crate::Letter;

/// Canonical player-visible state of one phrase position.
///
/// Letter cells keep the character as written in the phrase so it can be shown with its original case.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineCell {
    Space,
    Hidden(char),
    Revealed(char),
}

impl EngineCell {
    pub(crate) const fn from_phrase_char(c: char) -> Self {
        if c == ' ' { Self::Space } else { Self::Hidden(c) }
    }

    pub const fn is_space(self) -> bool {
        matches!(self, Self::Space)
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden(_))
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    /// Character shown to the player, `None` while hidden.
    pub const fn visible_char(self) -> Option<char> {
        match self {
            Self::Space => Some(' '),
            Self::Hidden(_) => None,
            Self::Revealed(c) => Some(c),
        }
    }

    /// Reveals the cell if it holds `letter`, returns whether it changed.
    pub(crate) fn reveal_if(&mut self, letter: Letter) -> bool {
        match *self {
            Self::Hidden(c) if letter.matches(c) => {
                *self = Self::Revealed(c);
                true
            }
            _ => false,
        }
    }
}

/// State of one slot in the remaining-tries indicator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrySlot {
    Live,
    Lost,
}

impl TrySlot {
    pub const fn is_live(self) -> bool {
        matches!(self, Self::Live)
    }
}
