use crate::*;
pub use random::*;

mod random;

pub trait PhraseSelector {
    /// Picks the phrase for the next round, `previous` is the phrase of the round before, if any.
    fn select<'a>(self, catalog: &'a PhraseCatalog, previous: Option<&str>) -> &'a str;
}
