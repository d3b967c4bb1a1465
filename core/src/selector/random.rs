use super::*;

/// Uniform selection over the catalog that rejects and resamples the previous round's phrase.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomPhraseSelector {
    seed: u64,
}

impl RandomPhraseSelector {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl PhraseSelector for RandomPhraseSelector {
    fn select<'a>(self, catalog: &'a PhraseCatalog, previous: Option<&str>) -> &'a str {
        use rand::prelude::*;

        let phrases = catalog.phrases();
        let mut rng = SmallRng::seed_from_u64(self.seed);

        let Some(previous) = previous else {
            return &phrases[rng.random_range(0..phrases.len())];
        };

        // a catalog without any other phrase can only repeat
        if phrases.iter().all(|phrase| phrase == previous) {
            if phrases.len() > 1 {
                log::warn!("All {} phrases are identical, repeating phrase", phrases.len());
            }
            return &phrases[0];
        }

        loop {
            let candidate = &phrases[rng.random_range(0..phrases.len())];
            if candidate != previous {
                return candidate;
            }
        }
    }
}
