//! Round scenarios run under `wasm-bindgen-test`, the target the engine ships on.
#![cfg(target_arch = "wasm32")]

use phrasehunt_core::*;
use wasm_bindgen_test::*;

fn started(phrases: &[&str], max_misses: MissCount) -> PlayEngine {
    let catalog = PhraseCatalog::new(phrases.iter().map(|&p| p.to_string()).collect()).unwrap();
    let config = GameConfig::new(catalog, DEFAULT_MAX_MISSES).with_max_misses(max_misses);
    let mut engine = PlayEngine::new(config);
    engine.start_round(RandomPhraseSelector::new(3));
    engine
}

#[wasm_bindgen_test]
fn round_is_won_by_guessing_every_letter() {
    let mut engine = started(&["A B"], DEFAULT_MAX_MISSES);
    assert_eq!(engine.guess('a'), GuessOutcome::Revealed);
    assert_eq!(engine.guess('b'), GuessOutcome::Won);
    assert_eq!(engine.visible_text(), "A B");
    assert_eq!(engine.guess('c'), GuessOutcome::NoChange);
}

#[wasm_bindgen_test]
fn round_is_lost_when_tries_run_out() {
    let mut engine = started(&["CAT"], 2);
    assert_eq!(engine.guess('x'), GuessOutcome::Missed);
    assert_eq!(engine.guess('x'), GuessOutcome::NoChange);
    assert_eq!(engine.guess('y'), GuessOutcome::Lost);
    assert_eq!(engine.tries_left(), 0);
    assert_eq!(engine.try_slots().filter(|slot| slot.is_live()).count(), 0);
}

#[wasm_bindgen_test]
fn restart_picks_another_phrase_and_clears_keys() {
    let mut engine = started(&["CAT", "DOG"], 1);
    let first = engine.phrase().unwrap().to_string();
    engine.guess('z');
    assert!(engine.is_finished());

    engine.start_round(RandomPhraseSelector::new(4));
    assert_ne!(engine.phrase(), Some(first.as_str()));
    assert_eq!(engine.state(), EngineState::InProgress);
    assert!(engine.used_keys().is_empty());
    assert_eq!(engine.misses(), 0);
}
