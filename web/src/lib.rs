use clap::Parser;
use phrasehunt_core::PhraseCatalog;
use wasm_bindgen::prelude::*;

mod game;
mod utils;

/// Attribute on the root element carrying an optional JSON phrase list.
const CATALOG_ATTR: &str = "data-phrases";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: game::GameProps,
}

fn parse_catalog(json: &str) -> Option<PhraseCatalog> {
    match serde_json::from_str(json) {
        Ok(catalog) => Some(catalog),
        Err(err) => {
            log::error!("invalid {}, using default phrases: {}", CATALOG_ATTR, err);
            None
        }
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let (mut args, args_error) = match Args::try_parse_from(location_hash.split(['#', '&'])) {
        Ok(args) => (args, None),
        Err(err) => (Args::parse_from([""]), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = args_error {
        log::error!("ignoring url arguments: {}", err);
    }
    log::debug!("seed: {:?}, tries: {:?}", args.game.seed, args.game.tries);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    args.game.catalog = root
        .get_attribute(CATALOG_ATTR)
        .and_then(|json| parse_catalog(&json));

    log::debug!("App started");
    yew::Renderer::<game::GameView>::with_root_and_props(root, args.game).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(hash: &str) -> Args {
        Args::try_parse_from(hash.split(['#', '&'])).unwrap()
    }

    #[test]
    fn url_hash_arguments_are_parsed() {
        let args = parse("#--seed=42&--tries=3");
        assert_eq!(args.game.seed, Some(42));
        assert_eq!(args.game.tries, Some(3));
        assert_eq!(args.game.catalog, None);

        let args = parse("");
        assert_eq!(args.game.seed, None);
        assert_eq!(args.game.tries, None);
    }

    #[test]
    fn bad_url_hash_is_rejected() {
        assert!(Args::try_parse_from("#--tries=many".split(['#', '&'])).is_err());
    }

    #[test]
    fn catalog_attribute_is_validated() {
        let catalog = parse_catalog(r#"["CAT", "A B"]"#).unwrap();
        assert_eq!(catalog.len(), 2);

        assert_eq!(parse_catalog("[]"), None);
        assert_eq!(parse_catalog(r#"["no digits 4 u"]"#), None);
        assert_eq!(parse_catalog("not json"), None);
    }
}
