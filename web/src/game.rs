use crate::utils::*;
use clap::Args;
use gloo::events::EventListener;
use phrasehunt_core as game;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// On-screen keyboard layout.
const QWERTY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewGameState {
    Ready,
    Active,
    Won,
    Lost,
}

impl From<game::EngineState> for ViewGameState {
    fn from(state: game::EngineState) -> Self {
        use game::EngineState::*;
        match state {
            NoRound => Self::Ready,
            InProgress => Self::Active,
            Won => Self::Won,
            Lost => Self::Lost,
        }
    }
}

impl ViewGameState {
    /// Overlay shown over the board, `None` while a round is being played.
    const fn overlay(self) -> Option<OverlayText> {
        use ViewGameState::*;
        match self {
            Ready => Some(OverlayText {
                class: "start",
                message: "Click the button to play!",
                action: "Start Game",
            }),
            Active => None,
            Won => Some(OverlayText {
                class: "win",
                message: "Congratulations! You won!",
                action: "Play Again",
            }),
            Lost => Some(OverlayText {
                class: "lose",
                message: "Better luck next time!",
                action: "Play Again",
            }),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct OverlayText {
    class: &'static str,
    message: &'static str,
    action: &'static str,
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum ViewKeyState {
    Available,
    Chosen,
    Locked,
}

impl ViewKeyState {
    fn of(engine: &game::PlayEngine, letter: game::Letter) -> Self {
        if engine.is_used(letter) {
            Self::Chosen
        } else if engine.can_guess(letter) {
            Self::Available
        } else {
            Self::Locked
        }
    }

    const fn is_disabled(self) -> bool {
        !matches!(self, Self::Available)
    }
}

/// Maps a `KeyboardEvent.key` value to a letter, named keys like "Enter" are ignored.
fn key_letter(key: &str) -> Option<game::Letter> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => game::Letter::new(c),
        _ => None,
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    StartRound,
    Guess(game::Letter),
}

#[derive(Properties, Clone, PartialEq)]
struct KeyProps {
    letter: game::Letter,
    key_state: ViewKeyState,
    callback: Callback<game::Letter>,
}

#[function_component(KeyView)]
fn key_component(props: &KeyProps) -> Html {
    let KeyProps {
        letter,
        key_state,
        callback,
    } = props.clone();

    let class = classes!("key", matches!(key_state, ViewKeyState::Chosen).then_some("chosen"));
    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("key click: {}", letter);
        callback.emit(letter);
    });

    html! {
        <button {class} disabled={key_state.is_disabled()} {onclick}>{letter.to_lower().to_string()}</button>
    }
}

fn cell_view(cell: game::EngineCell) -> Html {
    use game::EngineCell::*;
    match cell {
        Space => html! { <li class="space">{"\u{a0}"}</li> },
        Hidden(_) => html! { <li class="letter"/> },
        Revealed(c) => html! { <li class="letter show">{c.to_string()}</li> },
    }
}

fn try_view(slot: game::TrySlot) -> Html {
    let (state, symbol) = if slot.is_live() { ("live", "♥") } else { ("lost", "♡") };
    html! {
        <li class="tries"><span class={classes!("heart", state)}>{symbol}</span></li>
    }
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Force a seed instead of random, later rounds count up from it
    #[arg(short, long)]
    #[prop_or_default]
    pub seed: Option<u64>,

    /// Incorrect guesses allowed per round
    #[arg(short, long)]
    #[prop_or_default]
    pub tries: Option<game::MissCount>,

    /// Phrase catalog override, read from the page rather than the URL
    #[arg(skip)]
    #[prop_or_default]
    pub catalog: Option<game::PhraseCatalog>,
}

impl GameProps {
    fn config(&self) -> game::GameConfig {
        let config = game::GameConfig::new(
            self.catalog.clone().unwrap_or_default(),
            game::DEFAULT_MAX_MISSES,
        );
        match self.tries {
            Some(tries) => config.with_max_misses(tries),
            None => config,
        }
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    engine: game::PlayEngine,
    forced_seed: Option<u64>,
    _keypress_listener: EventListener,
}

impl GameView {
    fn next_seed(&mut self) -> u64 {
        match self.forced_seed.as_mut() {
            Some(seed) => {
                let current = *seed;
                *seed = seed.wrapping_add(1);
                current
            }
            None => js_random_seed(),
        }
    }

    fn get_game_state(&self) -> ViewGameState {
        self.engine.state().into()
    }

    fn start_round(&mut self) -> bool {
        let seed = self.next_seed();
        log::debug!(
            "seed: {}, picking from {} phrases",
            seed,
            self.engine.config().catalog.len()
        );
        self.engine.start_round(game::RandomPhraseSelector::new(seed));
        true
    }

    fn guess(&mut self, letter: game::Letter) -> bool {
        let outcome = self.engine.guess(letter.into());
        log::debug!("guess {}: {:?}", letter, outcome);
        if outcome.is_finished() {
            log::info!(
                "round over after {} misses: {:?}",
                self.engine.misses(),
                self.engine.state()
            );
        }
        outcome.has_update()
    }

    /// Forwards physical key presses to the on-screen keyboard.
    fn create_keypress_listener(ctx: &Context<Self>) -> EventListener {
        let link = ctx.link().clone();
        EventListener::new(&gloo::utils::body(), "keypress", move |event| {
            let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            if let Some(letter) = key_letter(&event.key()) {
                log::trace!("keypress: {}", letter);
                link.send_message(Msg::Guess(letter));
            }
        })
    }

    fn keyboard_view(&self, ctx: &Context<Self>) -> Html {
        let callback = ctx.link().callback(Msg::Guess);
        html! {
            <div id="qwerty">
                {
                    for QWERTY_ROWS.iter().map(|row| html! {
                        <div class="keyrow">
                            {
                                for row.chars().filter_map(game::Letter::new).map(|letter| {
                                    let key_state = ViewKeyState::of(&self.engine, letter);
                                    let callback = callback.clone();
                                    html! { <KeyView {letter} {key_state} {callback}/> }
                                })
                            }
                        </div>
                    })
                }
            </div>
        }
    }

    fn overlay_view(&self, ctx: &Context<Self>) -> Html {
        let Some(overlay) = self.get_game_state().overlay() else {
            return html! {};
        };

        let cb_start = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::StartRound
        });

        html! {
            <BodyPortal>
                <div id="overlay" class={overlay.class}>
                    <h2 class="title">{"Phrase Hunter"}</h2>
                    <p class="message">{overlay.message}</p>
                    <button id="start" class="btn__reset" onclick={cb_start}>{overlay.action}</button>
                </div>
            </BodyPortal>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            engine: game::PlayEngine::new(props.config()),
            forced_seed: props.seed,
            _keypress_listener: GameView::create_keypress_listener(ctx),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            StartRound => self.start_round(),
            Guess(letter) => self.guess(letter),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="main-container">
                <div id="phrase" class="section">
                    <ul>
                        { for self.engine.cells().iter().copied().map(cell_view) }
                    </ul>
                </div>
                { self.keyboard_view(ctx) }
                <div id="scoreboard" class="section">
                    <ol>
                        { for self.engine.try_slots().map(try_view) }
                    </ol>
                </div>
                { self.overlay_view(ctx) }
            </div>
        }
    }
}
