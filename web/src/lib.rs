use clap::Parser;
use wasm_bindgen::prelude::*;

mod game;
mod utils;

pub use game::{GameProps, GameView};

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: GameProps,
}

/// Reads settings from the URL fragment, e.g. `#-vv&--intensity=60`.
fn parse_args(location_hash: &str) -> Result<Args, clap::Error> {
    let args = location_hash
        .split(['#', '&'])
        .filter(|arg| !arg.is_empty());
    Args::try_parse_from(std::iter::once("michi").chain(args))
}

#[cfg_attr(not(test), wasm_bindgen(start))]
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

    let (args, parse_error) = match parse_args(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::default(), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = parse_error {
        log::warn!("ignoring URL settings {:?}: {}", location_hash, err);
    }
    log::debug!("settings: {:?}", args.game);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<GameView>::with_root_and_props(root, args.game).render();
}
