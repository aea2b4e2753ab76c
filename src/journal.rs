// src/journal.rs
//
// Initialisation du journal (env_logger), une seule fois par processus.
// RUST_LOG reste prioritaire sur le niveau passé en paramètre.

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

fn niveau(s: &str) -> LevelFilter {
    match s.trim().to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

pub fn init_journal(niveau_defaut: &str) {
    let filtre = niveau(niveau_defaut);

    INIT.call_once(|| {
        let mut builder = Builder::new();
        builder
            .filter_level(filtre)
            // UI : le bruit des couches graphiques reste en warn
            .filter_module("eframe", LevelFilter::Warn)
            .filter_module("egui_glow", LevelFilter::Warn)
            .filter_module("winit", LevelFilter::Warn)
            .parse_env(Env::default())
            .format_timestamp_secs()
            .try_init()
            .ok();
    });
}
