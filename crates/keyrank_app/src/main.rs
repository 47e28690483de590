mod app;
mod input;
mod terminal;
mod ui;

use std::env;

use keyrank_engine::{ClientSettings, EngineHandle};
use keyrank_logging::LogDestination;

fn main() -> anyhow::Result<()> {
    // The TUI owns the terminal, so logs go to ./keyrank.log.
    keyrank_logging::initialize(LogDestination::File);

    let settings = settings_from_env();
    if settings.api_key.is_empty() {
        // Not pre-validated: the endpoint rejects the request with a 401
        // and the user sees the generic error.
        log::warn!("OPENAI_API_KEY is not set; submissions will be rejected by the endpoint");
    }
    let engine = EngineHandle::new(settings);

    let mut terminal = terminal::setup_terminal()?;
    let result = app::run(&mut terminal, &engine);
    terminal::restore_terminal(&mut terminal)?;
    result
}

/// Reads process-wide configuration once; everything downstream takes it
/// as an explicit [`ClientSettings`] value.
fn settings_from_env() -> ClientSettings {
    let mut settings = ClientSettings {
        api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
        ..ClientSettings::default()
    };
    if let Ok(model) = env::var("KEYRANK_MODEL") {
        settings.model = model;
    }
    if let Ok(endpoint) = env::var("KEYRANK_ENDPOINT") {
        settings.endpoint = endpoint;
    }
    settings
}
