use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use jumpbar::app::{
    config::{self, Config},
    handler::Services,
    r#loop::run_loop,
    state::AppState,
};
use jumpbar::domain::host::{FixedPreference, PreferenceSource};
use jumpbar::infrastructure::{
    browser::SystemBrowser, preference_file::FilePreferences, suggest_http::HttpSuggestionSource,
};

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = config::get_config_dir().and_then(|dir| jumpbar::logging::init(&dir));
    setup_panic_hook();

    // Everything that can fail happens before the terminal enters raw mode.
    let config = Config::load();
    info!(?config, "Starting");

    let preferences: Arc<dyn PreferenceSource> = match config.preference_path() {
        Some(path) => Arc::new(FilePreferences::new(path)),
        None => Arc::new(FixedPreference::default()),
    };
    let services = Services {
        suggestions: Arc::new(HttpSuggestionSource::new(
            config.suggest_endpoint.clone(),
            Duration::from_millis(config.request_timeout_ms),
        )?),
        navigator: Arc::new(SystemBrowser),
    };
    let app_state = AppState::new(config, preferences);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, services).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "Event loop failed");
        eprintln!("{err:?}");
    }

    Ok(())
}
