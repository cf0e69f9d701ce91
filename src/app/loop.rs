use crate::app::{
    action::Action,
    handler::{handle_command, Services},
    input::map_event_to_action,
    reducer,
    state::AppState,
    ui,
};

use anyhow::Result;
use crossterm::event::{self, Event};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use ratatui::{backend::Backend, Terminal};
use std::path::Path;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{debug, info, warn};

const TICK_RATE: Duration = Duration::from_millis(250);
const PREFERENCE_DEBOUNCE: Duration = Duration::from_millis(200);
const INPUT_POLL: Duration = Duration::from_millis(100);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState,
    services: Services,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || {
        // Polls so the reader notices the loop has gone away and lets the runtime shut down.
        while !event_tx.is_closed() {
            match event::poll(INPUT_POLL).and_then(|ready| ready.then(event::read).transpose()) {
                Ok(Some(evt)) => {
                    if event_tx.blocking_send(Ok(evt)).is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    let _ = event_tx.blocking_send(Err(e));
                    break;
                }
            }
        }
    });

    run_loop_with_events(terminal, app_state, services, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState,
    services: Services,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    // Kept alive for the duration of the loop.
    let _watcher = app_state
        .config
        .preference_path()
        .and_then(|path| watch_preferences(&path, action_tx.clone()));

    let mut mounted = app_state.overlay.is_some();

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &app_state);
        })?;

        if !mounted {
            reducer::update(&mut app_state, Action::MountOverlay);
            mounted = true;
        }

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = res?;
                map_event_to_action(event, &app_state, terminal.size()?)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::Quit = action {
                break;
            }

            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, &services, action_tx.clone())?;
            }
        }
    }

    info!("Exiting");
    Ok(())
}

/// Watches the directory holding the preference file and sends a debounced
/// [`Action::PreferenceChanged`] whenever the file is touched.
fn watch_preferences(path: &Path, tx: mpsc::Sender<Action>) -> Option<RecommendedWatcher> {
    let dir = path.parent()?.to_path_buf();
    let file_name = path.file_name()?.to_os_string();
    if !dir.exists() {
        debug!(dir = %dir.display(), "Preference directory missing, not watching");
        return None;
    }

    let (notify_tx, mut notify_rx) = mpsc::channel(1);
    let watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
            if event
                .paths
                .iter()
                .any(|p| p.file_name() == Some(file_name.as_os_str()))
            {
                let _ = notify_tx.try_send(());
            }
        }
    });

    let mut watcher = match watcher {
        Ok(watcher) => watcher,
        Err(e) => {
            warn!(error = %e, "Could not create preference watcher");
            return None;
        }
    };
    if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        warn!(dir = %dir.display(), error = %e, "Could not watch preference directory");
        return None;
    }

    tokio::spawn(async move {
        let mut pending = false;

        loop {
            if pending {
                tokio::select! {
                    Some(()) = notify_rx.recv() => {}
                    () = tokio::time::sleep(PREFERENCE_DEBOUNCE) => {
                        if tx.send(Action::PreferenceChanged).await.is_err() {
                            break;
                        }
                        pending = false;
                    }
                }
            } else if notify_rx.recv().await.is_some() {
                pending = true;
            } else {
                break;
            }
        }
    });

    debug!(dir = %dir.display(), "Watching preference file");
    Some(watcher)
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
