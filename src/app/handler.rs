use crate::app::{action::Action, command::Command};
use crate::domain::error::OverlayError;
use crate::domain::host::Navigator;
use crate::domain::suggest::SuggestionSource;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Everything the runtime talks to outside the process.
#[derive(Clone)]
pub struct Services {
    pub suggestions: Arc<dyn SuggestionSource>,
    pub navigator: Arc<dyn Navigator>,
}

pub fn handle_command(
    command: Command,
    services: &Services,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::FetchSuggestions { generation, query } => {
            let source = services.suggestions.clone();
            tokio::spawn(async move {
                let result = source
                    .suggest(&query)
                    .await
                    .map_err(|e| OverlayError::lookup(&e));
                let _ = tx
                    .send(Action::SuggestionsLoaded {
                        generation,
                        query,
                        result,
                    })
                    .await;
            });
        }
        Command::Navigate(destination) => {
            info!(name = %destination.name, url = %destination.url, "Navigating");
            let navigator = services.navigator.clone();
            tokio::spawn(async move {
                let url = destination.url.clone();
                let opened = tokio::task::spawn_blocking(move || navigator.open(&url)).await;
                let result = match opened {
                    Ok(Ok(())) => Ok(format!("Opened {destination}")),
                    Ok(Err(e)) => {
                        error!(error = %e, "Navigation failed");
                        Err(format!("Could not open {destination}: {e}"))
                    }
                    Err(e) => Err(format!("Navigation task failed: {e}")),
                };
                let _ = tx.send(Action::NavigationCompleted(result)).await;
            });
        }
    }
    Ok(())
}
