use super::{action::Action, command::Command, state::AppState};
use crate::domain::error::OverlayError;
use crate::overlay::OverlayController;
use std::time::Instant;
use tracing::{debug, error};

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        Action::Tick => {
            if state
                .status_clear_time
                .is_some_and(|deadline| Instant::now() >= deadline)
            {
                state.status_message = None;
                state.last_error = None;
                state.status_clear_time = None;
            }
        }
        Action::Quit => {
            state.should_quit = true;
        }

        // --- Overlay lifecycle ---
        Action::MountOverlay => {
            if state.overlay.is_none() {
                state.overlay = Some(OverlayController::new(
                    state.preferences.clone(),
                    state.config.destination_template.clone(),
                ));
                debug!("Overlay mounted");
            }
        }
        Action::ToggleOverlay => {
            state.hovered_suggestion = None;
            match state.overlay.as_mut() {
                Some(overlay) => {
                    let visible = overlay.toggle();
                    debug!(visible, "Overlay toggled");
                }
                None => {
                    error!(error = %OverlayError::MissingOverlayElement, "Dropping toggle request");
                }
            }
        }
        Action::HideOverlay => {
            state.hovered_suggestion = None;
            if let Some(overlay) = state.overlay.as_mut() {
                overlay.hide();
            }
        }

        // --- Overlay input ---
        Action::OverlayKey(key) => {
            let overlay = visible_overlay(state)?;
            return overlay.on_key_down(key).effect.map(Command::from);
        }
        Action::EditInput(op) => {
            state.hovered_suggestion = None;
            let overlay = visible_overlay(state)?;
            return overlay.edit(op).map(Command::from);
        }
        Action::SelectSuggestion(index) => {
            state.hovered_suggestion = None;
            let overlay = visible_overlay(state)?;
            return overlay.select_suggestion(index).map(Command::from);
        }
        Action::HoverSuggestion(index) => {
            state.hovered_suggestion = index;
        }
        Action::Submit => {
            let overlay = visible_overlay(state)?;
            return overlay.submit().map(Command::from);
        }

        // --- Async Results ---
        Action::SuggestionsLoaded {
            generation,
            query,
            result,
        } => {
            let Some(overlay) = state.overlay.as_mut() else {
                return None;
            };
            if overlay.apply_suggestions(generation, result) {
                debug!(
                    query = %query,
                    count = overlay.state().suggestions.len(),
                    "Suggestions applied"
                );
                state.hovered_suggestion = None;
            }
        }
        Action::PreferenceChanged => {
            if let Some(overlay) = state.overlay.as_mut() {
                let theme = overlay.refresh_theme();
                debug!(theme = theme.label(), "Preference changed");
            }
        }
        Action::NavigationCompleted(result) => match result {
            Ok(msg) => state.set_status(msg),
            Err(err) => state.set_error(err),
        },
    }
    None
}

fn visible_overlay(state: &mut AppState) -> Option<&mut OverlayController> {
    state.overlay.as_mut().filter(|overlay| overlay.is_visible())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::host::MockPreferenceSource;
    use crate::domain::models::ThemeMode;
    use crate::overlay::{EditOp, OverlayKey};
    use std::sync::Arc;

    fn mounted() -> AppState {
        let mut state = AppState::default();
        update(&mut state, Action::MountOverlay);
        state
    }

    fn overlay(state: &AppState) -> &OverlayController {
        state.overlay.as_ref().unwrap()
    }

    #[test]
    fn test_toggle_before_mount_is_dropped() {
        let mut state = AppState::default();
        assert_eq!(update(&mut state, Action::ToggleOverlay), None);
        assert!(state.overlay.is_none());
        assert!(!state.overlay_visible());

        // The next toggle after mounting works.
        update(&mut state, Action::MountOverlay);
        update(&mut state, Action::ToggleOverlay);
        assert!(state.overlay_visible());
    }

    #[test]
    fn test_mount_is_idempotent() {
        let mut state = mounted();
        update(&mut state, Action::ToggleOverlay);
        update(&mut state, Action::MountOverlay);
        assert!(state.overlay_visible());
    }

    #[test]
    fn test_typing_issues_lookup() {
        let mut state = mounted();
        update(&mut state, Action::ToggleOverlay);
        let cmd = update(&mut state, Action::EditInput(EditOp::Insert('r')));
        assert_eq!(
            cmd,
            Some(Command::FetchSuggestions {
                generation: 1,
                query: "r".to_string()
            })
        );
    }

    #[test]
    fn test_edit_with_highlight_goes_to_field() {
        let mut state = mounted();
        update(&mut state, Action::ToggleOverlay);
        update(&mut state, Action::EditInput(EditOp::Insert('x')));
        update(
            &mut state,
            Action::SuggestionsLoaded {
                generation: 1,
                query: "x".to_string(),
                result: Ok(vec!["xa".into(), "xb".into()]),
            },
        );
        update(&mut state, Action::OverlayKey(OverlayKey::ArrowDown));
        update(&mut state, Action::HoverSuggestion(Some(1)));

        let cmd = update(&mut state, Action::EditInput(EditOp::Insert('z')));
        assert!(matches!(
            cmd,
            Some(Command::FetchSuggestions { generation: 2, .. })
        ));
        assert_eq!(state.hovered_suggestion, None);
        assert_eq!(overlay(&state).state().highlighted, None);
    }

    #[test]
    fn test_input_ignored_while_hidden() {
        let mut state = mounted();
        assert_eq!(update(&mut state, Action::EditInput(EditOp::Insert('r'))), None);
        assert_eq!(update(&mut state, Action::Submit), None);
        assert!(overlay(&state).state().input.is_empty());
    }

    #[test]
    fn test_stale_results_do_not_win() {
        let mut state = mounted();
        update(&mut state, Action::ToggleOverlay);
        update(&mut state, Action::EditInput(EditOp::Insert('a')));
        update(&mut state, Action::EditInput(EditOp::Insert('b')));

        update(
            &mut state,
            Action::SuggestionsLoaded {
                generation: 2,
                query: "ab".to_string(),
                result: Ok(vec!["abc".to_string()]),
            },
        );
        update(
            &mut state,
            Action::SuggestionsLoaded {
                generation: 1,
                query: "a".to_string(),
                result: Ok(vec!["apple".to_string()]),
            },
        );

        assert_eq!(overlay(&state).state().suggestions, vec!["abc".to_string()]);
    }

    #[test]
    fn test_enter_on_highlight_navigates() {
        let mut state = mounted();
        update(&mut state, Action::ToggleOverlay);
        update(&mut state, Action::EditInput(EditOp::Insert('x')));
        update(
            &mut state,
            Action::SuggestionsLoaded {
                generation: 1,
                query: "x".to_string(),
                result: Ok(vec!["one".into(), "two".into(), "three".into()]),
            },
        );
        update(&mut state, Action::OverlayKey(OverlayKey::ArrowDown));
        update(&mut state, Action::OverlayKey(OverlayKey::ArrowDown));
        let cmd = update(&mut state, Action::OverlayKey(OverlayKey::Enter));

        match cmd {
            Some(Command::Navigate(dest)) => {
                assert_eq!(dest.name, "two");
                assert_eq!(dest.url, "https://www.reddit.com/r/two");
            }
            other => panic!("Expected navigation, got {other:?}"),
        }
        assert!(overlay(&state).state().suggestions.is_empty());
    }

    #[test]
    fn test_hover_resets_on_new_results() {
        let mut state = mounted();
        update(&mut state, Action::ToggleOverlay);
        update(&mut state, Action::EditInput(EditOp::Insert('x')));
        update(&mut state, Action::HoverSuggestion(Some(0)));
        assert_eq!(state.hovered_suggestion, Some(0));

        update(
            &mut state,
            Action::SuggestionsLoaded {
                generation: 1,
                query: "x".to_string(),
                result: Ok(vec!["one".into()]),
            },
        );
        assert_eq!(state.hovered_suggestion, None);
    }

    #[test]
    fn test_preference_change_rethemes() {
        let mut prefs = MockPreferenceSource::new();
        let mut calls = 0;
        prefs.expect_theme_preference().returning(move || {
            calls += 1;
            (calls > 1).then(|| "2".to_string())
        });
        let mut state = AppState::new(Default::default(), Arc::new(prefs));
        update(&mut state, Action::MountOverlay);
        assert_eq!(state.theme_mode(), ThemeMode::Light);

        update(&mut state, Action::PreferenceChanged);
        assert_eq!(state.theme_mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_navigation_result_sets_status() {
        let mut state = mounted();
        update(
            &mut state,
            Action::NavigationCompleted(Ok("Opened r/rust".to_string())),
        );
        assert_eq!(state.status_message.as_deref(), Some("Opened r/rust"));

        update(
            &mut state,
            Action::NavigationCompleted(Err("xdg-open missing".to_string())),
        );
        assert_eq!(state.last_error.as_deref(), Some("xdg-open missing"));
        assert_eq!(state.status_message, None);
    }

    #[test]
    fn test_tick_clears_expired_status() {
        let mut state = mounted();
        state.set_status("hello");
        update(&mut state, Action::Tick);
        assert!(state.status_message.is_some());

        state.status_clear_time = Some(Instant::now());
        update(&mut state, Action::Tick);
        assert_eq!(state.status_message, None);
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::default();
        update(&mut state, Action::Quit);
        assert!(state.should_quit);
    }
}
