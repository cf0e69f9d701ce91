use crate::app::{action::Action, state::AppState, ui};
use crate::components::overlay_bar::OverlayLayout;
use crate::overlay::{EditOp, OverlayKey};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) => map_key(key, app_state),
        Event::Mouse(mouse) => map_mouse(mouse, app_state, terminal_size),
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // Global bindings
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }
    if app_state.keymap.is_toggle(&key) {
        return Some(Action::ToggleOverlay);
    }

    if !app_state.overlay_visible() {
        return app_state.keymap.get_action(key);
    }

    let plain = !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => Some(Action::HideOverlay),
        KeyCode::Down => Some(Action::OverlayKey(OverlayKey::ArrowDown)),
        KeyCode::Up => Some(Action::OverlayKey(OverlayKey::ArrowUp)),
        KeyCode::Enter => Some(Action::OverlayKey(OverlayKey::Enter)),
        KeyCode::Char(c) if plain => Some(Action::EditInput(EditOp::Insert(c))),
        KeyCode::Backspace => Some(Action::EditInput(EditOp::Backspace)),
        KeyCode::Delete => Some(Action::EditInput(EditOp::Delete)),
        KeyCode::Left => Some(Action::EditInput(EditOp::Left)),
        KeyCode::Right => Some(Action::EditInput(EditOp::Right)),
        KeyCode::Home => Some(Action::EditInput(EditOp::Home)),
        KeyCode::End => Some(Action::EditInput(EditOp::End)),
        _ => None,
    }
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState, terminal_size: Size) -> Option<Action> {
    let overlay = app_state.overlay.as_ref().filter(|o| o.is_visible())?;
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    let layout = OverlayLayout::compute(
        ui::get_layout(area).body,
        overlay.state().suggestions.len(),
    );

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = layout.row_at(mouse.column, mouse.row) {
                Some(Action::SelectSuggestion(index))
            } else if layout.is_button(mouse.column, mouse.row) {
                Some(Action::Submit)
            } else {
                None
            }
        }
        MouseEventKind::Moved => {
            let hovered = layout.row_at(mouse.column, mouse.row);
            (hovered != app_state.hovered_suggestion).then_some(Action::HoverSuggestion(hovered))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer::update;

    const SIZE: Size = Size {
        width: 80,
        height: 24,
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn open_state() -> AppState {
        let mut state = AppState::default();
        update(&mut state, Action::MountOverlay);
        update(&mut state, Action::ToggleOverlay);
        state
    }

    fn with_suggestions(state: &mut AppState, names: &[&str]) {
        update(state, Action::EditInput(EditOp::Insert('z')));
        update(
            state,
            Action::SuggestionsLoaded {
                generation: 1,
                query: "z".to_string(),
                result: Ok(names.iter().map(|s| s.to_string()).collect()),
            },
        );
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_global_keys() {
        let hidden = AppState::default();
        assert_eq!(map_event_to_action(ctrl('c'), &hidden, SIZE), Some(Action::Quit));
        assert_eq!(
            map_event_to_action(ctrl('k'), &hidden, SIZE),
            Some(Action::ToggleOverlay)
        );

        let open = open_state();
        assert_eq!(map_event_to_action(ctrl('c'), &open, SIZE), Some(Action::Quit));
        assert_eq!(
            map_event_to_action(ctrl('k'), &open, SIZE),
            Some(Action::ToggleOverlay)
        );
    }

    #[test]
    fn test_hidden_uses_host_keymap() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('q')), &state, SIZE),
            Some(Action::Quit)
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('/')), &state, SIZE),
            Some(Action::ToggleOverlay)
        );
        assert_eq!(map_event_to_action(key(KeyCode::Down), &state, SIZE), None);
    }

    #[test]
    fn test_visible_routes_keys_to_overlay() {
        let state = open_state();
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('q')), &state, SIZE),
            Some(Action::EditInput(EditOp::Insert('q')))
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Down), &state, SIZE),
            Some(Action::OverlayKey(OverlayKey::ArrowDown))
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Up), &state, SIZE),
            Some(Action::OverlayKey(OverlayKey::ArrowUp))
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Enter), &state, SIZE),
            Some(Action::OverlayKey(OverlayKey::Enter))
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Backspace), &state, SIZE),
            Some(Action::EditInput(EditOp::Backspace))
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Esc), &state, SIZE),
            Some(Action::HideOverlay)
        );
        assert_eq!(map_event_to_action(ctrl('x'), &state, SIZE), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let state = open_state();
        let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_event_to_action(Event::Key(release), &state, SIZE), None);
    }

    #[test]
    fn test_mouse_click_and_hover() {
        let mut state = open_state();
        with_suggestions(&mut state, &["zig", "zsh", "zelda"]);

        let area = Rect::new(0, 0, SIZE.width, SIZE.height);
        let layout = OverlayLayout::compute(ui::get_layout(area).body, 3);
        let row = layout.rows[2];

        assert_eq!(
            map_event_to_action(
                mouse(MouseEventKind::Down(MouseButton::Left), row.x + 1, row.y),
                &state,
                SIZE
            ),
            Some(Action::SelectSuggestion(2))
        );
        assert_eq!(
            map_event_to_action(mouse(MouseEventKind::Moved, row.x + 1, row.y), &state, SIZE),
            Some(Action::HoverSuggestion(Some(2)))
        );

        let button = layout.button;
        assert_eq!(
            map_event_to_action(
                mouse(
                    MouseEventKind::Down(MouseButton::Left),
                    button.x + 1,
                    button.y + 1
                ),
                &state,
                SIZE
            ),
            Some(Action::Submit)
        );

        // Unchanged hover produces nothing.
        update(&mut state, Action::HoverSuggestion(Some(2)));
        assert_eq!(
            map_event_to_action(mouse(MouseEventKind::Moved, row.x + 1, row.y), &state, SIZE),
            None
        );
    }

    #[test]
    fn test_mouse_ignored_while_hidden() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(
                mouse(MouseEventKind::Down(MouseButton::Left), 10, 5),
                &state,
                SIZE
            ),
            None
        );
    }
}
