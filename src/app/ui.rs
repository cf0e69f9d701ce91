use crate::app::state::AppState;
use crate::components::host_view::HostView;
use crate::components::overlay_bar::{OverlayBar, OverlayLayout};
use crate::theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        body: main[1],
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let theme = Theme::from_mode(app_state.theme_mode());
    let layout = get_layout(f.area());

    // --- Header ---
    if layout.header.height > 0 {
        let label = format!(" {} ", app_state.theme_mode().label());
        let padding = (layout.header.width as usize).saturating_sub(label.len() + 9);
        let header = Paragraph::new(Line::from(vec![
            Span::styled(" JUMPBAR ", theme.host_title),
            Span::styled(" ".repeat(padding), theme.status),
            Span::styled(label, theme.status),
        ]))
        .style(theme.status);
        f.render_widget(header, layout.header);
    }

    // --- Body ---
    f.render_widget(
        HostView {
            app_state,
            theme: &theme,
        },
        layout.body,
    );

    if let Some(overlay) = app_state.overlay.as_ref().filter(|o| o.is_visible()) {
        let state = overlay.state();
        f.render_widget(
            OverlayBar {
                state,
                theme: &theme,
                hovered: app_state.hovered_suggestion,
            },
            layout.body,
        );

        if state.input_focused {
            let bar = OverlayLayout::compute(layout.body, state.suggestions.len());
            if let Some(pos) = bar.cursor_position(&state.input) {
                if layout.body.contains(pos) {
                    f.set_cursor_position(pos);
                }
            }
        }
    }

    // --- Footer ---
    if layout.footer.height > 0 {
        let footer = if let Some(err) = &app_state.last_error {
            Line::from(Span::styled(format!(" Error: {err} "), theme.status_error))
        } else if let Some(msg) = &app_state.status_message {
            Line::from(Span::styled(format!(" {msg} "), theme.status))
        } else if app_state.overlay_visible() {
            Line::from(vec![
                Span::styled(" ↑↓", theme.host_key),
                Span::raw(" select  "),
                Span::styled("Enter", theme.host_key),
                Span::raw(" go  "),
                Span::styled("Esc", theme.host_key),
                Span::raw(" close"),
            ])
        } else {
            Line::from(vec![
                Span::styled(format!(" {}", app_state.keymap.toggle_label()), theme.host_key),
                Span::raw(" open  "),
                Span::styled("q", theme.host_key),
                Span::raw(" quit"),
            ])
        };
        f.render_widget(Paragraph::new(footer).style(theme.status), layout.footer);
    }
}
