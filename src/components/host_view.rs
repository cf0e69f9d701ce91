use crate::app::state::AppState;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

/// The page the bar floats over.
pub struct HostView<'a> {
    pub app_state: &'a AppState,
    pub theme: &'a Theme,
}

impl Widget for HostView<'_> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        Block::default().style(self.theme.host).render(area, buf);

        let toggle = self.app_state.keymap.toggle_label();
        let lines = vec![
            Line::from(Span::styled(" JUMPBAR ", self.theme.host_title)),
            Line::from(""),
            Line::from(vec![
                Span::raw("Press "),
                Span::styled(toggle, self.theme.host_key),
                Span::raw(" or "),
                Span::styled("/", self.theme.host_key),
                Span::raw(" to jump to a community"),
            ]),
            Line::from(vec![
                Span::raw("Press "),
                Span::styled("q", self.theme.host_key),
                Span::raw(" to quit"),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!("{} theme", self.app_state.theme_mode().label()),
                self.theme.dimmed,
            )),
        ];

        let height = lines.len() as u16;
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(self.theme.host);

        let centered_area = Rect {
            x: area.x,
            y: (area.y + area.height / 2).saturating_sub(height / 2),
            width: area.width,
            height: height.min(area.height),
        };

        if centered_area.width > 0 && centered_area.height > 0 {
            paragraph.render(centered_area, buf);
        }
    }
}
