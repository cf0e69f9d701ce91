use crate::overlay::{InputLine, OverlayState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

pub const INPUT_MAX_WIDTH: u16 = 52;
pub const BUTTON_WIDTH: u16 = 6;
pub const PLACEHOLDER: &str = "Enter community name...";
const FIELD_HEIGHT: u16 = 3;

/// Where each part of the bar lands for a given screen and suggestion count.
/// Shared by the renderer and mouse hit-testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayLayout {
    pub bar: Rect,
    pub input: Rect,
    pub button: Rect,
    pub suggestions: Rect,
    pub rows: Vec<Rect>,
}

impl OverlayLayout {
    pub fn compute(area: Rect, suggestion_count: usize) -> Self {
        let field_height = FIELD_HEIGHT.min(area.height);
        let input_width = INPUT_MAX_WIDTH.min(area.width.saturating_sub(BUTTON_WIDTH + 1));
        let button_width = BUTTON_WIDTH.min(area.width.saturating_sub(input_width + 1));
        let total = input_width + 1 + button_width;
        let x0 = area.x + area.width.saturating_sub(total) / 2;

        let input = Rect::new(x0, area.y, input_width, field_height);
        let button = Rect::new(x0 + input_width + 1, area.y, button_width, field_height)
            .intersection(area);

        let remaining = area.height.saturating_sub(field_height);
        let list_height = if suggestion_count == 0 {
            0
        } else {
            (suggestion_count as u16).saturating_add(2).min(remaining)
        };
        let suggestions = Rect::new(x0, area.y + field_height, input_width, list_height);

        let inner_rows = list_height.saturating_sub(2) as usize;
        let rows = (0..suggestion_count.min(inner_rows))
            .map(|i| {
                Rect::new(
                    suggestions.x + 1,
                    suggestions.y + 1 + i as u16,
                    suggestions.width.saturating_sub(2),
                    1,
                )
            })
            .collect();

        let bar = Rect::new(area.x, area.y, area.width, field_height + list_height);

        Self {
            bar,
            input,
            button,
            suggestions,
            rows,
        }
    }

    pub fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.rows.iter().position(|r| r.contains(pos))
    }

    pub fn is_button(&self, column: u16, row: u16) -> bool {
        self.button.contains(Position::new(column, row))
    }

    /// Terminal cursor position for the caret inside the input field.
    pub fn cursor_position(&self, input: &InputLine) -> Option<Position> {
        let inner = Block::default().borders(Borders::ALL).inner(self.input);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        let start = scroll_start(input.cursor(), inner.width);
        Some(Position::new(
            inner.x + (input.cursor() - start) as u16,
            inner.y,
        ))
    }
}

/// First visible char so that the caret stays inside a field `width` cells wide.
fn scroll_start(cursor: usize, width: u16) -> usize {
    cursor.saturating_sub((width as usize).saturating_sub(1))
}

pub struct OverlayBar<'a> {
    pub state: &'a OverlayState,
    pub theme: &'a Theme,
    pub hovered: Option<usize>,
}

impl OverlayBar<'_> {
    fn input_line(&self, width: u16) -> Line<'static> {
        let input = &self.state.input;
        if input.is_empty() {
            return Line::from(Span::styled(PLACEHOLDER, self.theme.placeholder));
        }

        let start = scroll_start(input.cursor(), width);
        let (sel_start, sel_end) = input.selection().unwrap_or((0, 0));
        let mut spans: Vec<Span> = Vec::new();
        let mut current = String::new();
        let mut current_selected = false;

        for (i, c) in input
            .text()
            .chars()
            .enumerate()
            .skip(start)
            .take(width as usize)
        {
            let selected = i >= sel_start && i < sel_end;
            if selected != current_selected && !current.is_empty() {
                spans.push(self.input_span(std::mem::take(&mut current), current_selected));
            }
            current_selected = selected;
            current.push(c);
        }
        if !current.is_empty() {
            spans.push(self.input_span(current, current_selected));
        }

        Line::from(spans)
    }

    fn input_span(&self, text: String, selected: bool) -> Span<'static> {
        let style = if selected {
            self.theme.input_selection
        } else {
            self.theme.input
        };
        Span::styled(text, style)
    }
}

impl Widget for OverlayBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let layout = OverlayLayout::compute(area, self.state.suggestions.len());

        Clear.render(layout.bar, buf);
        Block::default().style(self.theme.bar).render(layout.bar, buf);

        // --- Input ---
        let border_style = if self.state.input_focused {
            self.theme.border_focus
        } else {
            self.theme.border
        };
        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(self.theme.input);
        let inner = input_block.inner(layout.input);
        input_block.render(layout.input, buf);
        if inner.width > 0 && inner.height > 0 {
            buf.set_line(inner.x, inner.y, &self.input_line(inner.width), inner.width);
        }

        // --- Go button ---
        if layout.button.width > 0 && layout.button.height > 0 {
            Paragraph::new("Go")
                .alignment(Alignment::Center)
                .style(self.theme.button)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(self.theme.border),
                )
                .render(layout.button, buf);
        }

        // --- Suggestions ---
        if layout.suggestions.height == 0 {
            return;
        }
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border)
            .style(self.theme.suggestion)
            .render(layout.suggestions, buf);

        for (i, row) in layout.rows.iter().enumerate() {
            let style = if self.state.highlighted == Some(i) {
                self.theme.suggestion_highlight
            } else if self.hovered == Some(i) {
                self.theme.suggestion_hover
            } else {
                self.theme.suggestion
            };
            buf.set_style(*row, style);
            let name = &self.state.suggestions[i];
            buf.set_line(
                row.x,
                row.y,
                &Line::from(Span::styled(format!(" {name}"), style)),
                row.width,
            );
        }
    }
}
