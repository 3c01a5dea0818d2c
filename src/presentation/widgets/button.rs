//! Submit button widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Widget,
};

use crate::domain::entities::ButtonState;

/// Single-line button reflecting a [`ButtonState`].
#[derive(Debug, Clone)]
pub struct SubmitButton<'a> {
    label: &'a str,
    state: ButtonState,
}

impl<'a> SubmitButton<'a> {
    /// Creates button with label.
    #[must_use]
    pub const fn new(label: &'a str, state: ButtonState) -> Self {
        Self { label, state }
    }

    fn style(&self) -> Style {
        match self.state {
            ButtonState::Enabled => Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            ButtonState::Disabled => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        }
    }
}

impl Widget for SubmitButton<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let text = format!("[ {} ]", self.label);
        Span::styled(text, self.style()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_label() {
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);

        SubmitButton::new("Greet", ButtonState::Enabled).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "[");
        assert_eq!(buf[(2, 0)].symbol(), "G");
        assert_eq!(buf[(2, 0)].bg, Color::Cyan);
    }

    #[test]
    fn test_disabled_style() {
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);

        SubmitButton::new("Greet", ButtonState::Disabled).render(area, &mut buf);

        assert_eq!(buf[(2, 0)].fg, Color::DarkGray);
    }
}
