//! Greeting form screen.

use std::fmt::Write as _;

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::domain::entities::ButtonState;
use crate::domain::ports::GreetingForm;
use crate::presentation::events::EventHandler;
use crate::presentation::widgets::{SubmitButton, TextInput};

const DEFAULT_TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Reachability of the greeting service as last checked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ServiceStatus {
    /// Not checked.
    #[default]
    Unknown,
    /// Check in progress.
    Checking,
    /// Check succeeded.
    Online,
    /// Check failed.
    Unreachable(String),
}

/// Outcome of a key press on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreetingAction {
    None,
    Submit,
}

/// Greeting form UI.
pub struct GreetingScreen {
    name_input: TextInput,
    button: ButtonState,
    greeting: String,
    error_message: Option<String>,
    last_updated: Option<DateTime<Local>>,
    timestamp_format: String,
    service_status: ServiceStatus,
}

impl GreetingScreen {
    /// Creates new greeting screen.
    #[must_use]
    pub fn new() -> Self {
        let mut name_input = TextInput::new("Name").placeholder("Type a name to greet...");
        name_input.set_focused(true);

        Self {
            name_input,
            button: ButtonState::Enabled,
            greeting: String::new(),
            error_message: None,
            last_updated: None,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            service_status: ServiceStatus::Unknown,
        }
    }

    /// Sets the chrono format used for the last update time.
    #[must_use]
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Returns the current error message.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Returns the last checked service status.
    #[must_use]
    pub const fn service_status(&self) -> &ServiceStatus {
        &self.service_status
    }

    /// Records the result of a service health check.
    pub fn set_service_status(&mut self, status: ServiceStatus) {
        self.service_status = status;
    }

    /// Host default for a submission nobody cancelled: clear the input.
    pub fn apply_default_submit(&mut self) {
        self.name_input.clear();
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> GreetingAction {
        if EventHandler::is_submit_event(&key) {
            return if self.button.is_enabled() {
                GreetingAction::Submit
            } else {
                GreetingAction::None
            };
        }

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.name_input.input_char(c);
            }
            KeyCode::Backspace => self.name_input.backspace(),
            KeyCode::Delete => self.name_input.delete(),
            KeyCode::Left => self.name_input.move_left(),
            KeyCode::Right => self.name_input.move_right(),
            KeyCode::Home => self.name_input.move_start(),
            KeyCode::End => self.name_input.move_end(),
            _ => {}
        }

        GreetingAction::None
    }

    fn formatted_last_updated(&self) -> Option<String> {
        let updated = self.last_updated?;
        let mut text = String::new();
        if write!(text, "{}", updated.format(&self.timestamp_format)).is_err() {
            text.clear();
            let _ = write!(text, "{}", updated.format(DEFAULT_TIMESTAMP_FORMAT));
        }
        Some(text)
    }

    fn status_line(&self) -> Line<'_> {
        if self.button.is_disabled() {
            return Line::from(Span::styled(
                "Waiting for greeting...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ));
        }

        if let Some(message) = &self.error_message {
            return Line::from(Span::styled(
                format!("Error: {message}"),
                Style::default().fg(Color::Red),
            ));
        }

        match self.formatted_last_updated() {
            Some(time) => Line::from(Span::styled(
                format!("Updated at {time}"),
                Style::default().fg(Color::Green),
            )),
            None => Line::default(),
        }
    }

    fn service_line(&self) -> Line<'_> {
        let (text, color) = match &self.service_status {
            ServiceStatus::Unknown => ("not checked".to_string(), Color::DarkGray),
            ServiceStatus::Checking => ("checking...".to_string(), Color::Yellow),
            ServiceStatus::Online => ("online".to_string(), Color::Green),
            ServiceStatus::Unreachable(reason) => (format!("unreachable ({reason})"), Color::Red),
        };

        Line::from(vec![
            Span::styled("Service: ", Style::default().fg(Color::DarkGray)),
            Span::styled(text, Style::default().fg(color)),
        ])
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(16),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(50),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Greeter ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let [
            prompt_area,
            input_area,
            button_area,
            _,
            greeting_area,
            status_area,
            service_area,
            _,
            hints_area,
        ] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new("Enter your name to be greeted")
            .style(Style::default().fg(Color::White))
            .render(prompt_area, buf);

        (&self.name_input).render(input_area, buf);

        SubmitButton::new("Greet", self.button).render(button_area, buf);

        Paragraph::new(self.greeting.as_str())
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title("Greeting"),
            )
            .style(Style::default().add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: false })
            .render(greeting_area, buf);

        Paragraph::new(self.status_line()).render(status_area, buf);
        Paragraph::new(self.service_line()).render(service_area, buf);

        let hints = Line::from(vec![
            Span::styled("Enter: Greet", Style::default().fg(Color::DarkGray)),
            Span::raw(" | "),
            Span::styled("Esc: Quit", Style::default().fg(Color::DarkGray)),
        ]);
        Paragraph::new(hints).render(hints_area, buf);
    }
}

impl GreetingForm for GreetingScreen {
    fn name_value(&self) -> String {
        self.name_input.value().to_string()
    }

    fn button_state(&self) -> ButtonState {
        self.button
    }

    fn set_button_state(&mut self, state: ButtonState) {
        if state.is_disabled() {
            self.error_message = None;
        }
        self.button = state;
    }

    fn greeting_text(&self) -> &str {
        &self.greeting
    }

    fn set_greeting_text(&mut self, text: &str) {
        self.greeting = text.to_string();
        self.last_updated = Some(Local::now());
    }

    fn show_error(&mut self, message: &str) {
        self.error_message = Some(message.to_string());
    }
}

impl Default for GreetingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &GreetingScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}
