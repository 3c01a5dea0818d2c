//! Host form port definition.

use crate::domain::entities::ButtonState;

/// Controls of the greeting form as seen by the submit handler.
///
/// Implemented by every host that can display the form; the handler receives
/// a shared reference at construction instead of looking controls up.
pub trait GreetingForm: Send {
    /// Returns the current value of the name input.
    fn name_value(&self) -> String;

    /// Returns the submit button state.
    fn button_state(&self) -> ButtonState;

    /// Sets the submit button state.
    fn set_button_state(&mut self, state: ButtonState);

    /// Returns the visible greeting text.
    fn greeting_text(&self) -> &str;

    /// Replaces the visible greeting text.
    fn set_greeting_text(&mut self, text: &str);

    /// Surfaces a failure message next to the form.
    fn show_error(&mut self, message: &str);
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// In-memory form recording every button transition.
    #[derive(Debug, Default)]
    pub struct RecordingForm {
        pub name: String,
        pub button: ButtonState,
        pub greeting: String,
        pub error: Option<String>,
        pub button_history: Vec<ButtonState>,
    }

    impl RecordingForm {
        /// Creates form with the name already typed.
        pub fn with_name(name: impl Into<String>) -> Self {
            Self {
                name: name.into(),
                ..Self::default()
            }
        }

        /// Sets the greeting shown before any submission.
        pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
            self.greeting = greeting.into();
            self
        }
    }

    impl GreetingForm for RecordingForm {
        fn name_value(&self) -> String {
            self.name.clone()
        }

        fn button_state(&self) -> ButtonState {
            self.button
        }

        fn set_button_state(&mut self, state: ButtonState) {
            self.button = state;
            self.button_history.push(state);
        }

        fn greeting_text(&self) -> &str {
            &self.greeting
        }

        fn set_greeting_text(&mut self, text: &str) {
            self.greeting = text.to_string();
        }

        fn show_error(&mut self, message: &str) {
            self.error = Some(message.to_string());
        }
    }
}
