//! Headless greeting form for one-shot runs.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::warn;

use crate::application::{FailurePolicy, GreetUseCase, SubmitHandler};
use crate::domain::entities::{ButtonState, Greeting, SubmissionEvent};
use crate::domain::errors::GreetError;
use crate::domain::ports::{GreetingForm, GreetingPort};

/// In-memory form whose name is fixed up front.
///
/// Errors shown on the form go to the log; the caller prints the result.
#[derive(Debug, Default)]
pub struct ConsoleForm {
    name: String,
    button: ButtonState,
    greeting: String,
}

impl ConsoleForm {
    /// Creates form with the name to submit.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl GreetingForm for ConsoleForm {
    fn name_value(&self) -> String {
        self.name.clone()
    }

    fn button_state(&self) -> ButtonState {
        self.button
    }

    fn set_button_state(&mut self, state: ButtonState) {
        self.button = state;
    }

    fn greeting_text(&self) -> &str {
        &self.greeting
    }

    fn set_greeting_text(&mut self, text: &str) {
        self.greeting = text.to_string();
    }

    fn show_error(&mut self, message: &str) {
        warn!(name = %self.name, "{message}");
    }
}

/// Submits `name` once through a [`ConsoleForm`] and returns the greeting.
///
/// # Errors
/// Returns error if the remote call fails.
pub async fn greet_once(
    greeting_port: Arc<dyn GreetingPort>,
    name: impl Into<String>,
    failure_policy: FailurePolicy,
) -> Result<Greeting, GreetError> {
    submit_console_form(greeting_port, ConsoleForm::new(name), failure_policy)
        .await
        .0
}

async fn submit_console_form(
    greeting_port: Arc<dyn GreetingPort>,
    form: ConsoleForm,
    failure_policy: FailurePolicy,
) -> (Result<Greeting, GreetError>, Arc<Mutex<ConsoleForm>>) {
    let form = Arc::new(Mutex::new(form));
    let handler = SubmitHandler::new(
        GreetUseCase::new(greeting_port),
        Arc::clone(&form),
        failure_policy,
    );

    let mut event = SubmissionEvent::new();
    let result = handler.submit(&mut event).await;
    (result, form)
}
