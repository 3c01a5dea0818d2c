//! Greeting form submit handler.

use std::fmt;
use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::application::dto::GreetRequest;
use crate::application::use_cases::GreetUseCase;
use crate::domain::entities::{ButtonState, Greeting, SubmissionEvent};
use crate::domain::errors::GreetError;
use crate::domain::ports::GreetingForm;

/// Pending greeting call started by [`SubmitHandler::submit`].
pub type Submission = BoxFuture<'static, Result<Greeting, GreetError>>;

/// What the form looks like after a failed greeting call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Button stays disabled, greeting and error line untouched.
    #[default]
    LeaveDisabled,
    /// Button is re-enabled and the error is shown on the form.
    Recover,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeaveDisabled => write!(f, "leave-disabled"),
            Self::Recover => write!(f, "recover"),
        }
    }
}

/// Reacts to greeting form submissions.
pub struct SubmitHandler<F> {
    use_case: GreetUseCase,
    form: Arc<Mutex<F>>,
    failure_policy: FailurePolicy,
}

impl<F: GreetingForm + 'static> SubmitHandler<F> {
    /// Creates handler bound to one form.
    #[must_use]
    pub const fn new(
        use_case: GreetUseCase,
        form: Arc<Mutex<F>>,
        failure_policy: FailurePolicy,
    ) -> Self {
        Self {
            use_case,
            form,
            failure_policy,
        }
    }

    /// Returns the form this handler drives.
    #[must_use]
    pub const fn form(&self) -> &Arc<Mutex<F>> {
        &self.form
    }

    /// Handles one submission.
    ///
    /// Cancels default handling, reads the name and disables the button
    /// before returning. The returned future performs the single remote call
    /// and updates the form when it completes.
    pub fn submit(&self, event: &mut SubmissionEvent) -> Submission {
        event.prevent_default();

        let name = {
            let mut form = self.form.lock();
            let name = form.name_value();
            form.set_button_state(ButtonState::Disabled);
            name
        };

        let submission_id = event.id();
        debug!(%submission_id, name = %name, "Form submitted");

        let use_case = self.use_case.clone();
        let form = Arc::clone(&self.form);
        let failure_policy = self.failure_policy;

        async move {
            let result = use_case
                .execute(GreetRequest::new(name, submission_id))
                .await;

            let mut form = form.lock();
            match result {
                Ok(response) => {
                    form.set_button_state(ButtonState::Enabled);
                    form.set_greeting_text(response.greeting.as_str());
                    info!(%submission_id, "Greeting displayed");
                    Ok(response.greeting)
                }
                Err(e) => {
                    error!(%submission_id, error = %e, policy = %failure_policy, "Submission failed");
                    if failure_policy == FailurePolicy::Recover {
                        form.set_button_state(ButtonState::Enabled);
                        form.show_error(&e.user_message());
                    }
                    Err(e)
                }
            }
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::{MockGreetingPort, RecordingForm};
    use test_case::test_case;
    use tokio::sync::Notify;

    fn make_handler(
        port: Arc<MockGreetingPort>,
        form: RecordingForm,
        policy: FailurePolicy,
    ) -> SubmitHandler<RecordingForm> {
        SubmitHandler::new(
            GreetUseCase::new(port),
            Arc::new(Mutex::new(form)),
            policy,
        )
    }

    #[test_case("Ada" ; "plain_name")]
    #[test_case("" ; "empty_name")]
    #[test_case("  padded  " ; "whitespace_preserved")]
    #[test_case("Zoë Ōkami" ; "non_ascii")]
    #[tokio::test]
    async fn test_exactly_one_call_with_exact_name(name: &str) {
        let port = Arc::new(MockGreetingPort::new(true));
        let handler = make_handler(
            port.clone(),
            RecordingForm::with_name(name),
            FailurePolicy::default(),
        );

        let mut event = SubmissionEvent::new();
        handler.submit(&mut event).await.unwrap();

        assert_eq!(port.calls(), vec![name.to_string()]);
    }

    #[tokio::test]
    async fn test_default_is_prevented_before_call_completes() {
        let gate = Arc::new(Notify::new());
        let port = Arc::new(MockGreetingPort::new(true).with_gate(gate.clone()));
        let handler = make_handler(port, RecordingForm::with_name("Ada"), FailurePolicy::default());

        let mut event = SubmissionEvent::new();
        let submission = handler.submit(&mut event);
        assert!(event.is_default_prevented());

        gate.notify_one();
        submission.await.unwrap();
        assert!(event.is_default_prevented());
    }

    #[tokio::test]
    async fn test_button_disabled_while_call_pending() {
        let gate = Arc::new(Notify::new());
        let port = Arc::new(MockGreetingPort::new(true).with_gate(gate.clone()));
        let handler = make_handler(port.clone(), RecordingForm::with_name("Ada"), FailurePolicy::default());

        let mut event = SubmissionEvent::new();
        let submission = tokio::spawn(handler.submit(&mut event));

        assert_eq!(handler.form().lock().button, ButtonState::Disabled);

        gate.notify_one();
        submission.await.unwrap().unwrap();

        let form = handler.form().lock();
        assert_eq!(form.button, ButtonState::Enabled);
        assert_eq!(
            form.button_history,
            vec![ButtonState::Disabled, ButtonState::Enabled]
        );
        assert_eq!(port.calls().len(), 1);
    }

    #[test_case("Ada", "Hello, Ada!" ; "named")]
    #[test_case("", "Hello, !" ; "empty")]
    #[tokio::test]
    async fn test_output_shows_returned_text(name: &str, expected: &str) {
        let port = Arc::new(MockGreetingPort::new(true));
        let handler = make_handler(port, RecordingForm::with_name(name), FailurePolicy::default());

        let mut event = SubmissionEvent::new();
        let greeting = handler.submit(&mut event).await.unwrap();

        assert_eq!(greeting.as_str(), expected);
        let form = handler.form().lock();
        assert_eq!(form.greeting, expected);
        assert_eq!(form.button, ButtonState::Enabled);
    }

    #[tokio::test]
    async fn test_failure_leaves_button_disabled() {
        let port = Arc::new(MockGreetingPort::new(false));
        let handler = make_handler(
            port.clone(),
            RecordingForm::with_name("Ada").with_greeting("Hello, Grace!"),
            FailurePolicy::LeaveDisabled,
        );

        let mut event = SubmissionEvent::new();
        let result = handler.submit(&mut event).await;

        assert!(matches!(result, Err(GreetError::Network { .. })));
        let form = handler.form().lock();
        assert_eq!(form.button, ButtonState::Disabled);
        assert_eq!(form.greeting, "Hello, Grace!");
        assert!(form.error.is_none());
        assert_eq!(port.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_recover_policy_reenables_and_reports() {
        let port = Arc::new(MockGreetingPort::new(false));
        let handler = make_handler(
            port,
            RecordingForm::with_name("Ada").with_greeting("Hello, Grace!"),
            FailurePolicy::Recover,
        );

        let mut event = SubmissionEvent::new();
        let result = handler.submit(&mut event).await;

        assert!(result.is_err());
        let form = handler.form().lock();
        assert_eq!(form.button, ButtonState::Enabled);
        assert_eq!(form.greeting, "Hello, Grace!");
        assert_eq!(form.error.as_deref(), Some("Network error: mock failure"));
    }

    #[tokio::test]
    async fn test_latest_greeting_wins() {
        let port = Arc::new(MockGreetingPort::new(true));
        let handler = make_handler(port.clone(), RecordingForm::with_name("Ada"), FailurePolicy::default());

        handler.submit(&mut SubmissionEvent::new()).await.unwrap();
        handler.form().lock().name = "Grace".to_string();
        handler.submit(&mut SubmissionEvent::new()).await.unwrap();

        assert_eq!(handler.form().lock().greeting, "Hello, Grace!");
        assert_eq!(port.calls(), vec!["Ada".to_string(), "Grace".to_string()]);
    }

    #[test]
    fn test_failure_policy_parses_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            on_failure: FailurePolicy,
        }

        let parsed: Wrapper = toml::from_str(r#"on_failure = "recover""#).unwrap();
        assert_eq!(parsed.on_failure, FailurePolicy::Recover);
        assert_eq!(FailurePolicy::default().to_string(), "leave-disabled");
    }
}
