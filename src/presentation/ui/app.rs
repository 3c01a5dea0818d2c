//! Main application orchestrator.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use futures_util::future::Either;
use parking_lot::Mutex;
use ratatui::{DefaultTerminal, Frame};
use tracing::{debug, error, info, warn};

use crate::application::handlers::Submission;
use crate::application::{FailurePolicy, GreetUseCase, SubmitHandler};
use crate::domain::entities::{Greeting, SubmissionEvent};
use crate::domain::errors::GreetError;
use crate::domain::ports::GreetingPort;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::ui::greeting_screen::{GreetingAction, GreetingScreen, ServiceStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

pub struct App {
    state: AppState,
    screen: Arc<Mutex<GreetingScreen>>,
    submit_handler: SubmitHandler<GreetingScreen>,
    use_case: GreetUseCase,
    in_flight: Option<Submission>,
}

impl App {
    #[must_use]
    pub fn new(
        greeting_port: Arc<dyn GreetingPort>,
        screen: GreetingScreen,
        failure_policy: FailurePolicy,
    ) -> Self {
        let use_case = GreetUseCase::new(greeting_port);
        let screen = Arc::new(Mutex::new(screen));
        let submit_handler =
            SubmitHandler::new(use_case.clone(), Arc::clone(&screen), failure_policy);

        Self {
            state: AppState::Running,
            screen,
            submit_handler,
            use_case,
            in_flight: None,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(
        mut self,
        terminal: &mut DefaultTerminal,
        check_health: bool,
    ) -> color_eyre::Result<()> {
        if check_health {
            self.screen.lock().set_service_status(ServiceStatus::Checking);
            terminal.draw(|frame| self.render(frame))?;
            self.check_service().await;
        }

        self.run_event_loop(terminal).await?;

        info!("Application exiting normally");
        Ok(())
    }

    async fn check_service(&mut self) {
        let status = match self.use_case.check_health().await {
            Ok(()) => {
                info!("Greeting service is reachable");
                ServiceStatus::Online
            }
            Err(e) => {
                warn!(error = %e, "Greeting service health check failed");
                ServiceStatus::Unreachable(e.user_message())
            }
        };
        self.screen.lock().set_service_status(status);
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            let submission = match self.in_flight.as_mut() {
                Some(submission) => Either::Left(submission),
                None => Either::Right(std::future::pending::<Result<Greeting, GreetError>>()),
            };
            let terminal_event = terminal_events.next();

            tokio::select! {
                biased;

                result = submission => {
                    self.in_flight = None;
                    Self::finish_submission(result);
                }

                maybe_event = terminal_event => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_terminal_event(event) == EventResult::Exit {
                                self.state = AppState::Exiting;
                            }
                        }
                        Some(Err(e)) => return Err(e.into()),
                        None => self.state = AppState::Exiting,
                    }
                }
            }

            terminal.draw(|frame| self.render(frame))?;
        }

        Ok(())
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            _ => EventResult::Continue,
        }
    }

    fn render(&self, frame: &mut Frame) {
        let screen = self.screen.lock();
        frame.render_widget(&*screen, frame.area());
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        let action = self.screen.lock().handle_key(key);

        match action {
            GreetingAction::Submit => {
                self.dispatch_submission();
                EventResult::Consumed
            }
            GreetingAction::None => EventResult::Continue,
        }
    }

    fn dispatch_submission(&mut self) {
        if self.in_flight.is_some() {
            debug!("Greeting already in flight, ignoring submission");
            return;
        }

        let mut event = SubmissionEvent::new();
        let submission = self.submit_handler.submit(&mut event);

        if !event.is_default_prevented() {
            self.screen.lock().apply_default_submit();
        }

        self.in_flight = Some(submission);
    }

    fn finish_submission(result: Result<Greeting, GreetError>) {
        match result {
            Ok(greeting) => info!(greeting = %greeting, "Submission completed"),
            Err(e) => error!(
                error = %e,
                network = e.is_network_error(),
                "Submission failed"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ButtonState;
    use crate::domain::ports::GreetingForm;
    use crate::domain::ports::mocks::MockGreetingPort;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_app(port: Arc<MockGreetingPort>, policy: FailurePolicy) -> App {
        App::new(port, GreetingScreen::new(), policy)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_app_creation() {
        let app = make_app(Arc::new(MockGreetingPort::new(true)), FailurePolicy::default());

        assert_eq!(app.state, AppState::Running);
        assert!(app.in_flight.is_none());
    }

    #[test]
    fn test_escape_exits() {
        let mut app = make_app(Arc::new(MockGreetingPort::new(true)), FailurePolicy::default());
        assert_eq!(app.handle_key(key(KeyCode::Esc)), EventResult::Exit);
    }

    #[tokio::test]
    async fn test_enter_submits_and_updates_screen() {
        let port = Arc::new(MockGreetingPort::new(true));
        let mut app = make_app(port.clone(), FailurePolicy::default());
        type_text(&mut app, "Ada");

        assert_eq!(app.handle_key(key(KeyCode::Enter)), EventResult::Consumed);
        assert_eq!(app.screen.lock().button_state(), ButtonState::Disabled);
        assert_eq!(app.screen.lock().name_value(), "Ada");

        let result = app.in_flight.take().unwrap().await;
        App::finish_submission(result);

        let screen = app.screen.lock();
        assert_eq!(screen.greeting_text(), "Hello, Ada!");
        assert_eq!(screen.button_state(), ButtonState::Enabled);
        assert_eq!(port.calls(), vec!["Ada".to_string()]);
    }

    #[tokio::test]
    async fn test_second_enter_while_pending_is_ignored() {
        let port = Arc::new(MockGreetingPort::new(true));
        let mut app = make_app(port.clone(), FailurePolicy::default());

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.handle_key(key(KeyCode::Enter)), EventResult::Continue);

        app.in_flight.take().unwrap().await.unwrap();
        assert_eq!(port.calls(), vec![String::new()]);
    }

    #[tokio::test]
    async fn test_failure_keeps_form_locked() {
        let port = Arc::new(MockGreetingPort::new(false));
        let mut app = make_app(port.clone(), FailurePolicy::LeaveDisabled);
        type_text(&mut app, "Ada");

        app.handle_key(key(KeyCode::Enter));
        assert!(app.in_flight.take().unwrap().await.is_err());

        assert_eq!(app.handle_key(key(KeyCode::Enter)), EventResult::Continue);
        assert!(app.in_flight.is_none());
        assert_eq!(app.screen.lock().greeting_text(), "");
        assert_eq!(port.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_failure_with_recover_allows_retry() {
        let port = Arc::new(MockGreetingPort::new(false));
        let mut app = make_app(port.clone(), FailurePolicy::Recover);
        type_text(&mut app, "Ada");

        app.handle_key(key(KeyCode::Enter));
        assert!(app.in_flight.take().unwrap().await.is_err());
        assert!(app.screen.lock().error_message().is_some());

        port.set_should_succeed(true);
        assert_eq!(app.handle_key(key(KeyCode::Enter)), EventResult::Consumed);
        app.in_flight.take().unwrap().await.unwrap();

        assert_eq!(app.screen.lock().greeting_text(), "Hello, Ada!");
        assert_eq!(port.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_check_service_records_status() {
        let port = Arc::new(MockGreetingPort::new(false));
        let mut app = make_app(port, FailurePolicy::default());

        app.check_service().await;

        assert!(matches!(
            app.screen.lock().service_status(),
            ServiceStatus::Unreachable(_)
        ));
    }
}
