//! Greeting use case implementation.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::application::dto::{GreetRequest, GreetResponse};
use crate::domain::errors::GreetError;
use crate::domain::ports::GreetingPort;

/// Calls the remote greeting operation.
#[derive(Clone)]
pub struct GreetUseCase {
    greeting_port: Arc<dyn GreetingPort>,
}

impl GreetUseCase {
    /// Creates new greeting use case.
    #[must_use]
    pub const fn new(greeting_port: Arc<dyn GreetingPort>) -> Self {
        Self { greeting_port }
    }

    /// Executes one greeting call.
    ///
    /// # Errors
    /// Returns error if the remote call fails.
    pub async fn execute(&self, request: GreetRequest) -> Result<GreetResponse, GreetError> {
        debug!(
            submission_id = %request.submission_id,
            name = %request.name,
            "Calling greeting service"
        );

        let started = Instant::now();
        let greeting = self
            .greeting_port
            .greet(&request.name)
            .await
            .map_err(|e| {
                warn!(submission_id = %request.submission_id, error = %e, "Greeting call failed");
                e
            })?;
        let elapsed = started.elapsed();

        info!(
            submission_id = %request.submission_id,
            elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            "Greeting received"
        );

        Ok(GreetResponse::new(greeting))
    }

    /// Checks whether the greeting service is reachable.
    ///
    /// # Errors
    /// Returns error if the service cannot be reached.
    pub async fn check_health(&self) -> Result<(), GreetError> {
        debug!("Checking greeting service health");
        self.greeting_port.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockGreetingPort;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_successful_greeting() {
        let port = Arc::new(MockGreetingPort::new(true));
        let use_case = GreetUseCase::new(port.clone());

        let response = use_case
            .execute(GreetRequest::new("Ada".to_string(), Uuid::new_v4()))
            .await
            .unwrap();

        assert_eq!(response.greeting.as_str(), "Hello, Ada!");
        assert_eq!(port.calls(), vec!["Ada".to_string()]);
    }

    #[tokio::test]
    async fn test_failure_is_propagated() {
        let port = Arc::new(MockGreetingPort::new(false));
        let use_case = GreetUseCase::new(port);

        let result = use_case
            .execute(GreetRequest::new("Ada".to_string(), Uuid::new_v4()))
            .await;

        assert!(matches!(result, Err(GreetError::Network { .. })));
    }

    #[tokio::test]
    async fn test_health_check() {
        let port = Arc::new(MockGreetingPort::new(true));
        let use_case = GreetUseCase::new(port.clone());
        assert!(use_case.check_health().await.is_ok());

        port.set_should_succeed(false);
        assert!(use_case.check_health().await.is_err());
    }
}
