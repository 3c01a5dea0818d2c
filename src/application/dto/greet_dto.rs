//! Greeting DTOs.

use uuid::Uuid;

use crate::domain::entities::Greeting;

/// Greeting request data.
#[derive(Debug, Clone)]
pub struct GreetRequest {
    /// Name exactly as typed.
    pub name: String,
    /// Correlation id of the originating submission.
    pub submission_id: Uuid,
}

impl GreetRequest {
    /// Creates new greeting request.
    #[must_use]
    pub const fn new(name: String, submission_id: Uuid) -> Self {
        Self {
            name,
            submission_id,
        }
    }
}

/// Greeting response data.
#[derive(Debug, Clone)]
pub struct GreetResponse {
    /// Text returned by the service.
    pub greeting: Greeting,
}

impl GreetResponse {
    /// Creates new greeting response.
    #[must_use]
    pub const fn new(greeting: Greeting) -> Self {
        Self { greeting }
    }
}
