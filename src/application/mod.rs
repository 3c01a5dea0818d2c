//! Application layer with use cases, handlers and DTOs.

/// Data transfer objects.
pub mod dto;
/// Form event handlers.
pub mod handlers;
/// Use case implementations.
pub mod use_cases;

pub use dto::{GreetRequest, GreetResponse};
pub use handlers::{FailurePolicy, SubmitHandler};
pub use use_cases::GreetUseCase;
