//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{ButtonState, Greeting, SubmissionEvent};
pub use errors::GreetError;
pub use ports::{GreetingForm, GreetingPort};
