//! Domain entities.

mod button_state;
mod greeting;
mod submission;

pub use button_state::ButtonState;
pub use greeting::Greeting;
pub use submission::SubmissionEvent;
