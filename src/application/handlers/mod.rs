//! Form event handlers.

mod submit_handler;

pub use submit_handler::{FailurePolicy, Submission, SubmitHandler};
