//! Domain error types.

mod greet_error;

pub use greet_error::GreetError;
