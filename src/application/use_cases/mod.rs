//! Use case implementations.

mod greet_use_case;

pub use greet_use_case::GreetUseCase;
