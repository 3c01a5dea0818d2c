//! Data transfer objects for the application layer.

mod greet_dto;

pub use greet_dto::{GreetRequest, GreetResponse};
