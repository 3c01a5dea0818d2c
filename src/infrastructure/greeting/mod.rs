//! Greeting service client.

mod client;
mod dto;

pub use client::HttpGreetingClient;
