//! UI screens.

mod app;
mod greeting_screen;

pub use app::App;
pub use greeting_screen::{GreetingAction, GreetingScreen, ServiceStatus};
