//! Presentation layer with UI components and event handling.

/// Headless form for one-shot runs.
pub mod console_form;
/// Event handling.
pub mod events;
/// UI screens.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use console_form::{ConsoleForm, greet_once};
pub use ui::{App, GreetingScreen};
