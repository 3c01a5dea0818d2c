mod button;
mod input;

pub use button::SubmitButton;
pub use input::TextInput;
