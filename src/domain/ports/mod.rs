mod greeting_form;
mod greeting_port;

pub use greeting_form::GreetingForm;
pub use greeting_port::GreetingPort;
