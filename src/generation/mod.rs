pub mod prompt;
pub mod sanitize;

pub use prompt::build_messages;
pub use sanitize::sanitize;
