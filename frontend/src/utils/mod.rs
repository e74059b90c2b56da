pub mod error_message;
pub mod time;

pub use error_message::describe_error;
