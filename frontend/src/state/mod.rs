pub mod form;
pub mod status;

pub use form::FormState;
pub use status::ViewStatus;
