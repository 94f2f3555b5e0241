pub mod session_manager;

pub use session_manager::{SessionManager, CREDENTIALS_REQUIRED, REGISTRATION_FIELDS_REQUIRED};
