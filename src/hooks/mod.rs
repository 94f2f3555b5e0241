pub mod use_auth;
pub mod use_mounted;

pub use use_auth::{use_auth, AuthContext, AuthProvider};
pub use use_mounted::{use_mounted, MountedFlag};
