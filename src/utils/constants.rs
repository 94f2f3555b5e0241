/// localStorage key holding the bearer token
pub const STORAGE_KEY_TOKEN: &str = "token";

/// localStorage key holding the JSON-serialized admin profile
pub const STORAGE_KEY_ADMIN: &str = "admin";

/// Key written by older builds of the console; cleared alongside the session
pub const STORAGE_KEY_LEGACY_USER: &str = "user";

/// Rows shown in a table before "show all" is pressed
pub const DEFAULT_VISIBLE_ROWS: usize = 10;

/// HTTP status that ends the session
pub const STATUS_UNAUTHORIZED: u16 = 401;
