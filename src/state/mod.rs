// ============================================================================
// STATE MODULE - Rc<RefCell> state with change notifications
// ============================================================================

pub mod auth_state;
pub mod reactivity;

pub use auth_state::*;
pub use reactivity::*;
