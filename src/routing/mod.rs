// ============================================================================
// ROUTING - Routes, access rules and the navigation seam
// ============================================================================

pub mod guard;
pub mod navigator;
pub mod route;

pub use guard::{evaluate, evaluate_route, nav_sections, GuardDecision, NavItem, NavSection};
pub use navigator::{BrowserNavigator, Navigator};
pub use route::{Access, Route};
