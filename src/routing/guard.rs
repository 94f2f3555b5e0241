// ============================================================================
// GUARD - What a protected view does for the current session
// ============================================================================

use super::route::{Access, Route};
use crate::models::Admin;
use crate::state::AuthStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not known yet: neutral placeholder, no redirect
    Placeholder,
    Render,
    Redirect(Route),
}

pub fn evaluate(status: &AuthStatus, access: Access) -> GuardDecision {
    match (status, access) {
        (_, Access::Public) => GuardDecision::Render,
        (AuthStatus::Hydrating, _) => GuardDecision::Placeholder,
        (AuthStatus::Unauthenticated, _) => GuardDecision::Redirect(Route::Login),
        (AuthStatus::Authenticated(session), Access::SuperAdmin) if !session.is_super_admin() => {
            GuardDecision::Redirect(Route::Dashboard)
        }
        (AuthStatus::Authenticated(_), _) => GuardDecision::Render,
    }
}

pub fn evaluate_route(status: &AuthStatus, route: Route) -> GuardDecision {
    evaluate(status, route.access())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub route: Route,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    pub label: &'static str,
    pub items: Vec<NavItem>,
}

fn item(route: Route) -> NavItem {
    NavItem {
        title: route.title(),
        route,
    }
}

/// Sidebar entries for `admin`; "Admin Control" is super-admin only
pub fn nav_sections(admin: &Admin) -> Vec<NavSection> {
    let mut sections = vec![NavSection {
        label: "Overview",
        items: vec![
            item(Route::Dashboard),
            item(Route::Customers),
            item(Route::Bookings),
            item(Route::Subscriptions),
            item(Route::Vendors),
        ],
    }];

    if admin.is_super_admin() {
        sections.push(NavSection {
            label: "Admin Control",
            items: vec![item(Route::AdminManagement)],
        });
    }

    sections
}
