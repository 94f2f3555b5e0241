// ============================================================================
// AUTH STATE - Lifecycle of the admin session
// ============================================================================
//
//   Hydrating ──hydrate()──▶ Authenticated ◀──login()── Unauthenticated
//                    │              │                        ▲
//                    └──────────────┴──logout() / 401────────┘
//
// ============================================================================

use crate::models::{Admin, Session};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthStatus {
    /// Storage not read yet
    #[default]
    Hydrating,
    Authenticated(Session),
    Unauthenticated,
}

impl AuthStatus {
    pub fn from_session(session: Option<Session>) -> Self {
        match session {
            Some(session) => AuthStatus::Authenticated(session),
            None => AuthStatus::Unauthenticated,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AuthStatus::Hydrating)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthStatus::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthStatus::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn admin(&self) -> Option<&Admin> {
        self.session().map(|s| &s.admin)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuthStatus::Hydrating => "hydrating",
            AuthStatus::Authenticated(_) => "authenticated",
            AuthStatus::Unauthenticated => "unauthenticated",
        }
    }
}
