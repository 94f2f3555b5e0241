// ============================================================================
// SESSION MANAGER - Owner of the admin session lifecycle
// ============================================================================
// Only writer of the auth status. Login, logout and the client's 401 event
// all go through here, and this is the only place that redirects because of
// a session change.
// ============================================================================

use std::cell::Cell;
use std::rc::{Rc, Weak};

use serde_json::Value;

use crate::models::{Admin, LoginResponse, RegisterRequest, Session};
use crate::routing::{BrowserNavigator, Navigator, Route};
use crate::services::{auth_service, ApiClient, ApiError, ApiResult, UnauthorizedEvent};
use crate::state::{AuthStatus, ReactiveState, SubscriptionId};
use crate::stores::SessionStore;

pub const CREDENTIALS_REQUIRED: &str = "Email and Password required";
pub const REGISTRATION_FIELDS_REQUIRED: &str = "Name, Email and Password required";
const LOGIN_SUPERSEDED: &str = "Session ended before sign-in completed";

struct Inner {
    client: ApiClient,
    store: SessionStore,
    navigator: Rc<dyn Navigator>,
    status: ReactiveState<AuthStatus>,
    hydrated: Cell<bool>,
    /// Bumped whenever a session ends; a login that started under an older
    /// epoch is not applied.
    epoch: Cell<u64>,
    unauthorized_listener: Cell<Option<SubscriptionId>>,
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(id) = self.unauthorized_listener.take() {
            self.client.remove_unauthorized_listener(id);
        }
    }
}

/// Cheap to clone; clones share one session.
#[derive(Clone)]
pub struct SessionManager {
    inner: Rc<Inner>,
}

impl PartialEq for SessionManager {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl SessionManager {
    pub fn new(client: ApiClient, navigator: Rc<dyn Navigator>) -> Self {
        let inner = Rc::new(Inner {
            store: client.session_store().clone(),
            client,
            navigator,
            status: ReactiveState::new(AuthStatus::Hydrating),
            hydrated: Cell::new(false),
            epoch: Cell::new(0),
            unauthorized_listener: Cell::new(None),
        });

        let weak: Weak<Inner> = Rc::downgrade(&inner);
        let id = inner.client.on_unauthorized(move |event| {
            if let Some(inner) = weak.upgrade() {
                SessionManager { inner }.handle_unauthorized(event);
            }
        });
        inner.unauthorized_listener.set(Some(id));

        Self { inner }
    }

    /// Manager for the running app: localStorage, `fetch`, History API
    pub fn browser() -> Self {
        let client = ApiClient::browser(SessionStore::browser());
        Self::new(client, Rc::new(BrowserNavigator))
    }

    // ========================================================================
    // LIFECYCLE
    // ========================================================================

    /// Reads the persisted session once. Later calls return the current
    /// status without touching storage.
    pub fn hydrate(&self) -> AuthStatus {
        if self.inner.hydrated.replace(true) {
            return self.status();
        }

        let session = self.inner.store.read();
        if session.is_none() {
            // Drop half-written leftovers so the client stops sending them
            self.inner.store.clear();
        }

        let status = AuthStatus::from_session(session);
        match status.admin() {
            Some(admin) => log::info!("✅ Restored session for {} ({})", admin.email, admin.role),
            None => log::info!("🔓 No stored session"),
        }
        self.inner.status.set(status.clone());
        status
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<Admin> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return ApiResult::failure(ApiError::validation(CREDENTIALS_REQUIRED));
        }

        let started_at = self.inner.epoch.get();
        log::info!("🔐 Signing in {}", email);

        let LoginResponse { token, admin } =
            match auth_service::login(&self.inner.client, email, password).await {
                ApiResult::Success(response) => response,
                ApiResult::Failure(error) => {
                    log::error!("❌ Sign-in failed: {}", error);
                    return ApiResult::failure(error);
                }
            };

        if self.inner.epoch.get() != started_at {
            log::warn!("⚠️ Discarding sign-in response, the session ended while it was in flight");
            return ApiResult::failure(ApiError::Superseded(LOGIN_SUPERSEDED.to_string()));
        }

        if let Err(e) = self.inner.store.save(&token, &admin) {
            log::error!("❌ Could not persist session: {}", e);
            return ApiResult::failure(e.into());
        }

        log::info!("✅ Signed in as {} ({})", admin.email, admin.role);
        self.inner.hydrated.set(true);
        self.inner
            .status
            .set(AuthStatus::Authenticated(Session::new(token, admin.clone())));
        self.inner.navigator.navigate(Route::Dashboard);

        ApiResult::Success(admin)
    }

    /// Safe to call any number of times
    pub fn logout(&self) {
        log::info!("👋 Signing out");
        self.end_session();
    }

    fn handle_unauthorized(&self, event: &UnauthorizedEvent) {
        log::warn!("🔒 {} {} was rejected, session expired", event.method, event.path);
        self.end_session();
    }

    fn end_session(&self) {
        self.inner.epoch.set(self.inner.epoch.get() + 1);
        self.inner.store.clear();
        self.inner.hydrated.set(true);
        if self.status() != AuthStatus::Unauthenticated {
            self.inner.status.set(AuthStatus::Unauthenticated);
        }
        self.inner.navigator.navigate(Route::Login);
    }

    /// Creates an admin account. The current session is left as it is.
    pub async fn register(&self, request: RegisterRequest) -> ApiResult<Value> {
        let missing = [&request.name, &request.email, &request.password]
            .iter()
            .any(|field| field.trim().is_empty());
        if missing {
            return ApiResult::failure(ApiError::validation(REGISTRATION_FIELDS_REQUIRED));
        }
        auth_service::register(&self.inner.client, &request).await
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn status(&self) -> AuthStatus {
        self.inner.status.get()
    }

    pub fn session(&self) -> Option<Session> {
        self.inner.status.with(|status| status.session().cloned())
    }

    pub fn admin(&self) -> Option<Admin> {
        self.inner.status.with(|status| status.admin().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.status.with(AuthStatus::is_authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.inner.status.with(AuthStatus::is_loading)
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&AuthStatus) + 'static,
    {
        self.inner.status.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.status.unsubscribe(id)
    }

    pub fn client(&self) -> &ApiClient {
        &self.inner.client
    }

    pub fn navigate(&self, route: Route) {
        self.inner.navigator.navigate(route);
    }
}
