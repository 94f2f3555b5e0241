//! Fakes for the browser seams: transport, storage and navigation.
//! Plus a string renderer for components; effects never run there.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::executor::block_on;
use yew::{BaseComponent, LocalServerRenderer};

use crate::config::AppConfig;
use crate::models::{Admin, AdminRole};
use crate::routing::{Navigator, Route};
use crate::services::transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use crate::services::ApiClient;
use crate::stores::SessionStore;
use crate::utils::MemoryStorage;
use crate::viewmodels::SessionManager;

type Outcome = Result<HttpResponse, TransportError>;

/// Replays queued outcomes in order and records every request
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    outcomes: Rc<RefCell<VecDeque<Outcome>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, outcome: Outcome) {
        self.outcomes.borrow_mut().push_back(outcome);
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.push(Ok(HttpResponse::new(status, body)));
    }

    pub fn respond_json(&self, status: u16, body: serde_json::Value) {
        self.respond(status, &body.to_string());
    }

    pub fn fail(&self, error: TransportError) {
        self.push(Err(error));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.borrow().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".to_string())))
    }
}

#[derive(Clone)]
pub struct RecordingNavigator {
    visited: Rc<RefCell<Vec<Route>>>,
    current: Rc<RefCell<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self {
            visited: Rc::new(RefCell::new(Vec::new())),
            current: Rc::new(RefCell::new("/".to_string())),
        }
    }

    pub fn visited(&self) -> Vec<Route> {
        self.visited.borrow().clone()
    }

    pub fn last(&self) -> Option<Route> {
        self.visited.borrow().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.visited.borrow_mut().push(route);
        *self.current.borrow_mut() = route.path().to_string();
    }

    fn current_path(&self) -> String {
        self.current.borrow().clone()
    }
}

pub fn sample_admin() -> Admin {
    Admin {
        id: "1".to_string(),
        name: "Priya".to_string(),
        email: "a@x.com".to_string(),
        role: AdminRole::Admin,
        status: None,
    }
}

pub fn sample_super_admin() -> Admin {
    Admin {
        id: "2".to_string(),
        name: "Root".to_string(),
        email: "root@x.com".to_string(),
        role: AdminRole::SuperAdmin,
        status: None,
    }
}

/// A session manager wired to fakes, plus handles on each fake
pub struct Harness {
    pub manager: SessionManager,
    pub client: ApiClient,
    pub store: SessionStore,
    pub storage: MemoryStorage,
    pub transport: ScriptedTransport,
    pub navigator: RecordingNavigator,
}

pub fn harness() -> Harness {
    let storage = MemoryStorage::new();
    let store = SessionStore::new(Rc::new(storage.clone()));
    let transport = ScriptedTransport::new();
    let navigator = RecordingNavigator::new();
    let config = AppConfig::from_values(Some("http://backend.test"), None, None, None);
    let client = ApiClient::new(&config, Rc::new(transport.clone()), store.clone());
    let manager = SessionManager::new(client.clone(), Rc::new(navigator.clone()));

    Harness {
        manager,
        client,
        store,
        storage,
        transport,
        navigator,
    }
}

/// Harness whose storage already holds a session for `admin`
pub fn harness_with_session(admin: &Admin) -> Harness {
    let h = harness();
    h.store
        .save("stored-token", admin)
        .expect("memory storage accepts writes");
    h
}

/// Renders one pass of `C` on the current thread. Effects are not run, so
/// nothing here fetches or navigates.
pub fn render_to_string<C: BaseComponent>(props: C::Properties) -> String {
    block_on(LocalServerRenderer::<C>::with_props(props).render())
}
