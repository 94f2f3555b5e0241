// ============================================================================
// API CLIENT - Single egress point for backend calls
// ============================================================================
// Attaches the bearer token, folds every outcome into an `ApiResult`, and
// reports 401s on `UnauthorizedEvent`. It never redirects by itself; the
// session manager owns that decision.
// ============================================================================

use std::rc::Rc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::envelope::{decode, normalize, ApiError, ApiResult};
use super::transport::{FetchTransport, HttpMethod, HttpRequest, HttpTransport};
use crate::config::{AppConfig, CONFIG};
use crate::state::{EventBus, SubscriptionId};
use crate::stores::SessionStore;
use crate::utils::STATUS_UNAUTHORIZED;

/// Emitted once per request rejected with 401
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnauthorizedEvent {
    pub method: HttpMethod,
    pub path: String,
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    timeout: Duration,
    transport: Rc<dyn HttpTransport>,
    session_store: SessionStore,
    unauthorized: EventBus<UnauthorizedEvent>,
}

impl ApiClient {
    pub fn new(config: &AppConfig, transport: Rc<dyn HttpTransport>, session_store: SessionStore) -> Self {
        Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            timeout: config.request_timeout(),
            transport,
            session_store,
            unauthorized: EventBus::new(),
        }
    }

    /// Client for the running app: global config, `fetch`, localStorage
    pub fn browser(session_store: SessionStore) -> Self {
        Self::new(&CONFIG, Rc::new(FetchTransport), session_store)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn session_store(&self) -> &SessionStore {
        &self.session_store
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn on_unauthorized<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&UnauthorizedEvent) + 'static,
    {
        self.unauthorized.subscribe(callback)
    }

    pub fn remove_unauthorized_listener(&self, id: SubscriptionId) -> bool {
        self.unauthorized.unsubscribe(id)
    }

    pub fn unauthorized_listener_count(&self) -> usize {
        self.unauthorized.subscriber_count()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        decode(self.execute(HttpMethod::Get, path, None).await)
    }

    /// Raw JSON, for endpoints whose payload has to be unwrapped first
    pub async fn get_value(&self, path: &str) -> ApiResult<Value> {
        self.execute(HttpMethod::Get, path, None).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_with_body(HttpMethod::Post, path, body).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_with_body(HttpMethod::Put, path, body).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send_with_body(HttpMethod::Patch, path, body).await
    }

    pub async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        decode(self.execute(HttpMethod::Patch, path, None).await)
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        decode(self.execute(HttpMethod::Delete, path, None).await)
    }

    async fn send_with_body<B, T>(&self, method: HttpMethod, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = match serde_json::to_value(body) {
            Ok(body) => body,
            Err(e) => {
                return ApiResult::Failure(ApiError::validation(format!(
                    "Invalid request payload: {}",
                    e
                )))
            }
        };
        decode(self.execute(method, path, Some(body)).await)
    }

    /// One attempt, no retry. Every outcome comes back as an envelope.
    pub async fn execute(&self, method: HttpMethod, path: &str, body: Option<Value>) -> ApiResult<Value> {
        let request = self.build_request(method, path, body);
        log::debug!("➡️ {} {}", method, request.url);

        let outcome = self.transport.send(request).await;

        match &outcome {
            Ok(response) if response.status == STATUS_UNAUTHORIZED => {
                log::warn!("🔒 {} {} rejected with 401, ending session", method, path);
                self.session_store.clear();
                self.unauthorized.emit(&UnauthorizedEvent {
                    method,
                    path: path.to_string(),
                });
            }
            Ok(response) if !response.is_success() => {
                log::warn!("⚠️ {} {} failed with HTTP {}", method, path, response.status);
            }
            Ok(_) => {}
            Err(e) => log::error!("❌ {} {}: {}", method, path, e),
        }

        normalize(outcome)
    }

    fn build_request(&self, method: HttpMethod, path: &str, body: Option<Value>) -> HttpRequest {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];
        if let Some(token) = self.session_store.token() {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        HttpRequest {
            method,
            url: self.endpoint(path),
            headers,
            body: body.map(|b| b.to_string()),
            timeout: self.timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::transport::{HttpResponse, TransportError};
    use crate::test_support::{sample_admin, ScriptedTransport};
    use crate::utils::MemoryStorage;
    use futures::executor::block_on;
    use rstest::{fixture, rstest};
    use serde_json::json;
    use std::cell::RefCell;

    struct Fixture {
        client: ApiClient,
        transport: ScriptedTransport,
        store: SessionStore,
    }

    #[fixture]
    fn fixture() -> Fixture {
        let transport = ScriptedTransport::new();
        let store = SessionStore::new(Rc::new(MemoryStorage::new()));
        let config = AppConfig::from_values(Some("http://backend.test/"), Some("10"), None, None);
        let client = ApiClient::new(&config, Rc::new(transport.clone()), store.clone());
        Fixture {
            client,
            transport,
            store,
        }
    }

    #[rstest]
    fn anonymous_request_has_no_auth_header(fixture: Fixture) {
        fixture.transport.respond(200, "[]");
        let result: ApiResult<Vec<Value>> = block_on(fixture.client.get("/api/plans/all"));

        assert!(result.is_success());
        let request = fixture.transport.last_request().unwrap();
        assert_eq!(request.url, "http://backend.test/api/plans/all");
        assert_eq!(request.header("Authorization"), None);
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.timeout, Duration::from_secs(10));
    }

    #[rstest]
    fn stored_token_becomes_bearer_header(fixture: Fixture) {
        fixture.store.save("t1", &sample_admin()).unwrap();
        fixture.transport.respond(200, "{}");

        let _: ApiResult<Value> = block_on(fixture.client.delete("/api/vendors/v1"));

        let request = fixture.transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.header("Authorization"), Some("Bearer t1"));
    }

    #[rstest]
    fn body_is_sent_as_json(fixture: Fixture) {
        fixture.transport.respond(201, r#"{"ok":true}"#);
        let result: ApiResult<Value> =
            block_on(fixture.client.patch("/api/vendors/v1/block", &json!({ "block": true })));

        assert_eq!(result, ApiResult::Success(json!({ "ok": true })));
        let request = fixture.transport.last_request().unwrap();
        assert_eq!(request.body.as_deref(), Some(r#"{"block":true}"#));
    }

    #[rstest]
    fn unauthorized_clears_store_and_emits_event(fixture: Fixture) {
        fixture.store.save("t1", &sample_admin()).unwrap();
        fixture.transport.respond(401, r#"{"message":"jwt expired"}"#);
        let events = Rc::new(RefCell::new(Vec::new()));
        {
            let events = events.clone();
            fixture.client.on_unauthorized(move |e| events.borrow_mut().push(e.clone()));
        }

        let result: ApiResult<Value> = block_on(fixture.client.get("/api/customers/c1"));

        assert_eq!(result.error().as_deref(), Some("jwt expired"));
        assert_eq!(fixture.store.token(), None);
        assert_eq!(
            *events.borrow(),
            vec![UnauthorizedEvent {
                method: HttpMethod::Get,
                path: "/api/customers/c1".to_string()
            }]
        );
    }

    #[rstest]
    #[case(403)]
    #[case(500)]
    fn other_failures_keep_the_session(fixture: Fixture, #[case] status: u16) {
        fixture.store.save("t1", &sample_admin()).unwrap();
        fixture.transport.respond(status, "");
        let fired = Rc::new(RefCell::new(false));
        {
            let fired = fired.clone();
            fixture.client.on_unauthorized(move |_| *fired.borrow_mut() = true);
        }

        let result: ApiResult<Value> = block_on(fixture.client.get("/api/plans/all"));

        assert!(!result.is_success());
        assert!(!*fired.borrow());
        assert!(fixture.store.is_authenticated());
    }

    #[rstest]
    fn network_failure_keeps_the_session(fixture: Fixture) {
        fixture.store.save("t1", &sample_admin()).unwrap();
        fixture
            .transport
            .fail(TransportError::Network("connection refused".to_string()));

        let result: ApiResult<Value> = block_on(fixture.client.get("/api/plans/all"));

        assert!(result.api_error().unwrap().is_network());
        assert!(fixture.store.is_authenticated());
        assert_eq!(fixture.transport.request_count(), 1);
    }

    #[rstest]
    fn shape_mismatch_is_a_failure(fixture: Fixture) {
        fixture.transport.push(Ok(HttpResponse::new(200, r#"{"not":"a list"}"#)));
        let result: ApiResult<Vec<Value>> = block_on(fixture.client.get("/api/plans/all"));
        assert!(matches!(result, ApiResult::Failure(ApiError::Parse(_))));
    }
}
