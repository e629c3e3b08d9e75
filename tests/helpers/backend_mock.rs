//! Mock portal backend for testing
//!
//! Wraps a wiremock server with mounts for the endpoints the client uses.

use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

pub struct BackendMockServer {
    pub server: MockServer,
}

impl BackendMockServer {
    pub async fn new() -> Self {
        Self { server: MockServer::start().await }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub async fn mock_health(&self) {
        Mock::given(method("GET"))
            .and(path("/api/health"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"status": "healthy", "service": "WHIBC API"})),
            )
            .mount(&self.server)
            .await;
    }

    pub async fn mock_login_success(&self, token: &str, username: &str, role: &str) {
        Mock::given(method("POST"))
            .and(path("/api/admin/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": token,
                "token_type": "bearer",
                "admin_info": {"username": username, "role": role}
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_verify_token(&self, token: &str, valid: bool) {
        let response = if valid {
            ResponseTemplate::new(200).set_body_json(json!({"valid": true}))
        } else {
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid or expired token"}))
        };
        Mock::given(method("POST"))
            .and(path("/api/admin/verify-token"))
            .and(header("authorization", format!("Bearer {token}").as_str()))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Authenticated GET answering with `body`
    pub async fn mock_admin_get(&self, endpoint: &str, token: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .and(header("authorization", format!("Bearer {token}").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Any method on `endpoint` answering with `status` and `body`
    pub async fn mock_status(&self, http_method: &str, endpoint: &str, status: u16, body: Value) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Public gallery listing; `times` limits how often this listing is served
    pub async fn mock_gallery(&self, images: Value, times: Option<u64>) {
        let mock = Mock::given(method("GET"))
            .and(path("/api/gallery"))
            .respond_with(ResponseTemplate::new(200).set_body_json(images));
        let mock = match times {
            Some(n) => mock.up_to_n_times(n),
            None => mock,
        };
        mock.mount(&self.server).await;
    }

    /// Fail the test if anything is sent to `endpoint`
    pub async fn forbid(&self, http_method: &str, endpoint: &str) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    pub async fn requests_to(&self, endpoint: &str) -> Vec<Request> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.url.path() == endpoint)
            .collect()
    }

    pub async fn reset(&self) {
        self.server.reset().await;
    }
}
