//! HTTP client for the portal backend
//!
//! Thin wrapper over `reqwest` that resolves paths against the configured
//! base URL, attaches bearer tokens and turns non-success responses into
//! `PortalError`s carrying the backend's `detail` message.

use std::time::{Duration, Instant};

use reqwest::{multipart::Form, Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::config::Settings;
use crate::utils::errors::{PortalError, Result};
use crate::utils::logging::{log_api_error, log_request};

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut builder = Client::builder().user_agent(settings.api.user_agent.as_str());
        if let Some(seconds) = settings.api.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: settings.api.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Public URL of an uploaded document or image
    pub fn upload_url(&self, filename: &str) -> String {
        self.url(&format!("/uploads/{}", urlencoding::encode(filename)))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> Result<T> {
        let response = self.execute(Method::GET, path, token, |r| r).await?;
        Ok(response.json().await?)
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B, token: Option<&str>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(Method::POST, path, token, |r| r.json(body)).await?;
        Ok(response.json().await?)
    }

    /// POST without a body where only the status matters
    pub async fn post_empty(&self, path: &str, token: Option<&str>) -> Result<()> {
        self.execute(Method::POST, path, token, |r| r).await?;
        Ok(())
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
        token: Option<&str>,
    ) -> Result<T> {
        let response = self.execute(Method::POST, path, token, |r| r.multipart(form)).await?;
        Ok(response.json().await?)
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<()> {
        self.execute(Method::DELETE, path, token, |r| r).await?;
        Ok(())
    }

    async fn execute<F>(&self, method: Method, path: &str, token: Option<&str>, build: F) -> Result<Response>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let mut request = self.client.request(method.clone(), self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let request = build(request);

        debug!(method = %method, endpoint = path, authenticated = token.is_some(), "Sending request");
        let started = Instant::now();
        let response = request.send().await.map_err(|e| {
            log_api_error(path, &e.to_string(), Some(method.as_str()));
            PortalError::Http(e)
        })?;

        let status = response.status();
        log_request(method.as_str(), path, status.as_u16(), started.elapsed().as_millis() as u64);

        // A 401 on a tokenless call (e.g. bad login credentials) is an ordinary
        // API error; only a rejected bearer token ends the session.
        if status == StatusCode::UNAUTHORIZED && token.is_some() {
            return Err(PortalError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = extract_detail(&body);
            log_api_error(path, &format!("HTTP {status}"), detail.as_deref());
            return Err(PortalError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response)
    }
}

/// Pull a human-readable message out of an error body.
///
/// Handles `{"detail": "..."}`, request-validation bodies of the form
/// `{"detail": [{"msg": "..."}]}` and `{"message": "..."}`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail") {
        Some(serde_json::Value::String(detail)) => return Some(detail.clone()),
        Some(serde_json::Value::Array(items)) => {
            if let Some(msg) = items.first().and_then(|i| i.get("msg")).and_then(|m| m.as_str()) {
                return Some(msg.to_string());
            }
        }
        _ => {}
    }
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}
