pub mod response;

use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;

use crate::config;

/// Errors surfaced by the backend adapter, already sorted into the classes
/// the portal reacts to differently.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// 401 anywhere except the login endpoint: the session is dead.
    #[error("session expired")]
    AuthExpired,
    /// 401 from the login endpoint: credentials were rejected.
    #[error("{0}")]
    AuthInvalid(String),
    /// 403 - authenticated but not allowed.
    #[error("{0}")]
    Forbidden(String),
    /// Any other non-success status, with the server's message if it sent one.
    #[error("backend returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unusable response body: {0}")]
    InvalidBody(String),
}

/// Thin adapter over the tenant REST backend.
///
/// Every call attaches the bearer token when one is given; a missing token is
/// not an error here - the backend enforces auth per endpoint. The 401
/// interception lives in exactly one place (`send`) so the login-endpoint
/// exemption cannot drift between call sites.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let timeout = Duration::from_secs(config::config().backend.request_timeout_secs);
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { http, base_url: base_url.into() }
    }

    pub fn from_config() -> Self {
        Self::new(config::config().backend.api_base_url.clone())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&Value>,
        is_login_call: bool,
    ) -> Result<Value, ClientError> {
        let mut req = self.http.request(method, self.url(path));

        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let res = req.send().await.map_err(|e| ClientError::Transport(e.to_string()))?;
        let status = res.status();
        let body: Value = res.json().await.unwrap_or(Value::Null);

        if status.is_success() {
            return Ok(body);
        }

        let message = server_message(&body)
            .unwrap_or_else(|| "Something went wrong. Please try again later.".to_string());

        match status {
            StatusCode::UNAUTHORIZED if is_login_call => Err(ClientError::AuthInvalid(message)),
            StatusCode::UNAUTHORIZED => Err(ClientError::AuthExpired),
            StatusCode::FORBIDDEN => Err(ClientError::Forbidden(message)),
            other => Err(ClientError::Status { status: other.as_u16(), message }),
        }
    }

    // ========================================
    // Auth endpoints
    // ========================================

    /// POST the Google id_token, returning the backend-issued bearer token.
    /// This is the one call exempt from global 401 handling.
    pub async fn login_google(&self, id_token: &str) -> Result<String, ClientError> {
        let path = config::config().auth.login_path.clone();
        let body = self
            .send(Method::POST, &path, None, Some(&json!({ "id_token": id_token })), true)
            .await?;

        extract_token(&body)
            .ok_or_else(|| ClientError::InvalidBody("login response carried no token".into()))
    }

    pub async fn logout(&self, token: &str) -> Result<(), ClientError> {
        let path = config::config().auth.logout_path.clone();
        self.send(Method::POST, &path, Some(token), None, false).await?;
        Ok(())
    }

    /// Swap the active tenant; the backend answers with a fresh token.
    pub async fn switch_tenant(
        &self,
        token: &str,
        tenant_id: &str,
    ) -> Result<String, ClientError> {
        let path = config::config().auth.switch_tenant_path.clone();
        let body = self
            .send(Method::POST, &path, Some(token), Some(&json!({ "tenantId": tenant_id })), false)
            .await?;

        extract_token(&body)
            .ok_or_else(|| ClientError::InvalidBody("switch response carried no token".into()))
    }

    // ========================================
    // Module CRUD
    // ========================================

    pub async fn list(
        &self,
        token: &str,
        endpoint: &str,
        page: u64,
        limit: u64,
        search: Option<&str>,
    ) -> Result<Value, ClientError> {
        let mut path = format!("{}?page={}&limit={}", endpoint, page, limit);
        if let Some(q) = search {
            if !q.is_empty() {
                path.push_str("&search=");
                path.push_str(&urlencode(q));
            }
        }
        self.send(Method::GET, &path, Some(token), None, false).await
    }

    pub async fn get_by_id(
        &self,
        token: &str,
        endpoint: &str,
        id: &str,
    ) -> Result<Value, ClientError> {
        self.send(Method::GET, &format!("{}/{}", endpoint, id), Some(token), None, false).await
    }

    pub async fn create(
        &self,
        token: &str,
        endpoint: &str,
        body: &Value,
    ) -> Result<Value, ClientError> {
        self.send(Method::POST, endpoint, Some(token), Some(body), false).await
    }

    pub async fn update(
        &self,
        token: &str,
        endpoint: &str,
        id: &str,
        body: &Value,
    ) -> Result<Value, ClientError> {
        self.send(Method::PUT, &format!("{}/{}", endpoint, id), Some(token), Some(body), false)
            .await
    }

    pub async fn delete(&self, token: &str, endpoint: &str, id: &str) -> Result<Value, ClientError> {
        self.send(Method::DELETE, &format!("{}/{}", endpoint, id), Some(token), None, false).await
    }

    // ========================================
    // Read-only collections
    // ========================================

    pub async fn admin_settings(&self, token: &str) -> Result<Value, ClientError> {
        self.send(Method::GET, "/api/data/settings", Some(token), None, false).await
    }

    pub async fn reports(&self, token: &str) -> Result<Value, ClientError> {
        self.send(Method::GET, "/api/reports", Some(token), None, false).await
    }

    pub async fn audit_logs(&self, token: &str) -> Result<Value, ClientError> {
        self.send(Method::GET, "/api/audit/logs", Some(token), None, false).await
    }
}

/// Best-effort extraction of the human-readable message in an error body.
fn server_message(body: &Value) -> Option<String> {
    for key in ["message", "error"] {
        if let Some(msg) = body.get(key).and_then(Value::as_str) {
            if !msg.is_empty() {
                return Some(msg.to_string());
            }
        }
    }
    body.get("data")
        .and_then(|d| d.get("message"))
        .and_then(Value::as_str)
        .map(|s| s.to_string())
}

/// Token responses arrive either bare (`{token}`) or enveloped
/// (`{data: {token}}`).
fn extract_token(body: &Value) -> Option<String> {
    body.get("token")
        .or_else(|| body.get("data").and_then(|d| d.get("token")))
        .and_then(Value::as_str)
        .map(|s| s.to_string())
}

fn urlencode(s: &str) -> String {
    // Query-string escaping for the search parameter only.
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            b' ' => out.push_str("%20"),
            other => out.push_str(&format!("%{:02X}", other)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn token_extraction_handles_both_envelopes() {
        assert_eq!(extract_token(&json!({"token": "abc"})), Some("abc".into()));
        assert_eq!(extract_token(&json!({"data": {"token": "abc"}})), Some("abc".into()));
        assert_eq!(extract_token(&json!({"success": true})), None);
    }

    #[test]
    fn server_message_prefers_top_level_keys() {
        assert_eq!(server_message(&json!({"message": "nope"})), Some("nope".into()));
        assert_eq!(server_message(&json!({"error": "bad"})), Some("bad".into()));
        assert_eq!(
            server_message(&json!({"data": {"message": "nested"}})),
            Some("nested".into())
        );
        assert_eq!(server_message(&json!({"success": false})), None);
    }

    #[test]
    fn search_parameter_is_escaped() {
        assert_eq!(urlencode("plain"), "plain");
        assert_eq!(urlencode("two words"), "two%20words");
        assert_eq!(urlencode("a&b=c"), "a%26b%3Dc");
    }
}
