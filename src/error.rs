// Portal-wide error types
use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect},
};
use std::collections::HashMap;

use crate::render;

/// Portal error with appropriate status codes and user-facing rendering.
///
/// The taxonomy follows the way the backend's failures must surface in the
/// UI: an expired session forces re-login, a rejected login stays inline,
/// CRUD failures become flash messages with local state kept intact.
#[derive(Debug)]
pub enum PortalError {
    /// 401 outside the login call: the session is gone, globally.
    AuthExpired,
    /// 401 from the login call itself: bad credentials, no global logout.
    AuthInvalid(String),
    /// 403: authenticated but not allowed (or not in any tenant).
    Forbidden(String),
    /// Client-side validation failures, per field. No request was issued.
    Validation {
        message: String,
        field_errors: HashMap<String, String>,
    },
    /// Primary list fetch failed.
    FetchFailed(String),
    /// Create/update submission failed server-side.
    SaveFailed(String),
    /// Delete failed server-side.
    DeleteFailed(String),
    /// Navigation target does not exist.
    NotFound(String),
    /// Anything the portal itself broke on.
    Internal(String),
}

impl PortalError {
    pub fn status_code(&self) -> u16 {
        match self {
            PortalError::AuthExpired => 401,
            PortalError::AuthInvalid(_) => 401,
            PortalError::Forbidden(_) => 403,
            PortalError::Validation { .. } => 400,
            PortalError::FetchFailed(_) => 502,
            PortalError::SaveFailed(_) => 502,
            PortalError::DeleteFailed(_) => 502,
            PortalError::NotFound(_) => 404,
            PortalError::Internal(_) => 500,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            PortalError::AuthExpired => "Session expired. Please login again.",
            PortalError::AuthInvalid(msg) => msg,
            PortalError::Forbidden(msg) => msg,
            PortalError::Validation { message, .. } => message,
            PortalError::FetchFailed(msg) => msg,
            PortalError::SaveFailed(msg) => msg,
            PortalError::DeleteFailed(msg) => msg,
            PortalError::NotFound(msg) => msg,
            PortalError::Internal(msg) => msg,
        }
    }

    pub fn auth_invalid(message: impl Into<String>) -> Self {
        PortalError::AuthInvalid(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        PortalError::Forbidden(message.into())
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        PortalError::Validation { message: message.into(), field_errors }
    }

    pub fn fetch_failed(message: impl Into<String>) -> Self {
        PortalError::FetchFailed(message.into())
    }

    pub fn save_failed(message: impl Into<String>) -> Self {
        PortalError::SaveFailed(message.into())
    }

    pub fn delete_failed(message: impl Into<String>) -> Self {
        PortalError::DeleteFailed(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        PortalError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        PortalError::Internal(message.into())
    }
}

impl From<crate::client::ClientError> for PortalError {
    fn from(err: crate::client::ClientError) -> Self {
        match err {
            crate::client::ClientError::AuthExpired => PortalError::AuthExpired,
            crate::client::ClientError::AuthInvalid(msg) => PortalError::AuthInvalid(msg),
            crate::client::ClientError::Forbidden(_) => {
                PortalError::forbidden("User not found in any tenant system.")
            }
            crate::client::ClientError::Status { message, .. } => PortalError::FetchFailed(message),
            crate::client::ClientError::Transport(msg) => {
                tracing::error!("backend transport error: {}", msg);
                PortalError::fetch_failed("Network error. Please check your connection.")
            }
            crate::client::ClientError::InvalidBody(msg) => {
                tracing::error!("backend returned unusable body: {}", msg);
                PortalError::fetch_failed("Something went wrong. Please try again later.")
            }
        }
    }
}

impl std::fmt::Display for PortalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PortalError {}

// How each error class reaches the browser: expired sessions redirect to the
// login view, forbidden renders the 403 page, the rest render an error page
// with the message (handlers that can do better catch the error earlier and
// re-render their own form/list with it).
impl IntoResponse for PortalError {
    fn into_response(self) -> axum::response::Response {
        match self {
            PortalError::AuthExpired => (
                [(header::SET_COOKIE, crate::middleware::auth::clear_session_cookie())],
                Redirect::to("/login?session=expired"),
            )
                .into_response(),
            PortalError::Forbidden(_) => {
                (StatusCode::FORBIDDEN, Html(render::page::forbidden())).into_response()
            }
            PortalError::NotFound(_) => Redirect::to("/master").into_response(),
            other => {
                let status = StatusCode::from_u16(other.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, Html(render::page::error_page(other.message()))).into_response()
            }
        }
    }
}
