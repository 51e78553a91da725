use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
    response::{IntoResponse, Redirect, Response},
};

use crate::auth::{scopes, Session};
use crate::config;
use crate::error::PortalError;

/// Pull the raw bearer token out of the session cookie, if present.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let cookie_name = &config::config().auth.cookie_name;

    for value in headers.get_all(header::COOKIE) {
        let Ok(raw) = value.to_str() else { continue };
        for pair in raw.split(';') {
            let pair = pair.trim();
            if let Some((name, token)) = pair.split_once('=') {
                if name == cookie_name && !token.is_empty() {
                    return Some(token.to_string());
                }
            }
        }
    }

    None
}

/// Set-Cookie value storing the token. The cookie's own expiry is short and
/// independent of the token's `exp` claim.
pub fn session_cookie(token: &str) -> String {
    let auth = &config::config().auth;
    format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        auth.cookie_name,
        token,
        auth.cookie_expiry_hours * 3600
    )
}

/// Set-Cookie value that drops the session cookie immediately.
pub fn clear_session_cookie() -> String {
    format!("{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax", config::config().auth.cookie_name)
}

/// Extractor for pages behind authentication. A request without a live
/// session redirects to the login view; a stale or undecodable stored token
/// is cleared on the way out so the browser does not keep replaying it.
pub struct CurrentSession(pub Session);

pub enum AuthRejection {
    /// No token at all: plain redirect to login.
    NotSignedIn,
    /// A token was stored but is dead: clear it and flag the expiry.
    StaleToken,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::NotSignedIn => Redirect::to("/login").into_response(),
            AuthRejection::StaleToken => (
                [(header::SET_COOKIE, clear_session_cookie())],
                Redirect::to("/login?session=expired"),
            )
                .into_response(),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(token) = session_token(&parts.headers) else {
            return Err(AuthRejection::NotSignedIn);
        };

        match Session::from_token(&token) {
            Some(session) => Ok(CurrentSession(session)),
            None => {
                tracing::info!("rejecting request with stale session token");
                Err(AuthRejection::StaleToken)
            }
        }
    }
}

/// Scope gate for a route or feature. Delegates to the scope resolver; the
/// caller bubbles the error so the 403 page renders.
pub fn require_scopes(session: &Session, required: &[&str]) -> Result<(), PortalError> {
    if scopes::satisfies(&session.scopes, required) {
        Ok(())
    } else {
        Err(PortalError::forbidden(
            "You do not have permission to perform this action.",
        ))
    }
}
