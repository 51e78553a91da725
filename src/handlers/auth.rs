use axum::{
    extract::{Form, Query, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use super::AppState;
use crate::error::PortalError;
use crate::middleware::auth::{clear_session_cookie, session_cookie, CurrentSession};
use crate::render::page;

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub session: Option<String>,
}

/// GET /login - sign-in page, with the expiry notice when the session died.
pub async fn login_view(Query(query): Query<LoginQuery>) -> Html<String> {
    let expired = query.session.as_deref() == Some("expired");
    Html(page::login_page(None, expired))
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// The Google id_token, as posted by the sign-in button.
    pub credential: String,
}

/// POST /login - exchange the Google credential for a backend session.
///
/// A rejected login renders inline on the login page; it must never bounce
/// through the session-expired redirect, or failed logins would loop.
pub async fn login_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<LoginForm>,
) -> Response {
    match state.store.login(&form.credential).await {
        Ok(session) => (
            [(header::SET_COOKIE, session_cookie(&session.token))],
            Redirect::to("/dashboard"),
        )
            .into_response(),
        Err(PortalError::AuthInvalid(message)) => {
            Html(page::login_page(Some(&message), false)).into_response()
        }
        Err(PortalError::Forbidden(_)) => {
            Html(page::login_page(Some("User not found in any tenant system."), false))
                .into_response()
        }
        Err(other) => {
            tracing::error!("login failed: {}", other);
            Html(page::login_page(Some(other.message()), false)).into_response()
        }
    }
}

/// POST /logout - notify the backend, then drop the cookie either way.
pub async fn logout(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
) -> Response {
    state.store.logout(&session).await;
    ([(header::SET_COOKIE, clear_session_cookie())], Redirect::to("/login")).into_response()
}

#[derive(Debug, Deserialize)]
pub struct SwitchForm {
    #[serde(rename = "tenantId")]
    pub tenant_id: String,
}

/// POST /tenant/switch - the backend issues a fresh token scoped to the new
/// tenant; the old session is replaced wholesale.
pub async fn switch_tenant(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    Form(form): Form<SwitchForm>,
) -> Result<Response, PortalError> {
    let session = state.store.switch_tenant(&session, &form.tenant_id).await?;
    tracing::info!("switched to tenant {}", session.tenant_id);

    Ok((
        [(header::SET_COOKIE, session_cookie(&session.token))],
        Redirect::to("/dashboard"),
    )
        .into_response())
}
