use axum::{
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::auth::Session;
use crate::middleware::auth::{session_token, CurrentSession};
use crate::render::page;

/// GET / - land on the dashboard when signed in, the login page otherwise.
pub async fn root(headers: HeaderMap) -> Redirect {
    let signed_in = session_token(&headers)
        .map(|token| Session::from_token(&token).is_some())
        .unwrap_or(false);

    if signed_in {
        Redirect::to("/dashboard")
    } else {
        Redirect::to("/login")
    }
}

/// GET /dashboard
pub async fn dashboard(CurrentSession(session): CurrentSession) -> Html<String> {
    Html(page::dashboard(&session))
}

/// Fallback for unknown routes.
pub async fn not_found() -> Response {
    (axum::http::StatusCode::NOT_FOUND, Html(page::not_found())).into_response()
}
