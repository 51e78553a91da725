use axum::{
    extract::State,
    response::Html,
};
use std::sync::Arc;

use super::AppState;
use crate::auth::scopes;
use crate::client::response::normalize_list;
use crate::client::ClientError;
use crate::error::PortalError;
use crate::middleware::auth::{require_scopes, CurrentSession};
use crate::render::page;

/// GET /reports - read-only, gated on either reports scope.
pub async fn reports(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
) -> Result<Html<String>, PortalError> {
    require_scopes(&session, &[scopes::REPORTS_READ, scopes::REPORTS_WRITE])?;

    let body = state.client.reports(&session.token).await.map_err(read_error)?;
    let items = normalize_list(&body).map(|l| l.items).unwrap_or_default();

    Ok(Html(page::collection_page("Reports", &session, &items)))
}

/// GET /audit - read-only audit trail.
pub async fn audit_logs(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
) -> Result<Html<String>, PortalError> {
    let body = state.client.audit_logs(&session.token).await.map_err(read_error)?;
    let items = normalize_list(&body).map(|l| l.items).unwrap_or_default();

    Ok(Html(page::collection_page("Audit Logs", &session, &items)))
}

/// GET /admin/settings - tenant-admin only.
pub async fn admin_settings(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
) -> Result<Html<String>, PortalError> {
    require_scopes(&session, &[scopes::TENANT_ADMIN, scopes::TENANT_SUPER_ADMIN])?;

    let body = state.client.admin_settings(&session.token).await.map_err(read_error)?;
    let items = normalize_list(&body).map(|l| l.items).unwrap_or_default();

    Ok(Html(page::collection_page("Admin Settings", &session, &items)))
}

fn read_error(err: ClientError) -> PortalError {
    match err {
        ClientError::AuthExpired => PortalError::AuthExpired,
        ClientError::Forbidden(_) => PortalError::forbidden("User not found in any tenant system."),
        other => {
            tracing::error!("read-only fetch failed: {}", other);
            PortalError::fetch_failed("Failed to load data")
        }
    }
}
