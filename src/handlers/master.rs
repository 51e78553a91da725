//! The generic CRUD pages: one set of handlers serves every module in the
//! registry, driven entirely by its descriptor.

use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use super::AppState;
use crate::auth::Session;
use crate::engine::query::SortDirection;
use crate::engine::record::Record;
use crate::engine::validate::{initial_values, record_from_form};
use crate::engine::ModuleView;
use crate::error::PortalError;
use crate::middleware::auth::CurrentSession;
use crate::registry::{registry, ModuleDescriptor};
use crate::render::form::{render_form, FormContext};
use crate::render::page::{self, FlashKind};
use crate::render::table::render_table;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<u64>,
    pub q: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub notice: Option<String>,
}

/// GET /master - the category-grouped module index.
pub async fn index(CurrentSession(session): CurrentSession) -> Html<String> {
    Html(page::master_index(&session))
}

/// GET /master/:key - list view with local search/sort and pagination.
/// An unknown module key never renders a broken page; it goes back to the
/// index.
pub async fn module_page(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    Path(key): Path<String>,
    Query(query): Query<ListQuery>,
) -> Result<Response, PortalError> {
    let Some(module) = registry().get(&key) else {
        return Ok(Redirect::to("/master").into_response());
    };

    let view = load_view(&state, &session, module, &query).await?;
    let rows = view.visible_records();

    let mut content = String::new();
    if let Some(notice) = notice_flash(query.notice.as_deref()) {
        content.push_str(&notice);
    }
    content.push_str(&page::crud_header(module, &view.search));
    content.push_str(&render_table(&view, &rows));

    Ok(Html(render_module_page(module, &session, &content)).into_response())
}

/// GET /master/:key/new - empty create form with schema defaults.
pub async fn new_form(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    Path(key): Path<String>,
) -> Result<Response, PortalError> {
    let Some(module) = registry().get(&key) else {
        return Ok(Redirect::to("/master").into_response());
    };

    let reference_data = state.engine.fetch_references(&session.token, module).await;
    let values = initial_values(&module.fields);

    let html = render_form_page(module, &session, &values, &HashMap::new(), &reference_data, None);
    Ok(Html(html).into_response())
}

/// GET /master/:key/edit/:id - form pre-filled from the record.
pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    Path((key, id)): Path<(String, String)>,
) -> Result<Response, PortalError> {
    let Some(module) = registry().get(&key) else {
        return Ok(Redirect::to("/master").into_response());
    };

    let body = state
        .client
        .get_by_id(&session.token, module.endpoint, &id)
        .await
        .map_err(PortalError::from)?;
    let record = extract_record(&body)
        .ok_or_else(|| PortalError::fetch_failed("Failed to load data"))?;

    let reference_data = state.engine.fetch_references(&session.token, module).await;

    let html =
        render_form_page(module, &session, &record, &HashMap::new(), &reference_data, Some(&id));
    Ok(Html(html).into_response())
}

#[derive(Debug, Deserialize)]
pub struct SaveQuery {
    pub page: Option<u64>,
}

/// POST /master/:key/save - create or update, depending on the hidden id.
///
/// Validation failures and server rejections re-render the form with the
/// user's input intact; only success leaves the form.
pub async fn save(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    Path(key): Path<String>,
    Query(query): Query<SaveQuery>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, PortalError> {
    let Some(module) = registry().get(&key) else {
        return Ok(Redirect::to("/master").into_response());
    };

    let editing_id = pairs
        .iter()
        .find(|(k, _)| k == "__id")
        .map(|(_, v)| v.clone())
        .filter(|v| !v.is_empty());
    let input = record_from_form(&module.fields, &pairs);

    match state
        .engine
        .submit(&session.token, module, input.clone(), editing_id.as_deref())
        .await
    {
        Ok(()) => {
            let notice = if editing_id.is_some() { "updated" } else { "created" };
            Ok(Redirect::to(&format!(
                "/master/{}?page={}&notice={}",
                module.key,
                query.page.unwrap_or(1),
                notice
            ))
            .into_response())
        }
        Err(PortalError::Validation { field_errors, .. }) => {
            // no request was sent; show every violation at once
            let reference_data = state.engine.fetch_references(&session.token, module).await;
            let html = render_form_page(
                module,
                &session,
                &input,
                &field_errors,
                &reference_data,
                editing_id.as_deref(),
            );
            Ok((StatusCode::BAD_REQUEST, Html(html)).into_response())
        }
        Err(PortalError::SaveFailed(message)) => {
            let reference_data = state.engine.fetch_references(&session.token, module).await;
            let mut html = page::flash(FlashKind::Error, &message);
            html.push_str(&render_form(
                module,
                &FormContext {
                    values: &input,
                    errors: &HashMap::new(),
                    reference_data: &reference_data,
                    editing_id: editing_id.as_deref(),
                    busy: false,
                },
            ));
            Ok(Html(render_module_page(module, &session, &html)).into_response())
        }
        Err(other) => Err(other),
    }
}

/// GET /master/:key/delete/:id - first step of the two-step confirm.
pub async fn delete_confirm(
    CurrentSession(session): CurrentSession,
    Path((key, id)): Path<(String, String)>,
) -> Result<Response, PortalError> {
    let Some(module) = registry().get(&key) else {
        return Ok(Redirect::to("/master").into_response());
    };

    let html = render_module_page(module, &session, &page::confirm_delete(module, &id));
    Ok(Html(html).into_response())
}

/// POST /master/:key/delete/:id - the confirmed delete. The page number is
/// carried through unchanged; the re-fetch reflects the new total.
pub async fn delete_submit(
    State(state): State<Arc<AppState>>,
    CurrentSession(session): CurrentSession,
    Path((key, id)): Path<(String, String)>,
    Query(query): Query<SaveQuery>,
) -> Result<Response, PortalError> {
    let Some(module) = registry().get(&key) else {
        return Ok(Redirect::to("/master").into_response());
    };

    match state.engine.delete(&session.token, module, &id).await {
        Ok(()) => Ok(Redirect::to(&format!(
            "/master/{}?page={}&notice=deleted",
            module.key,
            query.page.unwrap_or(1)
        ))
        .into_response()),
        Err(PortalError::DeleteFailed(message)) => {
            let mut content = page::flash(FlashKind::Error, &message);
            content.push_str(&page::confirm_delete(module, &id));
            Ok(Html(render_module_page(module, &session, &content)).into_response())
        }
        Err(other) => Err(other),
    }
}

// ========================================
// Shared pieces
// ========================================

async fn load_view(
    state: &AppState,
    session: &Session,
    module: &'static ModuleDescriptor,
    query: &ListQuery,
) -> Result<ModuleView, PortalError> {
    let mut view = ModuleView::new(module);
    if let Some(page) = query.page {
        view.set_page(page);
    }
    if let Some(q) = &query.q {
        view.search = q.clone();
    }
    if let Some(sort) = &query.sort {
        view.sort.key = Some(sort.clone());
        view.sort.direction = SortDirection::parse(query.dir.as_deref().unwrap_or("asc"));
    }

    let generation = view.begin_fetch();
    let result = state
        .engine
        .fetch_page(&session.token, module, view.page.page, view.page.page_size, None)
        .await;

    match result {
        Ok(list) => view.complete_fetch(generation, Ok(list)),
        // session loss still propagates; other failures render in place
        Err(PortalError::AuthExpired) => return Err(PortalError::AuthExpired),
        Err(other) => view.complete_fetch(generation, Err(other.message().to_string())),
    }

    view.reference_data = state.engine.fetch_references(&session.token, module).await;
    Ok(view)
}

fn render_module_page(module: &ModuleDescriptor, session: &Session, content: &str) -> String {
    let body = format!(
        "<div class=\"master-layout\">\n{}\n<section class=\"generic-crud-page\">\n{}\n</section>\n</div>",
        page::sidebar(module.key),
        content
    );
    page::layout(module.name, Some(session), &body)
}

fn render_form_page(
    module: &ModuleDescriptor,
    session: &Session,
    values: &Record,
    errors: &HashMap<String, String>,
    reference_data: &HashMap<&'static str, Vec<Value>>,
    editing_id: Option<&str>,
) -> String {
    let form = render_form(
        module,
        &FormContext { values, errors, reference_data, editing_id, busy: false },
    );
    render_module_page(module, session, &form)
}

fn notice_flash(notice: Option<&str>) -> Option<String> {
    let message = match notice? {
        "created" => "Saved successfully.",
        "updated" => "Updated successfully.",
        "deleted" => "Deleted successfully.",
        _ => return None,
    };
    Some(page::flash(FlashKind::Success, message))
}

/// Single-record responses arrive either enveloped or bare.
fn extract_record(body: &Value) -> Option<Record> {
    let candidate = match body.get("data") {
        Some(data) if data.is_object() => data.clone(),
        _ => body.clone(),
    };
    Record::from_value(candidate).ok().filter(|r| !r.is_empty())
}
