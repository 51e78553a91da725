//! Page chrome: document shell, navbar, master-data sidebar, and the
//! standalone pages that are not schema-driven.

use serde_json::Value;

use super::html::escape;
use crate::auth::scopes;
use crate::auth::Session;
use crate::config;
use crate::engine::query::display_string;
use crate::registry::{registry, ModuleDescriptor};

const APP_NAME: &str = "TenantPortal";
const APP_LOGO: &str = "🏢";

/// Length tenant ids are cut to wherever they show up in chrome.
const TRUNCATE_ID_LEN: usize = 8;

/// A one-shot notice rendered at the top of the page.
#[derive(Debug, Clone, Copy)]
pub enum FlashKind {
    Success,
    Error,
}

pub fn flash(kind: FlashKind, message: &str) -> String {
    let class = match kind {
        FlashKind::Success => "flash flash-success",
        FlashKind::Error => "flash flash-error",
    };
    format!("<div class=\"{}\">{}</div>\n", class, escape(message))
}

/// Full document shell with navbar. `session` controls which nav links show.
pub fn layout(title: &str, session: Option<&Session>, body: &str) -> String {
    let mut out = String::from("<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{} · {}</title>\n", escape(title), APP_NAME));
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str("<link rel=\"stylesheet\" href=\"/static/portal.css\">\n</head>\n<body>\n");
    out.push_str(&navbar(session));
    out.push_str("<main class=\"content\">\n");
    out.push_str(body);
    out.push_str("</main>\n</body>\n</html>\n");
    out
}

fn navbar(session: Option<&Session>) -> String {
    let mut out = format!(
        "<nav class=\"navbar\">\n<a class=\"brand\" href=\"/dashboard\">{} {}</a>\n",
        APP_LOGO, APP_NAME
    );

    if let Some(session) = session {
        out.push_str("<div class=\"nav-links\">");
        out.push_str("<a href=\"/dashboard\">Dashboard</a>");
        out.push_str("<a href=\"/master\">Master Data</a>");
        if scopes::satisfies(&session.scopes, &[scopes::REPORTS_READ, scopes::REPORTS_WRITE]) {
            out.push_str("<a href=\"/reports\">Reports</a>");
        }
        out.push_str("<a href=\"/audit\">Audit</a>");
        if scopes::is_tenant_admin(&session.scopes) {
            out.push_str("<a href=\"/admin/settings\">Admin</a>");
        }
        out.push_str("</div>\n");
        out.push_str(&format!(
            "<div class=\"nav-user\"><span>{}</span><span class=\"nav-tenant\">{}</span>\
             <form method=\"post\" action=\"/logout\"><button type=\"submit\" class=\"btn btn-link\">Logout</button></form></div>\n",
            escape(&session.name),
            escape(&truncate_id(&session.tenant_id)),
        ));
    }

    out.push_str("</nav>\n");
    out
}

fn truncate_id(id: &str) -> String {
    if id.chars().count() > TRUNCATE_ID_LEN {
        let head: String = id.chars().take(TRUNCATE_ID_LEN).collect();
        format!("{}...", head)
    } else {
        id.to_string()
    }
}

// ========================================
// Auth pages
// ========================================

pub fn login_page(error: Option<&str>, session_expired: bool) -> String {
    let client_id = &config::config().auth.google_client_id;
    let mut body = String::from("<div class=\"login-card\">\n<h1>Sign in</h1>\n");

    if session_expired {
        body.push_str("<div class=\"flash flash-error\">Session expired. Please login again.</div>\n");
    }
    if let Some(message) = error {
        body.push_str(&format!("<div class=\"flash flash-error\">{}</div>\n", escape(message)));
    }

    // The Google button exchanges the credential for our session via /login.
    body.push_str(&format!(
        "<div id=\"g_id_onload\" data-client_id=\"{}\" data-login_uri=\"/login\"></div>\n\
         <div class=\"g_id_signin\"></div>\n\
         <script src=\"https://accounts.google.com/gsi/client\" async></script>\n",
        escape(client_id)
    ));
    body.push_str("</div>\n");

    layout("Login", None, &body)
}

pub fn forbidden() -> String {
    let body = "<div class=\"error-card\"><h1>403</h1>\
                <p>You do not have permission to perform this action.</p>\
                <a href=\"/dashboard\">Back to dashboard</a></div>";
    layout("Forbidden", None, body)
}

pub fn not_found() -> String {
    let body = "<div class=\"error-card\"><h1>404</h1>\
                <p>Page not found.</p>\
                <a href=\"/dashboard\">Back to dashboard</a></div>";
    layout("Not Found", None, body)
}

pub fn error_page(message: &str) -> String {
    let body = format!(
        "<div class=\"error-card\"><h1>Something went wrong</h1><p>{}</p></div>",
        escape(message)
    );
    layout("Error", None, &body)
}

// ========================================
// Dashboard
// ========================================

pub fn dashboard(session: &Session) -> String {
    let mut body = format!(
        "<h1>Welcome back, {}</h1>\n<div class=\"profile-card\">\
         <p>{}</p><p>Active tenant: <code>{}</code></p>",
        escape(&session.name),
        escape(&session.email),
        escape(&truncate_id(&session.tenant_id)),
    );

    body.push_str("<h2>Scopes</h2><ul class=\"scope-list\">");
    for scope in &session.scopes {
        body.push_str(&format!("<li><code>{}</code></li>", escape(scope)));
    }
    body.push_str("</ul>");

    if session.associated_tenants.len() > 1 {
        body.push_str(
            "<h2>Switch tenant</h2>\
             <form method=\"post\" action=\"/tenant/switch\">\
             <select name=\"tenantId\" class=\"form-select\">",
        );
        for membership in &session.associated_tenants {
            let selected = if membership.tenant_id == session.tenant_id { " selected" } else { "" };
            let admin = if membership.is_admin { " (admin)" } else { "" };
            body.push_str(&format!(
                "<option value=\"{}\"{}>{}{}</option>",
                escape(&membership.tenant_id),
                selected,
                escape(&truncate_id(&membership.tenant_id)),
                admin,
            ));
        }
        body.push_str(
            "</select>\
             <button type=\"submit\" class=\"btn btn-primary\">Switch</button></form>",
        );
    }

    body.push_str("</div>\n");
    layout("Dashboard", Some(session), &body)
}

// ========================================
// Master data chrome
// ========================================

/// Category-grouped module index.
pub fn master_index(session: &Session) -> String {
    let mut body = String::from("<h1>Master Data</h1>\n");
    for (category, members) in registry().by_category() {
        body.push_str(&format!("<h2>{}</h2>\n<div class=\"module-grid\">\n", escape(category.label())));
        for module in members {
            body.push_str(&format!(
                "<a class=\"module-card\" href=\"/master/{}\"><span>{}</span>{}</a>\n",
                module.key,
                module.icon,
                escape(module.name)
            ));
        }
        body.push_str("</div>\n");
    }
    layout("Master Data", Some(session), &body)
}

pub fn sidebar(active: &str) -> String {
    let mut out = String::from("<aside class=\"sidebar\">\n");
    for (category, members) in registry().by_category() {
        out.push_str(&format!("<div class=\"sidebar-group\">{}</div>\n", escape(category.label())));
        for module in members {
            let class = if module.key == active { " class=\"active\"" } else { "" };
            out.push_str(&format!(
                "<a href=\"/master/{}\"{}>{} {}</a>\n",
                module.key,
                class,
                module.icon,
                escape(module.name)
            ));
        }
    }
    out.push_str("</aside>\n");
    out
}

/// Header + search/filter bar of the CRUD page.
pub fn crud_header(module: &ModuleDescriptor, search: &str) -> String {
    format!(
        "<div class=\"content-header\">\
         <h1><span>{icon}</span>{name}</h1>\
         <a class=\"btn btn-primary\" href=\"/master/{key}/new\">➕ Add {name}</a>\
         </div>\n\
         <form class=\"filter-bar\" method=\"get\" action=\"/master/{key}\">\
         <input type=\"text\" class=\"search-input\" name=\"q\" value=\"{search}\" \
         placeholder=\"Search {lower}...\">\
         <button type=\"submit\" class=\"btn btn-secondary\">🔄 Refresh</button>\
         </form>\n",
        icon = module.icon,
        name = escape(module.name),
        key = module.key,
        search = escape(search),
        lower = escape(&module.name.to_lowercase()),
    )
}

/// Two-step delete confirmation.
pub fn confirm_delete(module: &ModuleDescriptor, id: &str) -> String {
    format!(
        "<div class=\"modal\">\
         <div class=\"modal-header\"><h2>Delete {name}</h2></div>\
         <p>Are you sure you want to delete this {lower}? This action cannot be undone.</p>\
         <div class=\"modal-footer\">\
         <a class=\"btn btn-secondary\" href=\"/master/{key}\">Cancel</a>\
         <form method=\"post\" action=\"/master/{key}/delete/{id}\">\
         <button type=\"submit\" class=\"btn btn-danger\">Delete</button>\
         </form></div></div>\n",
        name = escape(module.name),
        lower = escape(&module.name.to_lowercase()),
        key = module.key,
        id = escape(id),
    )
}

// ========================================
// Read-only collection pages
// ========================================

/// Plain table over an arbitrary record list - reports, audit logs, and
/// admin settings all render through this.
pub fn collection_page(title: &str, session: &Session, items: &[Value]) -> String {
    let mut body = format!("<h1>{}</h1>\n", escape(title));

    if items.is_empty() {
        body.push_str("<div class=\"empty-state\"><p>No data available.</p></div>\n");
        return layout(title, Some(session), &body);
    }

    // column set = keys in first-seen order across all rows
    let mut columns: Vec<String> = Vec::new();
    for item in items {
        if let Value::Object(map) = item {
            for key in map.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
    }

    body.push_str("<table class=\"data-table\">\n<thead><tr>");
    for col in &columns {
        body.push_str(&format!("<th>{}</th>", escape(col)));
    }
    body.push_str("</tr></thead>\n<tbody>\n");
    for item in items {
        body.push_str("<tr>");
        for col in &columns {
            let cell = match item.get(col) {
                None | Some(Value::Null) => "<span class=\"cell-empty\">—</span>".to_string(),
                Some(Value::Bool(b)) => {
                    let (class, text) =
                        if *b { ("active", "Active") } else { ("inactive", "Inactive") };
                    format!("<span class=\"status-badge {}\">{}</span>", class, text)
                }
                Some(other) => escape(&display_string(other)),
            };
            body.push_str(&format!("<td>{}</td>", cell));
        }
        body.push_str("</tr>\n");
    }
    body.push_str("</tbody>\n</table>\n");

    layout(title, Some(session), &body)
}
