//! Table rendering for the generic CRUD page: typed cells, sortable column
//! headers, and the pagination strip.

use serde_json::Value;

use super::html::{escape, query_string};
use crate::engine::query::{display_string, SortDirection};
use crate::engine::record::Record;
use crate::engine::{LoadState, ModuleView};

/// Render the table (or its loading/empty/error states) plus pagination.
pub fn render_table(view: &ModuleView, rows: &[Value]) -> String {
    if view.list_busy {
        return "<div class=\"data-table-container\"><div class=\"loading-state\">Loading...</div></div>".to_string();
    }

    if let LoadState::LoadError(message) = &view.state {
        return format!(
            "<div class=\"data-table-container\"><div class=\"error-state\">{}</div></div>",
            escape(message)
        );
    }

    if rows.is_empty() {
        return format!(
            "<div class=\"data-table-container\"><div class=\"empty-state\">\
             <h3>No Records Found</h3>\
             <p>No {module} found. Click \"Add {name}\" to create one.</p>\
             </div></div>",
            module = escape(&view.module.name.to_lowercase()),
            name = escape(view.module.name),
        );
    }

    let mut out = String::from("<div class=\"data-table-container\">\n<table class=\"data-table\">\n");
    out.push_str(&render_header(view));
    out.push_str("<tbody>\n");
    for row in rows {
        out.push_str(&render_row(view, row));
    }
    out.push_str("</tbody>\n</table>\n");
    out.push_str(&render_pagination(view));
    out.push_str("</div>\n");
    out
}

fn render_header(view: &ModuleView) -> String {
    let mut out = String::from("<thead>\n<tr>\n");
    for col in &view.module.table_columns {
        let width = col
            .width
            .map(|w| format!(" style=\"width: {}\"", escape(w)))
            .unwrap_or_default();
        let active = view.sort.key.as_deref() == Some(col.key);
        let class = if active { " class=\"sorted\"" } else { "" };

        out.push_str(&format!(
            "<th{width}{class}><a href=\"{href}\">{label}<span class=\"sort-indicator\">{glyph}</span></a></th>\n",
            width = width,
            class = class,
            href = sort_href(view, col.key),
            label = escape(col.display_label()),
            glyph = sort_indicator(view, col.key),
        ));
    }
    out.push_str("<th style=\"width: 120px\">Actions</th>\n</tr>\n</thead>\n");
    out
}

/// Neutral glyph on inactive columns, direction glyph on the active one.
fn sort_indicator(view: &ModuleView, column: &str) -> &'static str {
    if view.sort.key.as_deref() != Some(column) {
        return " ↕";
    }
    match view.sort.direction {
        SortDirection::Asc => " ↑",
        SortDirection::Desc => " ↓",
    }
}

fn sort_href(view: &ModuleView, column: &str) -> String {
    // clicking the active ascending column flips to descending
    let next_dir = if view.sort.key.as_deref() == Some(column)
        && view.sort.direction == SortDirection::Asc
    {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };

    format!(
        "/master/{}{}",
        view.module.key,
        query_string(&[
            ("page", view.page.page.to_string()),
            ("q", view.search.clone()),
            ("sort", column.to_string()),
            ("dir", next_dir.as_str().to_string()),
        ])
    )
}

fn render_row(view: &ModuleView, row: &Value) -> String {
    let mut out = String::from("<tr>\n");
    for col in &view.module.table_columns {
        out.push_str(&format!("<td>{}</td>\n", render_cell(view, row, col.key, col.reference)));
    }

    // action buttons need the record id; rows without one get none
    let id = Record::from_value(row.clone()).ok().and_then(|r| r.id());
    out.push_str("<td><div class=\"table-actions\">");
    if let Some(id) = id {
        out.push_str(&format!(
            "<a class=\"btn btn-secondary btn-sm\" href=\"/master/{key}/edit/{id}\" title=\"Edit\">Edit</a>\
             <a class=\"btn btn-danger btn-sm\" href=\"/master/{key}/delete/{id}\" title=\"Delete\">Delete</a>",
            key = view.module.key,
            id = escape(&id),
        ));
    }
    out.push_str("</div></td>\n</tr>\n");
    out
}

/// Cell policy: reference columns resolve to a display label, booleans render
/// as a status badge, null/missing renders an em-dash, everything else is the
/// raw value.
fn render_cell(view: &ModuleView, row: &Value, key: &str, reference: Option<&str>) -> String {
    let value = row.get(key);

    if let Some(reference) = reference {
        let raw = value.unwrap_or(&Value::Null);
        if raw.is_null() {
            return "<span class=\"cell-empty\">—</span>".to_string();
        }
        return escape(&view.reference_label(reference, raw));
    }

    match value {
        Some(Value::Bool(b)) => {
            let (class, text) = if *b { ("active", "Active") } else { ("inactive", "Inactive") };
            format!("<span class=\"status-badge {}\">{}</span>", class, text)
        }
        None | Some(Value::Null) => "<span class=\"cell-empty\">—</span>".to_string(),
        Some(other) => escape(&display_string(other)),
    }
}

fn render_pagination(view: &ModuleView) -> String {
    let page = &view.page;
    let mut out = String::from("<div class=\"pagination\">\n");
    out.push_str(&format!(
        "<div class=\"pagination-info\">Showing {} to {} of {} entries</div>\n",
        page.start_item(),
        page.end_item(),
        page.total
    ));

    if page.total_pages() > 1 {
        out.push_str("<div class=\"pagination-controls\">");
        out.push_str(&page_link(view, page.page - 1, "◀ Prev", !page.has_prev(), false));
        for num in page.page_window() {
            let label = num.to_string();
            out.push_str(&page_link(view, num, &label, false, num == page.page));
        }
        out.push_str(&page_link(view, page.page + 1, "Next ▶", !page.has_next(), false));
        out.push_str("</div>\n");
    }

    out.push_str("</div>\n");
    out
}

fn page_link(view: &ModuleView, target: u64, label: &str, disabled: bool, active: bool) -> String {
    if disabled {
        return format!("<span class=\"pagination-btn disabled\">{}</span>", label);
    }
    let class = if active { "pagination-btn active" } else { "pagination-btn" };
    let href = format!(
        "/master/{}{}",
        view.module.key,
        query_string(&[
            ("page", target.to_string()),
            ("q", view.search.clone()),
            ("sort", view.sort.key.clone().unwrap_or_default()),
            (
                "dir",
                if view.sort.key.is_some() {
                    view.sort.direction.as_str().to_string()
                } else {
                    String::new()
                }
            ),
        ])
    );
    format!("<a class=\"{}\" href=\"{}\">{}</a>", class, href, label)
}
