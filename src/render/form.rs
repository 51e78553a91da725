//! Schema-driven form rendering: one widget per field type, built from the
//! module descriptor and whatever values the form currently holds.

use serde_json::Value;
use std::collections::HashMap;

use super::html::escape;
use crate::engine::query::display_string;
use crate::engine::record::{coerce_bool, Record};
use crate::registry::{registry, FieldDescriptor, FieldType, ModuleDescriptor};

/// Everything the form needs besides the schema itself.
pub struct FormContext<'a> {
    pub values: &'a Record,
    pub errors: &'a HashMap<String, String>,
    pub reference_data: &'a HashMap<&'static str, Vec<Value>>,
    /// Id of the record being edited; `None` renders the create variant.
    pub editing_id: Option<&'a str>,
    pub busy: bool,
}

/// Render the create/edit form for a module.
pub fn render_form(module: &ModuleDescriptor, ctx: &FormContext<'_>) -> String {
    let title = match ctx.editing_id {
        Some(_) => format!("Edit {}", module.name),
        None => format!("Create {}", module.name),
    };
    let submit_label = if ctx.busy {
        "Saving..."
    } else if ctx.editing_id.is_some() {
        "Update"
    } else {
        "Create"
    };

    let mut out = String::new();
    out.push_str(&format!(
        "<div class=\"modal\">\n<div class=\"modal-header\"><h2>{}</h2>\
         <a class=\"modal-close\" href=\"/master/{}\">&times;</a></div>\n",
        escape(&title),
        module.key
    ));
    out.push_str(&format!(
        "<form method=\"post\" action=\"/master/{}/save\">\n<div class=\"modal-body\">\n",
        module.key
    ));

    if let Some(id) = ctx.editing_id {
        out.push_str(&format!(
            "<input type=\"hidden\" name=\"__id\" value=\"{}\">\n",
            escape(id)
        ));
    }

    for field in module.fields.iter().filter(|f| !f.hidden) {
        out.push_str(&render_group(field, ctx));
    }

    out.push_str("</div>\n<div class=\"modal-footer\">");
    out.push_str(&format!(
        "<a class=\"btn btn-secondary\" href=\"/master/{}\">Cancel</a>",
        module.key
    ));
    out.push_str(&format!(
        "<button type=\"submit\" class=\"btn btn-primary\"{}>{}</button>",
        if ctx.busy { " disabled" } else { "" },
        submit_label
    ));
    out.push_str("</div>\n</form>\n</div>\n");
    out
}

fn render_group(field: &FieldDescriptor, ctx: &FormContext<'_>) -> String {
    let label = field.display_label();
    let error = ctx.errors.get(field.name);
    let wide = if field.wide { " form-group-wide" } else { "" };

    let mut out = format!("<div class=\"form-group{}\">\n", wide);

    // checkboxes carry their label beside the box, not above it
    if field.field_type != FieldType::Boolean {
        out.push_str(&format!(
            "<label class=\"form-label\" for=\"{}\">{}{}</label>\n",
            field.name,
            escape(label),
            if field.required { "<span class=\"required\"> *</span>" } else { "" }
        ));
    }

    out.push_str(&render_widget(field, ctx));

    if let Some(message) = error {
        out.push_str(&format!("<div class=\"form-error\">{}</div>\n", escape(message)));
    }

    out.push_str("</div>\n");
    out
}

fn render_widget(field: &FieldDescriptor, ctx: &FormContext<'_>) -> String {
    let value = ctx.values.get(field.name);
    let text_value = value.map(display_string).unwrap_or_default();
    let placeholder = format!("Enter {}", field.display_label().to_lowercase());
    let disabled = if ctx.busy { " disabled" } else { "" };

    match field.field_type {
        FieldType::Boolean => {
            let checked = value.map(coerce_bool).unwrap_or(false);
            format!(
                "<span class=\"form-checkbox-group\">\
                 <input type=\"checkbox\" id=\"{name}\" name=\"{name}\"{checked}{disabled}>\
                 <label for=\"{name}\">{label}</label></span>\n",
                name = field.name,
                checked = if checked { " checked" } else { "" },
                disabled = disabled,
                label = escape(field.display_label()),
            )
        }
        FieldType::Select => render_select(field, &text_value, ctx, disabled),
        FieldType::TextArea => format!(
            "<textarea id=\"{name}\" name=\"{name}\" class=\"form-textarea\" \
             placeholder=\"{placeholder}\"{maxlength}{disabled}>{value}</textarea>\n",
            name = field.name,
            placeholder = escape(&placeholder),
            maxlength = max_length_attr(field),
            disabled = disabled,
            value = escape(&text_value),
        ),
        FieldType::Number => {
            let mut attrs = String::new();
            if let Some(min) = field.min {
                attrs.push_str(&format!(" min=\"{}\"", min));
            }
            if let Some(max) = field.max {
                attrs.push_str(&format!(" max=\"{}\"", max));
            }
            match field.step {
                Some(step) => attrs.push_str(&format!(" step=\"{}\"", step)),
                None => attrs.push_str(" step=\"any\""),
            }
            format!(
                "<input type=\"number\" id=\"{name}\" name=\"{name}\" class=\"form-input\" \
                 value=\"{value}\" placeholder=\"{placeholder}\"{attrs}{disabled}>\n",
                name = field.name,
                value = escape(&text_value),
                placeholder = escape(&placeholder),
                attrs = attrs,
                disabled = disabled,
            )
        }
        FieldType::Date | FieldType::DateTime => format!(
            "<input type=\"{kind}\" id=\"{name}\" name=\"{name}\" class=\"form-input\" \
             value=\"{value}\"{disabled}>\n",
            kind = if field.field_type == FieldType::Date { "date" } else { "datetime-local" },
            name = field.name,
            value = escape(&text_value),
            disabled = disabled,
        ),
        FieldType::Email => format!(
            "<input type=\"email\" id=\"{name}\" name=\"{name}\" class=\"form-input\" \
             value=\"{value}\" placeholder=\"{placeholder}\"{disabled}>\n",
            name = field.name,
            value = escape(&text_value),
            placeholder = escape(&placeholder),
            disabled = disabled,
        ),
        FieldType::Text => format!(
            "<input type=\"text\" id=\"{name}\" name=\"{name}\" class=\"form-input\" \
             value=\"{value}\" placeholder=\"{placeholder}\"{maxlength}{disabled}>\n",
            name = field.name,
            value = escape(&text_value),
            placeholder = escape(&placeholder),
            maxlength = max_length_attr(field),
            disabled = disabled,
        ),
    }
}

fn render_select(
    field: &FieldDescriptor,
    current: &str,
    ctx: &FormContext<'_>,
    disabled: &str,
) -> String {
    let mut out = format!(
        "<select id=\"{name}\" name=\"{name}\" class=\"form-select\"{disabled}>\n",
        name = field.name,
        disabled = disabled,
    );
    out.push_str(&format!(
        "<option value=\"\">Select {}</option>\n",
        escape(field.display_label())
    ));

    if let Some(reference) = field.reference {
        let options = ctx.reference_data.get(reference).map(Vec::as_slice).unwrap_or(&[]);
        let candidates = registry().get(reference).map(|m| m.label_fields);

        for option in options {
            let Some(id) = option_id(option) else { continue };
            let label = option_label(option, candidates).unwrap_or_else(|| id.clone());
            let selected = if id == current { " selected" } else { "" };
            out.push_str(&format!(
                "<option value=\"{}\"{}>{}</option>\n",
                escape(&id),
                selected,
                escape(&label)
            ));
        }
    }

    out.push_str("</select>\n");
    out
}

fn max_length_attr(field: &FieldDescriptor) -> String {
    field.max_length.map(|n| format!(" maxlength=\"{}\"", n)).unwrap_or_default()
}

fn option_id(option: &Value) -> Option<String> {
    for key in ["id", "Id"] {
        match option.get(key) {
            Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

fn option_label(option: &Value, candidates: Option<&'static [&'static str]>) -> Option<String> {
    for key in candidates? {
        if let Some(Value::String(s)) = option.get(*key) {
            if !s.is_empty() {
                return Some(s.clone());
            }
        }
    }
    None
}
