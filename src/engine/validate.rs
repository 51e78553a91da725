//! Schema-driven form validation and type coercion.

use serde_json::Value;
use std::collections::HashMap;

use super::record::{coerce_bool, Record};
use crate::registry::{FieldDescriptor, FieldType};

/// Default values for a fresh create form: explicit default if the schema
/// has one, `false` for booleans, empty string otherwise.
pub fn initial_values(fields: &[FieldDescriptor]) -> Record {
    let mut record = Record::new();
    for field in fields {
        let value = match &field.default {
            Some(d) => d.as_value(),
            None if field.field_type == FieldType::Boolean => Value::Bool(false),
            None => Value::String(String::new()),
        };
        record.set(field.name, value);
    }
    record
}

/// Build a record from submitted form pairs, coercing each value by its
/// field type. Checkboxes only appear in the submission when ticked, so
/// booleans default to false.
pub fn record_from_form(fields: &[FieldDescriptor], form: &[(String, String)]) -> Record {
    let mut record = Record::new();

    for field in fields {
        if field.hidden {
            continue;
        }
        let raw = form.iter().find(|(k, _)| k == field.name).map(|(_, v)| v.as_str());

        let value = match field.field_type {
            FieldType::Boolean => {
                Value::Bool(matches!(raw, Some("on") | Some("true") | Some("1")))
            }
            FieldType::Number => match raw {
                None | Some("") => Value::String(String::new()),
                Some(s) => match s.parse::<f64>() {
                    Ok(n) => serde_json::Number::from_f64(n)
                        .map(Value::Number)
                        .unwrap_or_else(|| Value::String(s.to_string())),
                    // leave unparseable input alone; required/min/max report on it
                    Err(_) => Value::String(s.to_string()),
                },
            },
            _ => Value::String(raw.unwrap_or_default().to_string()),
        };

        record.set(field.name, value);
    }

    record
}

/// Validate every visible field, collecting all violations at once so the
/// user sees each problem in a single round trip.
pub fn validate(fields: &[FieldDescriptor], record: &Record) -> HashMap<String, String> {
    let mut errors = HashMap::new();

    for field in fields {
        if field.hidden {
            continue;
        }
        let label = field.display_label();
        let value = record.get(field.name);

        if field.required && is_blank(value) {
            errors.insert(field.name.to_string(), format!("{} is required", label));
            continue;
        }

        if let (Some(max), Some(Value::String(s))) = (field.max_length, value) {
            if s.chars().count() > max {
                errors.insert(
                    field.name.to_string(),
                    format!("{} must be less than {} characters", label, max),
                );
            }
        }

        if field.field_type == FieldType::Number {
            if let Some(n) = value.and_then(Value::as_f64) {
                if let Some(min) = field.min {
                    if n < min {
                        errors.insert(
                            field.name.to_string(),
                            format!("{} must be at least {}", label, min),
                        );
                    }
                }
                if let Some(max) = field.max {
                    if n > max {
                        errors.insert(
                            field.name.to_string(),
                            format!("{} must be at most {}", label, max),
                        );
                    }
                }
            }
        }
    }

    errors
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Force every boolean field to a strict bool before submission, whatever
/// representation it arrived in.
pub fn coerce_booleans(fields: &[FieldDescriptor], mut record: Record) -> Record {
    for field in fields {
        if field.field_type == FieldType::Boolean {
            let coerced = record.get(field.name).map(coerce_bool).unwrap_or(false);
            record.set(field.name, Value::Bool(coerced));
        }
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::registry;
    use serde_json::json;

    fn tax_type_fields() -> &'static [FieldDescriptor] {
        &registry().get("taxTypes").unwrap().fields
    }

    #[test]
    fn initial_values_apply_defaults() {
        let record = initial_values(tax_type_fields());
        assert_eq!(record.get("Name"), Some(&json!("")));
        assert_eq!(record.get("Value"), Some(&json!("")));
        // explicit default wins over the boolean fallback
        assert_eq!(record.get("Active"), Some(&json!(true)));

        let uom = &registry().get("uom").unwrap().fields;
        let record = initial_values(uom);
        assert_eq!(record.get("IsPrimary"), Some(&json!(false)));
    }

    #[test]
    fn form_pairs_are_type_coerced() {
        let form = vec![
            ("Name".to_string(), "VAT".to_string()),
            ("Value".to_string(), "17.5".to_string()),
            ("Active".to_string(), "on".to_string()),
        ];
        let record = record_from_form(tax_type_fields(), &form);
        assert_eq!(record.get("Name"), Some(&json!("VAT")));
        assert_eq!(record.get("Value"), Some(&json!(17.5)));
        assert_eq!(record.get("Active"), Some(&json!(true)));

        // unticked checkbox is simply absent from the submission
        let form = vec![("Name".to_string(), "VAT".to_string())];
        let record = record_from_form(tax_type_fields(), &form);
        assert_eq!(record.get("Active"), Some(&json!(false)));
        assert_eq!(record.get("Value"), Some(&json!("")));
    }

    #[test]
    fn missing_required_field_is_reported() {
        let mut record = initial_values(tax_type_fields());
        record.set("Value", json!(10));

        let errors = validate(tax_type_fields(), &record);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("Name"), Some(&"Name is required".to_string()));
    }

    #[test]
    fn all_violations_are_collected_not_fail_fast() {
        let fields = tax_type_fields();
        let mut record = Record::new();
        record.set("Name", json!("x".repeat(101)));
        record.set("Value", json!(250));

        let errors = validate(fields, &record);
        assert_eq!(errors.len(), 2);
        assert!(errors.get("Name").unwrap().contains("less than 100 characters"));
        assert!(errors.get("Value").unwrap().contains("at most 100"));
    }

    #[test]
    fn min_max_only_apply_when_a_number_is_present() {
        let fields = tax_type_fields();
        let mut record = initial_values(fields);
        record.set("Name", json!("ok"));
        // Value left as "" - not required-violating here? it is required
        let errors = validate(fields, &record);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("Value"));

        // optional numeric field with empty value: no error
        let configs = &registry().get("transactionTypeConfigs").unwrap().fields;
        let mut record = initial_values(configs);
        record.set("StartCounterNo", json!(5));
        record.set("Format", json!("TXN-{n}"));
        let errors = validate(configs, &record);
        assert!(errors.is_empty(), "unexpected: {:?}", errors);
    }

    #[test]
    fn labels_are_used_in_messages() {
        let uom = &registry().get("uom").unwrap().fields;
        let record = Record::new();
        let errors = validate(uom, &record);
        assert_eq!(errors.get("UnitName"), Some(&"Unit Name is required".to_string()));
    }

    #[test]
    fn boolean_coercion_before_submit() {
        let fields = tax_type_fields();
        let mut record = Record::new();
        record.set("Name", json!("VAT"));
        record.set("Active", json!("1"));
        let record = coerce_booleans(fields, record);
        assert_eq!(record.get("Active"), Some(&json!(true)));

        let mut record = Record::new();
        record.set("Active", json!("no"));
        let record = coerce_booleans(fields, record);
        assert_eq!(record.get("Active"), Some(&json!(false)));
    }
}
