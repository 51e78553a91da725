//! Normalization of the backend's list responses.
//!
//! The list endpoint does not answer with one shape. The deployed backend
//! swaps the `message` and `data` fields - records arrive in `message`,
//! pagination metadata in `data` - and older deployments answer with any of
//! the conventional layouts. All of the shape-sniffing lives here, in one
//! function with one test per accepted shape, so a future backend fix is a
//! one-line precedence change.

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
#[error("unrecognized list response shape")]
pub struct NormalizeError;

/// A list response reduced to the only two things the engine needs.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedList {
    pub items: Vec<Value>,
    /// Authoritative total across all pages, per the server.
    pub total: u64,
}

/// Reduce any of the known list-response shapes to records + total.
///
/// Accepted, in precedence order:
/// 1. `{success, data: {..pagination}, message: [records]}` - the swapped
///    shape the live backend emits
/// 2. `{success, data: [records], pagination: {total}}`
/// 3. `{data: [records], total?}` / `{data: [records], pagination: {total}}`
/// 4. `{data: {items: [records], total?}}`
/// 5. `[records]` - bare array
/// 6. `{Data: [records]}` - casing quirk seen on reference lookups
///
/// Anything else is an error; the caller shows an empty list plus a message
/// rather than crashing or mis-reading the body.
pub fn normalize_list(body: &Value) -> Result<NormalizedList, NormalizeError> {
    let has_success = body.get("success").is_some();

    if has_success {
        // Swapped shape: records in `message`, pagination in `data`.
        if let Some(items) = body.get("message").and_then(Value::as_array) {
            let total = body
                .get("data")
                .and_then(|d| d.get("total"))
                .and_then(Value::as_u64)
                .unwrap_or(items.len() as u64);
            return Ok(NormalizedList { items: items.clone(), total });
        }

        if let Some(items) = body.get("data").and_then(Value::as_array) {
            let total = body
                .get("pagination")
                .and_then(|p| p.get("total"))
                .and_then(Value::as_u64)
                .unwrap_or(items.len() as u64);
            return Ok(NormalizedList { items: items.clone(), total });
        }
    }

    if let Some(items) = body.get("data").and_then(Value::as_array) {
        let total = body
            .get("total")
            .and_then(Value::as_u64)
            .or_else(|| {
                body.get("pagination").and_then(|p| p.get("total")).and_then(Value::as_u64)
            })
            .unwrap_or(items.len() as u64);
        return Ok(NormalizedList { items: items.clone(), total });
    }

    if let Some(items) = body
        .get("data")
        .and_then(|d| d.get("items"))
        .and_then(Value::as_array)
    {
        let total = body
            .get("data")
            .and_then(|d| d.get("total"))
            .and_then(Value::as_u64)
            .unwrap_or(items.len() as u64);
        return Ok(NormalizedList { items: items.clone(), total });
    }

    if let Some(items) = body.as_array() {
        return Ok(NormalizedList { items: items.clone(), total: items.len() as u64 });
    }

    if let Some(items) = body.get("Data").and_then(Value::as_array) {
        return Ok(NormalizedList { items: items.clone(), total: items.len() as u64 });
    }

    Err(NormalizeError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Value {
        json!([{"Id": 1, "Name": "a"}, {"Id": 2, "Name": "b"}])
    }

    #[test]
    fn swapped_message_and_data_fields() {
        let body = json!({
            "success": true,
            "data": { "page": 1, "limit": 20, "total": 45 },
            "message": records(),
            "pagination": "2 of 45 records",
        });
        let out = normalize_list(&body).unwrap();
        assert_eq!(out.items.len(), 2);
        assert_eq!(out.total, 45);
    }

    #[test]
    fn swapped_shape_without_total_falls_back_to_len() {
        let body = json!({ "success": true, "data": {}, "message": records() });
        assert_eq!(normalize_list(&body).unwrap().total, 2);
    }

    #[test]
    fn envelope_with_data_array() {
        let body = json!({
            "success": true,
            "data": records(),
            "pagination": { "total": 7 },
        });
        let out = normalize_list(&body).unwrap();
        assert_eq!(out.items.len(), 2);
        assert_eq!(out.total, 7);
    }

    #[test]
    fn plain_data_array_with_total_variants() {
        let with_total = json!({ "data": records(), "total": 9 });
        assert_eq!(normalize_list(&with_total).unwrap().total, 9);

        let with_pagination = json!({ "data": records(), "pagination": { "total": 11 } });
        assert_eq!(normalize_list(&with_pagination).unwrap().total, 11);

        let bare = json!({ "data": records() });
        assert_eq!(normalize_list(&bare).unwrap().total, 2);
    }

    #[test]
    fn nested_items_shape() {
        let body = json!({ "data": { "items": records(), "total": 31 } });
        let out = normalize_list(&body).unwrap();
        assert_eq!(out.items.len(), 2);
        assert_eq!(out.total, 31);
    }

    #[test]
    fn bare_array() {
        let out = normalize_list(&records()).unwrap();
        assert_eq!(out.items.len(), 2);
        assert_eq!(out.total, 2);
    }

    #[test]
    fn capitalized_data_quirk() {
        let body = json!({ "Data": records() });
        assert_eq!(normalize_list(&body).unwrap().items.len(), 2);
    }

    #[test]
    fn unrecognized_shapes_are_rejected_not_guessed() {
        assert!(normalize_list(&json!({ "success": true })).is_err());
        assert!(normalize_list(&json!("just a string")).is_err());
        assert!(normalize_list(&json!({ "data": "not an array" })).is_err());
        assert!(normalize_list(&Value::Null).is_err());
    }
}
