use serde_json::{Map, Value};

/// Server-managed fields that must never be sent back on create/update,
/// in every casing convention the backend has been seen to use.
pub const SYSTEM_FIELDS: &[&str] = &[
    "Id",
    "id",
    "TenantId",
    "tenantId",
    "CreatedAt",
    "UpdatedAt",
    "CreatedOn",
    "UpdatedOn",
    "createdAt",
    "updatedAt",
    "createdOn",
    "updatedOn",
    "CreatedBy",
    "UpdatedBy",
    "createdBy",
    "updatedBy",
    "DeletedAt",
    "deletedAt",
    "DeletedBy",
    "deletedBy",
];

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Expected a JSON object")]
    NotAnObject,
}

/// A dynamic record - one row of whatever module is being managed. The shape
/// comes entirely from the module descriptor; this wrapper only knows about
/// the system fields common to every module.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_value(value: Value) -> Result<Self, RecordError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(RecordError::NotAnObject),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) -> &mut Self {
        self.fields.insert(key.into(), value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Record id, tolerating both `id` and `Id` casing from the API.
    pub fn id(&self) -> Option<String> {
        for key in ["id", "Id"] {
            match self.fields.get(key) {
                Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
                Some(Value::Number(n)) => return Some(n.to_string()),
                _ => {}
            }
        }
        None
    }

    /// Copy of the record with every system-managed field removed. This is
    /// the only form that may ever be sent to the backend on a mutation.
    pub fn stripped(&self) -> Self {
        let fields = self
            .fields
            .iter()
            .filter(|(k, _)| !SYSTEM_FIELDS.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Self { fields }
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Strict boolean from the representations the backend and forms produce:
/// `true`, `1`, `"1"`, `"true"`. Everything else is false.
pub fn coerce_bool(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_i64() == Some(1),
        Value::String(s) => s == "1" || s == "true",
        _ => false,
    }
}
