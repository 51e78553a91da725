pub mod modules;

use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

/// Closed set of field kinds. Rendering and validation match on this
/// exhaustively - a new kind will not compile until every consumer handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Number,
    Boolean,
    Select,
    TextArea,
    Date,
    DateTime,
    Email,
}

/// Static default for a field when creating a new record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldDefault {
    Bool(bool),
    Text(&'static str),
}

impl FieldDefault {
    pub fn as_value(&self) -> Value {
        match self {
            FieldDefault::Bool(b) => Value::Bool(*b),
            FieldDefault::Text(s) => Value::String((*s).to_string()),
        }
    }
}

/// One field of a module's schema.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub label: Option<&'static str>,
    pub field_type: FieldType,
    pub required: bool,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub default: Option<FieldDefault>,
    /// Module key whose records populate this select field.
    pub reference: Option<&'static str>,
    pub hidden: bool,
    /// Layout hint: span the full form width.
    pub wide: bool,
}

impl FieldDescriptor {
    fn new(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            label: None,
            field_type,
            required: false,
            max_length: None,
            min: None,
            max: None,
            step: None,
            default: None,
            reference: None,
            hidden: false,
            wide: false,
        }
    }

    pub fn text(name: &'static str) -> Self {
        Self::new(name, FieldType::Text)
    }

    pub fn number(name: &'static str) -> Self {
        Self::new(name, FieldType::Number)
    }

    pub fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldType::Boolean)
    }

    /// A dropdown backed by another module's records.
    pub fn select(name: &'static str, reference: &'static str) -> Self {
        let mut f = Self::new(name, FieldType::Select);
        f.reference = Some(reference);
        f
    }

    pub fn textarea(name: &'static str) -> Self {
        Self::new(name, FieldType::TextArea)
    }

    pub fn date(name: &'static str) -> Self {
        Self::new(name, FieldType::Date)
    }

    pub fn datetime(name: &'static str) -> Self {
        Self::new(name, FieldType::DateTime)
    }

    pub fn email(name: &'static str) -> Self {
        Self::new(name, FieldType::Email)
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    pub fn min(mut self, v: f64) -> Self {
        self.min = Some(v);
        self
    }

    pub fn max(mut self, v: f64) -> Self {
        self.max = Some(v);
        self
    }

    pub fn step(mut self, v: f64) -> Self {
        self.step = Some(v);
        self
    }

    pub fn default_bool(mut self, b: bool) -> Self {
        self.default = Some(FieldDefault::Bool(b));
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn wide(mut self) -> Self {
        self.wide = true;
        self
    }

    /// Display label, falling back to the raw field name.
    pub fn display_label(&self) -> &'static str {
        self.label.unwrap_or(self.name)
    }
}

/// One column of the module's table view. Most columns are a bare field
/// name; a column may override the label, pin a width, or resolve a foreign
/// id against another module's records.
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    pub key: &'static str,
    pub label: Option<&'static str>,
    pub width: Option<&'static str>,
    pub reference: Option<&'static str>,
}

impl ColumnSpec {
    pub fn new(key: &'static str) -> Self {
        Self { key, label: None, width: None, reference: None }
    }

    pub fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    pub fn width(mut self, width: &'static str) -> Self {
        self.width = Some(width);
        self
    }

    pub fn reference(mut self, reference: &'static str) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn display_label(&self) -> &'static str {
        self.label.unwrap_or(self.key)
    }
}

/// Fixed set of sidebar/index groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    MasterData,
    Inventory,
    Transactions,
    Payments,
    Contacts,
    Organization,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::MasterData => "Master Data",
            Category::Inventory => "Inventory",
            Category::Transactions => "Transactions",
            Category::Payments => "Payments",
            Category::Contacts => "Contacts & Addresses",
            Category::Organization => "Organization",
        }
    }

    /// Display order for the index page and sidebar.
    pub fn all() -> &'static [Category] {
        &[
            Category::MasterData,
            Category::Inventory,
            Category::Transactions,
            Category::Payments,
            Category::Contacts,
            Category::Organization,
        ]
    }
}

/// Ordered candidate keys tried when resolving a record's display label.
/// Modules with a known authoritative field pin their own list instead.
pub const DEFAULT_LABEL_FIELDS: &[&str] = &[
    "name",
    "Name",
    "typeName",
    "TypeName",
    "title",
    "Title",
    "UnitName",
    "ProviderName",
    "FirstName",
    "BatchNumber",
    "TransactionNo",
];

/// Everything the generic CRUD page needs to know about one entity type.
#[derive(Debug, Clone)]
pub struct ModuleDescriptor {
    pub key: &'static str,
    pub name: &'static str,
    /// REST base path on the backend.
    pub endpoint: &'static str,
    pub icon: &'static str,
    pub category: Category,
    pub fields: Vec<FieldDescriptor>,
    pub table_columns: Vec<ColumnSpec>,
    /// Field names eligible for the local text search.
    pub search_fields: Vec<&'static str>,
    /// Which fields name a record of this module, in precedence order.
    pub label_fields: &'static [&'static str],
}

impl ModuleDescriptor {
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Distinct module keys referenced by this module's select fields.
    pub fn referenced_modules(&self) -> Vec<&'static str> {
        let mut refs = Vec::new();
        for field in &self.fields {
            if field.field_type == FieldType::Select {
                if let Some(r) = field.reference {
                    if !refs.contains(&r) {
                        refs.push(r);
                    }
                }
            }
        }
        refs
    }
}

/// Read-only lookup over the module definitions. Built once at startup;
/// there is no dynamic registration.
pub struct Registry {
    modules: Vec<ModuleDescriptor>,
    index: HashMap<&'static str, usize>,
}

impl Registry {
    fn new(modules: Vec<ModuleDescriptor>) -> Self {
        let index = modules.iter().enumerate().map(|(i, m)| (m.key, i)).collect();
        Self { modules, index }
    }

    pub fn get(&self, key: &str) -> Option<&ModuleDescriptor> {
        self.index.get(key).map(|&i| &self.modules[i])
    }

    pub fn all(&self) -> &[ModuleDescriptor] {
        &self.modules
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.modules.iter().map(|m| m.key)
    }

    /// Modules grouped for the index page, in fixed category order.
    pub fn by_category(&self) -> Vec<(Category, Vec<&ModuleDescriptor>)> {
        Category::all()
            .iter()
            .map(|&cat| {
                let members = self.modules.iter().filter(|m| m.category == cat).collect();
                (cat, members)
            })
            .filter(|(_, members): &(Category, Vec<_>)| !members.is_empty())
            .collect()
    }
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| Registry::new(modules::all_modules()));

pub fn registry() -> &'static Registry {
    &REGISTRY
}
