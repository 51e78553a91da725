//! The generic CRUD engine: one implementation of list/create/edit/delete
//! driven entirely by a module descriptor.

pub mod pagination;
pub mod query;
pub mod record;
pub mod validate;

use futures::future::join_all;
use serde_json::Value;
use std::collections::HashMap;

use crate::client::response::{normalize_list, NormalizedList};
use crate::client::{BackendClient, ClientError};
use crate::config;
use crate::error::PortalError;
use crate::registry::{registry, ModuleDescriptor};
use pagination::PageState;
use query::{matches_query, sort_records, SortState};
use record::Record;

/// Lifecycle of the primary list fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    LoadError(String),
}

/// Per-module view state: the loaded page, its pagination/sort/search
/// bookkeeping, and the prefetched reference lists for dropdowns.
///
/// The three busy flags are deliberately separate - a form submission in
/// flight must not block or be confused with a delete confirmation or a
/// list refresh happening at the same time.
pub struct ModuleView {
    pub module: &'static ModuleDescriptor,
    pub records: Vec<Value>,
    pub page: PageState,
    pub sort: SortState,
    pub search: String,
    pub state: LoadState,
    pub list_busy: bool,
    pub form_busy: bool,
    pub delete_busy: bool,
    pub reference_data: HashMap<&'static str, Vec<Value>>,
    fetch_generation: u64,
}

impl ModuleView {
    pub fn new(module: &'static ModuleDescriptor) -> Self {
        let cfg = &config::config().pagination;
        Self {
            module,
            records: Vec::new(),
            page: PageState::new(cfg.default_page, cfg.default_limit),
            sort: SortState::default(),
            search: String::new(),
            state: LoadState::Idle,
            list_busy: false,
            form_busy: false,
            delete_busy: false,
            reference_data: HashMap::new(),
            fetch_generation: 0,
        }
    }

    /// Mark a list fetch as started and stamp it. The stamp must be handed
    /// back to [`complete_fetch`]; a response carrying an old stamp lost the
    /// race to a newer fetch and is dropped.
    pub fn begin_fetch(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.state = LoadState::Loading;
        self.list_busy = true;
        self.fetch_generation
    }

    pub fn complete_fetch(&mut self, generation: u64, result: Result<NormalizedList, String>) {
        if generation != self.fetch_generation {
            tracing::debug!(
                module = self.module.key,
                "dropping stale list response (gen {} != {})",
                generation,
                self.fetch_generation
            );
            return;
        }
        self.list_busy = false;

        match result {
            Ok(list) => {
                self.records = list.items;
                self.page.total = list.total;
                self.state = LoadState::Loaded;
            }
            Err(message) => {
                self.records = Vec::new();
                self.state = LoadState::LoadError(message);
            }
        }
    }

    pub fn set_page(&mut self, page: u64) {
        self.page.page = page.max(1);
    }

    pub fn toggle_sort(&mut self, column: &str) {
        self.sort.toggle(column);
    }

    /// The rows to render: the loaded page filtered by the local search and
    /// sorted by the active column. Purely local - no server round trip.
    pub fn visible_records(&self) -> Vec<Value> {
        let mut rows: Vec<Value> = self
            .records
            .iter()
            .filter(|r| matches_query(r, self.module, &self.search))
            .cloned()
            .collect();

        if let Some(key) = &self.sort.key {
            sort_records(&mut rows, key, self.sort.direction);
        }

        rows
    }

    /// Human label for a foreign id, resolved against the cached reference
    /// list. Falls back to the raw id when the list is missing or the id is
    /// not in it - a dangling reference degrades, it never errors.
    pub fn reference_label(&self, reference: &str, id: &Value) -> String {
        resolve_reference_name(&self.reference_data, reference, id)
    }
}

/// Resolve a display label for `id` out of the prefetched `refs` lists,
/// using the referenced module's configured label fields.
pub fn resolve_reference_name(
    refs: &HashMap<&'static str, Vec<Value>>,
    reference: &str,
    id: &Value,
) -> String {
    let raw = query::display_string(id);
    if raw.is_empty() {
        return raw;
    }

    let Some(candidates) = registry().get(reference).map(|m| m.label_fields) else {
        return raw;
    };
    let Some(list) = refs.get(reference) else {
        return raw;
    };

    let hit = list.iter().find(|r| {
        ["id", "Id"]
            .iter()
            .any(|k| r.get(*k).map(|v| query::display_string(v) == raw).unwrap_or(false))
    });

    let Some(record) = hit else {
        return raw;
    };

    for key in candidates {
        if let Some(Value::String(s)) = record.get(*key) {
            if !s.is_empty() {
                return s.clone();
            }
        }
    }

    raw
}

/// Async half of the engine: everything that talks to the backend.
#[derive(Clone)]
pub struct CrudEngine {
    client: BackendClient,
}

impl CrudEngine {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Fetch one server page and normalize whatever shape it arrives in.
    pub async fn fetch_page(
        &self,
        token: &str,
        module: &ModuleDescriptor,
        page: u64,
        limit: u64,
        search: Option<&str>,
    ) -> Result<NormalizedList, PortalError> {
        let body = self
            .client
            .list(token, module.endpoint, page, limit, search)
            .await
            .map_err(fetch_error)?;

        normalize_list(&body).map_err(|_| {
            tracing::error!(module = module.key, "unrecognized list response shape");
            PortalError::fetch_failed("Failed to load data")
        })
    }

    /// Prefetch the option lists for every module referenced by a select
    /// field, concurrently. One failing reference resolves to an empty list
    /// with a warning; it never blocks the others.
    pub async fn fetch_references(
        &self,
        token: &str,
        module: &ModuleDescriptor,
    ) -> HashMap<&'static str, Vec<Value>> {
        let max_limit = config::config().pagination.max_limit;
        let keys = module.referenced_modules();

        let fetches = keys.iter().map(|&key| {
            let client = self.client.clone();
            async move {
                let Some(referenced) = registry().get(key) else {
                    tracing::warn!("reference {} is not a registered module", key);
                    return (key, Vec::new());
                };

                match client.list(token, referenced.endpoint, 1, max_limit, None).await {
                    Ok(body) => match normalize_list(&body) {
                        Ok(list) => (key, list.items),
                        Err(_) => {
                            tracing::warn!("reference data for {} had unknown shape", key);
                            (key, Vec::new())
                        }
                    },
                    Err(e) => {
                        tracing::warn!("failed to load reference data for {}: {}", key, e);
                        (key, Vec::new())
                    }
                }
            }
        });

        join_all(fetches).await.into_iter().collect()
    }

    /// Create or update. Validation runs first and short-circuits before any
    /// network traffic; system fields are stripped and booleans coerced
    /// strictly before the payload leaves the portal.
    pub async fn submit(
        &self,
        token: &str,
        module: &ModuleDescriptor,
        input: Record,
        editing_id: Option<&str>,
    ) -> Result<(), PortalError> {
        let errors = validate::validate(&module.fields, &input);
        if !errors.is_empty() {
            return Err(PortalError::validation("Please fix the highlighted fields", errors));
        }

        let payload = validate::coerce_booleans(&module.fields, input.stripped()).into_value();

        let result = match editing_id {
            Some(id) => self.client.update(token, module.endpoint, id, &payload).await,
            None => self.client.create(token, module.endpoint, &payload).await,
        };

        result.map(|_| ()).map_err(|e| mutation_error(e, Mutation::Save))
    }

    pub async fn delete(
        &self,
        token: &str,
        module: &ModuleDescriptor,
        id: &str,
    ) -> Result<(), PortalError> {
        self.client
            .delete(token, module.endpoint, id)
            .await
            .map(|_| ())
            .map_err(|e| mutation_error(e, Mutation::Delete))
    }
}

#[derive(Clone, Copy)]
enum Mutation {
    Save,
    Delete,
}

impl Mutation {
    fn fallback(self) -> &'static str {
        match self {
            Mutation::Save => "Failed to save",
            Mutation::Delete => "Failed to delete",
        }
    }

    fn wrap(self, message: String) -> PortalError {
        match self {
            Mutation::Save => PortalError::SaveFailed(message),
            Mutation::Delete => PortalError::DeleteFailed(message),
        }
    }
}

fn fetch_error(err: ClientError) -> PortalError {
    match err {
        ClientError::AuthExpired => PortalError::AuthExpired,
        ClientError::Forbidden(_) => PortalError::forbidden("User not found in any tenant system."),
        other => {
            tracing::error!("list fetch failed: {}", other);
            PortalError::fetch_failed("Failed to load data")
        }
    }
}

/// Map a mutation failure, preferring the server's own message when it sent
/// one and falling back to a generic per-verb message.
fn mutation_error(err: ClientError, kind: Mutation) -> PortalError {
    match err {
        ClientError::AuthExpired => PortalError::AuthExpired,
        ClientError::Forbidden(_) => PortalError::forbidden("User not found in any tenant system."),
        ClientError::Status { message, .. } if !message.is_empty() => kind.wrap(message),
        other => {
            tracing::error!("mutation failed: {}", other);
            kind.wrap(kind.fallback().to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn view(key: &str) -> ModuleView {
        ModuleView::new(registry().get(key).expect("module"))
    }

    #[test]
    fn fetch_lifecycle_updates_state_and_total() {
        let mut v = view("taxTypes");
        assert_eq!(v.state, LoadState::Idle);

        let gen = v.begin_fetch();
        assert_eq!(v.state, LoadState::Loading);
        assert!(v.list_busy);

        v.complete_fetch(
            gen,
            Ok(NormalizedList { items: vec![json!({"Name": "VAT"})], total: 41 }),
        );
        assert_eq!(v.state, LoadState::Loaded);
        assert!(!v.list_busy);
        assert_eq!(v.records.len(), 1);
        assert_eq!(v.page.total, 41);
    }

    #[test]
    fn stale_responses_are_dropped() {
        let mut v = view("taxTypes");

        let first = v.begin_fetch();
        let second = v.begin_fetch();

        // the older fetch resolves after the newer one started: ignored
        v.complete_fetch(first, Ok(NormalizedList { items: vec![json!({"Name": "old"})], total: 1 }));
        assert_eq!(v.state, LoadState::Loading);
        assert!(v.records.is_empty());

        v.complete_fetch(
            second,
            Ok(NormalizedList { items: vec![json!({"Name": "new"})], total: 1 }),
        );
        assert_eq!(v.records[0]["Name"], json!("new"));
    }

    #[test]
    fn fetch_error_empties_the_list() {
        let mut v = view("taxTypes");
        let gen = v.begin_fetch();
        v.complete_fetch(gen, Ok(NormalizedList { items: vec![json!({"Name": "x"})], total: 1 }));

        let gen = v.begin_fetch();
        v.complete_fetch(gen, Err("Failed to load data".into()));
        assert!(v.records.is_empty());
        assert_eq!(v.state, LoadState::LoadError("Failed to load data".into()));
    }

    #[test]
    fn busy_flags_are_independent() {
        let mut v = view("taxTypes");
        v.form_busy = true;
        v.delete_busy = true;
        let gen = v.begin_fetch();
        v.complete_fetch(gen, Ok(NormalizedList { items: vec![], total: 0 }));

        // completing the list fetch leaves the other flows untouched
        assert!(!v.list_busy);
        assert!(v.form_busy);
        assert!(v.delete_busy);
    }

    #[test]
    fn visible_records_filter_and_sort_locally() {
        let mut v = view("taxTypes");
        let gen = v.begin_fetch();
        v.complete_fetch(
            gen,
            Ok(NormalizedList {
                items: vec![
                    json!({"Name": "Service Tax", "Value": 12}),
                    json!({"Name": "VAT", "Value": 20}),
                    json!({"Name": "GST", "Value": 18}),
                ],
                total: 3,
            }),
        );

        v.search = "a".into(); // matches "Service Tax" and "VAT" by Name
        v.toggle_sort("Value");
        let rows = v.visible_records();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Name"], json!("Service Tax"));
        assert_eq!(rows[1]["Name"], json!("VAT"));

        // search never mutates the loaded page
        assert_eq!(v.records.len(), 3);
    }

    #[test]
    fn reference_labels_resolve_with_raw_id_fallback() {
        let mut refs: HashMap<&'static str, Vec<Value>> = HashMap::new();
        refs.insert(
            "uom",
            vec![
                json!({"Id": 1, "UnitName": "Kilogram"}),
                json!({"id": "2", "UnitName": "Litre"}),
            ],
        );

        assert_eq!(resolve_reference_name(&refs, "uom", &json!(1)), "Kilogram");
        assert_eq!(resolve_reference_name(&refs, "uom", &json!("2")), "Litre");
        // unknown id: raw id comes back
        assert_eq!(resolve_reference_name(&refs, "uom", &json!(99)), "99");
        // reference list never loaded
        assert_eq!(resolve_reference_name(&refs, "taxGroups", &json!(4)), "4");
        // module key that is not registered at all
        assert_eq!(resolve_reference_name(&refs, "ghosts", &json!(4)), "4");
        // null id renders as empty
        assert_eq!(resolve_reference_name(&refs, "uom", &json!(null)), "");
    }

    #[test]
    fn label_candidates_follow_module_configuration() {
        let mut refs: HashMap<&'static str, Vec<Value>> = HashMap::new();
        // contactDetails pins FirstName; a generic "name" key must lose to it
        refs.insert(
            "contactDetails",
            vec![json!({"Id": 9, "name": "wrong", "FirstName": "Ada"})],
        );
        // pinned list ignores keys not in it
        assert_eq!(resolve_reference_name(&refs, "contactDetails", &json!(9)), "Ada");
    }
}
