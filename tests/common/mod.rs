//! In-process mock of the tenant REST backend, with the live backend's
//! quirks baked in: list responses arrive in the swapped
//! `message`/`data` shape, and single entities answer enveloped.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

pub const GOOD_GOOGLE_TOKEN: &str = "good-google-credential";
pub const DEAD_SESSION_TOKEN: &str = "dead";

pub struct MockState {
    /// Seeded records per entity path segment ("taxtypes", "uom", ...).
    pub collections: Mutex<HashMap<String, Vec<Value>>>,
    /// Every create/update body the backend received, with its entity.
    pub captured: Mutex<Vec<(String, Value)>>,
    /// Entities that answer 500 to exercise failure isolation.
    pub failing: Mutex<HashSet<String>>,
}

pub struct MockBackend {
    pub base_url: String,
    pub state: Arc<MockState>,
}

impl MockBackend {
    pub fn seed(&self, entity: &str, records: Vec<Value>) {
        self.state.collections.lock().unwrap().insert(entity.to_string(), records);
    }

    pub fn fail_entity(&self, entity: &str) {
        self.state.failing.lock().unwrap().insert(entity.to_string());
    }

    pub fn captured_bodies(&self, entity: &str) -> Vec<Value> {
        self.state
            .captured
            .lock()
            .unwrap()
            .iter()
            .filter(|(e, _)| e == entity)
            .map(|(_, body)| body.clone())
            .collect()
    }

    pub fn records(&self, entity: &str) -> Vec<Value> {
        self.state.collections.lock().unwrap().get(entity).cloned().unwrap_or_default()
    }
}

/// Mint a signed token whose payload the portal will decode.
pub fn mint_token(tid: &str, scopes: &[&str], exp_offset_secs: i64) -> String {
    let now = chrono_now();
    let payload = json!({
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "tid": tid,
        "scopes": scopes,
        "associatedTenants": [
            {"tenantId": tid, "isAdmin": true},
            {"tenantId": "tenant-other", "isAdmin": false},
        ],
        "exp": now + exp_offset_secs,
        "iat": now,
    });
    encode(&Header::default(), &payload, &EncodingKey::from_secret(b"mock-secret"))
        .expect("mint token")
}

fn chrono_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock")
        .as_secs() as i64
}

pub async fn spawn_backend() -> MockBackend {
    let state = Arc::new(MockState {
        collections: Mutex::new(HashMap::new()),
        captured: Mutex::new(Vec::new()),
        failing: Mutex::new(HashSet::new()),
    });

    let app = Router::new()
        .route("/api/auth/google", post(login))
        .route("/api/user/logout", post(logout))
        .route("/api/tenants/switch", post(switch_tenant))
        .route("/api/:entity", get(list_entity).post(create_entity))
        .route(
            "/api/:entity/:id",
            get(get_entity).put(update_entity).delete(delete_entity),
        )
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind mock");
    let base_url = format!("http://{}", listener.local_addr().expect("addr"));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("mock backend");
    });

    MockBackend { base_url, state }
}

// ========================================
// Auth handlers
// ========================================

async fn login(Json(body): Json<Value>) -> Response {
    if body.get("id_token").and_then(Value::as_str) == Some(GOOD_GOOGLE_TOKEN) {
        Json(json!({ "token": mint_token("tenant-1", &["TENANT:ADMIN"], 3600) })).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Auth Error: User does not exist." })),
        )
            .into_response()
    }
}

async fn logout() -> Json<Value> {
    Json(json!({ "success": true }))
}

async fn switch_tenant(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if let Err(res) = check_auth(&headers) {
        return res;
    }
    let tenant = body.get("tenantId").and_then(Value::as_str).unwrap_or("tenant-1");
    Json(json!({ "token": mint_token(tenant, &["TENANT:ADMIN"], 3600) })).into_response()
}

// ========================================
// Generic entity handlers
// ========================================

fn check_auth(headers: &HeaderMap) -> Result<(), Response> {
    let bearer = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match bearer {
        Some(token) if token != DEAD_SESSION_TOKEN => Ok(()),
        _ => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Session expired" })),
        )
            .into_response()),
    }
}

fn check_failing(state: &MockState, entity: &str) -> Result<(), Response> {
    if state.failing.lock().unwrap().contains(entity) {
        Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": format!("{} is on fire", entity) })),
        )
            .into_response())
    } else {
        Ok(())
    }
}

#[derive(serde::Deserialize)]
struct ListParams {
    page: Option<u64>,
    limit: Option<u64>,
}

/// The live backend's swapped list shape: records in `message`, pagination
/// metadata in `data`.
async fn list_entity(
    State(state): State<Arc<MockState>>,
    Path(entity): Path<String>,
    Query(params): Query<ListParams>,
    headers: HeaderMap,
) -> Response {
    if let Err(res) = check_auth(&headers) {
        return res;
    }
    if let Err(res) = check_failing(&state, &entity) {
        return res;
    }

    let all = state.collections.lock().unwrap().get(&entity).cloned().unwrap_or_default();
    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(20).max(1);
    let start = ((page - 1) * limit) as usize;
    let slice: Vec<Value> = all.iter().skip(start).take(limit as usize).cloned().collect();

    Json(json!({
        "success": true,
        "data": { "page": page, "limit": limit, "total": all.len() },
        "message": slice,
        "pagination": format!("{} of {} records", slice.len(), all.len()),
    }))
    .into_response()
}

async fn get_entity(
    State(state): State<Arc<MockState>>,
    Path((entity, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    if let Err(res) = check_auth(&headers) {
        return res;
    }

    let found = state
        .collections
        .lock()
        .unwrap()
        .get(&entity)
        .and_then(|list| list.iter().find(|r| record_id(r).as_deref() == Some(&id)).cloned());

    match found {
        Some(record) => Json(json!({ "success": true, "data": record })).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "message": "not found" }))).into_response(),
    }
}

async fn create_entity(
    State(state): State<Arc<MockState>>,
    Path(entity): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(res) = check_auth(&headers) {
        return res;
    }
    if let Err(res) = check_failing(&state, &entity) {
        return res;
    }

    state.captured.lock().unwrap().push((entity.clone(), body.clone()));

    let mut collections = state.collections.lock().unwrap();
    let list = collections.entry(entity).or_default();
    let mut stored = body;
    if let Value::Object(map) = &mut stored {
        map.insert("Id".to_string(), json!(list.len() as u64 + 1));
        map.insert("CreatedBy".to_string(), json!("mock"));
    }
    list.push(stored.clone());

    (StatusCode::CREATED, Json(json!({ "success": true, "data": stored }))).into_response()
}

async fn update_entity(
    State(state): State<Arc<MockState>>,
    Path((entity, id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(res) = check_auth(&headers) {
        return res;
    }

    state.captured.lock().unwrap().push((entity.clone(), body.clone()));

    let mut collections = state.collections.lock().unwrap();
    let Some(list) = collections.get_mut(&entity) else {
        return (StatusCode::NOT_FOUND, Json(json!({ "message": "not found" }))).into_response();
    };
    let Some(slot) = list.iter_mut().find(|r| record_id(r).as_deref() == Some(&id)) else {
        return (StatusCode::NOT_FOUND, Json(json!({ "message": "not found" }))).into_response();
    };

    if let (Value::Object(target), Value::Object(updates)) = (&mut *slot, &body) {
        for (k, v) in updates {
            target.insert(k.clone(), v.clone());
        }
    }

    Json(json!({ "success": true, "data": slot.clone() })).into_response()
}

async fn delete_entity(
    State(state): State<Arc<MockState>>,
    Path((entity, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Response {
    if let Err(res) = check_auth(&headers) {
        return res;
    }

    let mut collections = state.collections.lock().unwrap();
    let Some(list) = collections.get_mut(&entity) else {
        return (StatusCode::NOT_FOUND, Json(json!({ "message": "not found" }))).into_response();
    };
    let before = list.len();
    list.retain(|r| record_id(r).as_deref() != Some(&id));

    if list.len() == before {
        (StatusCode::NOT_FOUND, Json(json!({ "message": "not found" }))).into_response()
    } else {
        Json(json!({ "success": true })).into_response()
    }
}

fn record_id(record: &Value) -> Option<String> {
    for key in ["id", "Id"] {
        match record.get(key) {
            Some(Value::String(s)) => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}
