//! In-process fixture backend for integration tests.
//!
//! Serves the REST envelope the console expects (`data.records` +
//! `data.data` for listings, `data` for single entities, status
//! transitions via `POST <resource>/status?id=..&status=..`) over an
//! in-memory record store, with switches to force read failures, write
//! rejections, auth requirements, and per-child unassign failures.

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{delete, get, post};
use chrono::Utc;
use serde_json::{Value, json};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use uuid::Uuid;
use vestry::config::api::ApiConfig;
use vestry::http::ApiClient;

#[derive(Default)]
pub struct FixtureState {
    /// Records per collection name ("students", "classes", ...)
    pub collections: HashMap<String, Vec<Value>>,
    /// Batch-assign bodies received, keyed by parent ID
    pub assignments: HashMap<Uuid, Vec<Value>>,
    /// Child IDs whose unassign DELETE fails with 500
    pub fail_unassign: HashSet<Uuid>,
    /// When set, every write is rejected with 422
    pub reject_writes: bool,
    /// When set, every list read fails with 500
    pub fail_reads: bool,
    /// When set, requests must carry this bearer token or get 401
    pub require_token: Option<String>,
    /// Number of term rotations triggered
    pub rotations: u32,
}

pub type SharedState = Arc<Mutex<FixtureState>>;

pub struct FixtureServer {
    pub base_url: String,
    pub state: SharedState,
}

#[allow(dead_code)]
impl FixtureServer {
    pub fn client(&self) -> ApiClient {
        let config = ApiConfig {
            base_url: self.base_url.clone(),
            timeout_secs: 5,
        };
        ApiClient::new(&config).unwrap()
    }

    pub fn collection(&self, name: &str) -> Vec<Value> {
        self.state
            .lock()
            .unwrap()
            .collections
            .get(name)
            .cloned()
            .unwrap_or_default()
    }

    pub fn rotations(&self) -> u32 {
        self.state.lock().unwrap().rotations
    }

    pub fn assignments_for(&self, parent: Uuid) -> Vec<Value> {
        self.state
            .lock()
            .unwrap()
            .assignments
            .get(&parent)
            .cloned()
            .unwrap_or_default()
    }
}

pub async fn spawn_fixture(state: FixtureState) -> FixtureServer {
    let shared: SharedState = Arc::new(Mutex::new(state));
    let app = router(shared.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    FixtureServer {
        base_url: format!("http://{addr}"),
        state: shared,
    }
}

fn router(state: SharedState) -> Router {
    Router::new()
        .route("/terms/rotate", post(rotate_terms))
        .route("/examinations/{id}/publish", post(publish_exam))
        .route("/classes/{id}/students", get(list_students_by_class))
        .route("/students/{id}/evaluations", get(list_child_collection))
        .route("/examinations/{id}/classes", get(list_child_collection))
        .route("/subjects/{id}/classes", post(assign_children))
        .route("/subjects/{id}/classes/{child_id}", delete(unassign_child))
        .route("/teachers/{id}/subjects", post(assign_children))
        .route("/teachers/{id}/subjects/{child_id}", delete(unassign_child))
        .route("/{collection}", get(list_collection).post(create_record))
        .route("/{collection}/status", post(change_status))
        .route(
            "/{collection}/{id}",
            get(get_record).put(put_record).patch(patch_record),
        )
        .with_state(state)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

fn check_auth(state: &FixtureState, headers: &HeaderMap) -> Result<(), Response> {
    if let Some(expected) = &state.require_token {
        let provided = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        if provided != format!("Bearer {expected}") {
            return Err(error_response(StatusCode::UNAUTHORIZED, "unauthorized"));
        }
    }
    Ok(())
}

fn status_set(params: &HashMap<String, String>) -> Option<HashSet<String>> {
    params
        .get("status")
        .map(|raw| raw.split(',').map(|s| s.to_string()).collect())
}

fn paged_response(rows: Vec<Value>, page: usize, size: usize) -> Response {
    let total = rows.len();
    let slice: Vec<Value> = rows.into_iter().skip(page * size).take(size).collect();
    Json(json!({ "data": { "records": total, "data": slice } })).into_response()
}

fn page_params(params: &HashMap<String, String>) -> (usize, usize) {
    let page = params.get("page").and_then(|p| p.parse().ok()).unwrap_or(0);
    let size = params.get("size").and_then(|p| p.parse().ok()).unwrap_or(10);
    (page, size)
}

async fn list_collection(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(collection): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let state = state.lock().unwrap();
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    if state.fail_reads {
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "fixture read failure");
    }
    let statuses = status_set(&params);
    let (page, size) = page_params(&params);
    let rows: Vec<Value> = state
        .collections
        .get(&collection)
        .map(|records| {
            records
                .iter()
                .filter(|record| match &statuses {
                    Some(set) => record["status"]
                        .as_str()
                        .is_some_and(|status| set.contains(status)),
                    None => true,
                })
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    paged_response(rows, page, size)
}

async fn list_students_by_class(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(class_id): Path<Uuid>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let state = state.lock().unwrap();
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    if state.fail_reads {
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "fixture read failure");
    }
    let statuses = status_set(&params);
    let (page, size) = page_params(&params);
    let rows: Vec<Value> = state
        .collections
        .get("students")
        .map(|records| {
            records
                .iter()
                .filter(|record| record["class_id"].as_str() == Some(&class_id.to_string()))
                .filter(|record| match &statuses {
                    Some(set) => record["status"]
                        .as_str()
                        .is_some_and(|status| set.contains(status)),
                    None => true,
                })
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    paged_response(rows, page, size)
}

/// Child listings (evaluations of a student, sittings of an exam) keyed
/// by the parent ID stored on the child record.
async fn list_child_collection(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(parent_id): Path<Uuid>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let state = state.lock().unwrap();
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    let (page, size) = page_params(&params);
    let parent = parent_id.to_string();
    let mut rows = Vec::new();
    for records in state.collections.values() {
        for record in records {
            let is_child = record["student_id"].as_str() == Some(&parent)
                || record["exam_id"].as_str() == Some(&parent);
            if is_child {
                rows.push(record.clone());
            }
        }
    }
    paged_response(rows, page, size)
}

fn default_status(collection: &str) -> &'static str {
    match collection {
        "classes" => "ONGOING",
        "examinations" => "PENDING",
        _ => "ACTIVE",
    }
}

async fn create_record(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(collection): Path<String>,
    Json(mut body): Json<Value>,
) -> Response {
    let mut state = state.lock().unwrap();
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    if state.reject_writes {
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, "fixture rejected write");
    }
    body["id"] = json!(Uuid::new_v4().to_string());
    body["created_at"] = json!(Utc::now().to_rfc3339());
    if body.get("status").is_none() {
        body["status"] = json!(default_status(&collection));
    }
    state
        .collections
        .entry(collection)
        .or_default()
        .push(body.clone());
    (
        StatusCode::CREATED,
        Json(json!({ "data": body, "message": "created" })),
    )
        .into_response()
}

async fn change_status(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(collection): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let mut state = state.lock().unwrap();
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    if state.reject_writes {
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, "fixture rejected write");
    }
    let (Some(id), Some(status)) = (params.get("id").cloned(), params.get("status").cloned())
    else {
        return error_response(StatusCode::BAD_REQUEST, "id and status are required");
    };
    let Some(records) = state.collections.get_mut(&collection) else {
        return error_response(StatusCode::NOT_FOUND, "no such collection");
    };
    for record in records.iter_mut() {
        if record["id"].as_str() == Some(&id) {
            record["status"] = json!(status);
            return Json(json!({ "data": record })).into_response();
        }
    }
    error_response(StatusCode::NOT_FOUND, "record not found")
}

async fn get_record(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path((collection, id)): Path<(String, Uuid)>,
) -> Response {
    let state = state.lock().unwrap();
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    let record = state
        .collections
        .get(&collection)
        .and_then(|records| {
            records
                .iter()
                .find(|record| record["id"].as_str() == Some(&id.to_string()))
        })
        .cloned();
    match record {
        Some(record) => Json(json!({ "data": record })).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "record not found"),
    }
}

fn merge_into(
    state: &mut FixtureState,
    collection: &str,
    id: Uuid,
    body: &Value,
) -> Option<Value> {
    let records = state.collections.get_mut(collection)?;
    let record = records
        .iter_mut()
        .find(|record| record["id"].as_str() == Some(&id.to_string()))?;
    if let (Some(target), Some(source)) = (record.as_object_mut(), body.as_object()) {
        for (key, value) in source {
            // id, status, and created_at never change through updates
            if key != "id" && key != "status" && key != "created_at" {
                target.insert(key.clone(), value.clone());
            }
        }
    }
    Some(record.clone())
}

async fn put_record(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path((collection, id)): Path<(String, Uuid)>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.lock().unwrap();
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    if state.reject_writes {
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, "fixture rejected write");
    }
    match merge_into(&mut state, &collection, id, &body) {
        Some(record) => Json(json!({ "data": record })).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "record not found"),
    }
}

async fn patch_record(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path((collection, id)): Path<(String, Uuid)>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.lock().unwrap();
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    if state.reject_writes {
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, "fixture rejected write");
    }
    match merge_into(&mut state, &collection, id, &body) {
        Some(record) => Json(json!({ "data": record })).into_response(),
        None => error_response(StatusCode::NOT_FOUND, "record not found"),
    }
}

async fn rotate_terms(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let mut state = state.lock().unwrap();
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    if state.reject_writes {
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, "fixture rejected write");
    }
    state.rotations += 1;
    Json(json!({ "data": null, "message": "rotated" })).into_response()
}

async fn publish_exam(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Response {
    let mut state = state.lock().unwrap();
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    let Some(records) = state.collections.get_mut("examinations") else {
        return error_response(StatusCode::NOT_FOUND, "no examinations");
    };
    for record in records.iter_mut() {
        if record["id"].as_str() == Some(&id.to_string()) {
            // Server-side visibility rotation; DISABLED exams stay put.
            let next = match record["status"].as_str() {
                Some("PENDING") => "PUBLISHED",
                Some("PUBLISHED") => "PENDING",
                other => other.unwrap_or("PENDING"),
            };
            record["status"] = json!(next);
            return Json(json!({ "data": record })).into_response();
        }
    }
    error_response(StatusCode::NOT_FOUND, "record not found")
}

async fn assign_children(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(parent_id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Response {
    let mut state = state.lock().unwrap();
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    if state.reject_writes {
        return error_response(StatusCode::UNPROCESSABLE_ENTITY, "fixture rejected write");
    }
    state.assignments.entry(parent_id).or_default().push(body);
    Json(json!({ "data": null, "message": "assigned" })).into_response()
}

async fn unassign_child(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path((_parent_id, child_id)): Path<(Uuid, Uuid)>,
) -> Response {
    let state = state.lock().unwrap();
    if let Err(resp) = check_auth(&state, &headers) {
        return resp;
    }
    if state.fail_unassign.contains(&child_id) {
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "unassign failed");
    }
    Json(json!({ "data": null, "message": "unassigned" })).into_response()
}

// ---------------------------------------------------------------------------
// Record builders

#[allow(dead_code)]
pub fn student_json(id: Uuid, first_name: &str, status: &str, class_id: Option<Uuid>) -> Value {
    json!({
        "id": id.to_string(),
        "first_name": first_name,
        "last_name": "Fixture",
        "email": format!("{}@fixture.test", first_name.to_lowercase()),
        "phone": null,
        "class_id": class_id.map(|c| c.to_string()),
        "status": status,
        "created_at": "2024-01-15T10:30:00Z",
    })
}

#[allow(dead_code)]
pub fn class_json(id: Uuid, name: &str, status: &str) -> Value {
    json!({
        "id": id.to_string(),
        "name": name,
        "description": null,
        "intake_year": 2024,
        "status": status,
        "created_at": "2024-01-15T10:30:00Z",
    })
}

#[allow(dead_code)]
pub fn subject_json(id: Uuid, name: &str, status: &str) -> Value {
    json!({
        "id": id.to_string(),
        "name": name,
        "code": "TH-101",
        "status": status,
        "created_at": "2024-01-15T10:30:00Z",
    })
}

#[allow(dead_code)]
pub fn exam_json(id: Uuid, name: &str, status: &str) -> Value {
    json!({
        "id": id.to_string(),
        "name": name,
        "term_id": null,
        "exam_date": "2025-10-15",
        "status": status,
        "created_at": "2024-01-15T10:30:00Z",
    })
}

#[allow(dead_code)]
pub fn term_json(id: Uuid, name: &str, sequence: i32, status: &str) -> Value {
    json!({
        "id": id.to_string(),
        "name": name,
        "session_id": null,
        "sequence": sequence,
        "status": status,
        "created_at": "2024-01-15T10:30:00Z",
    })
}

#[allow(dead_code)]
pub fn user_json(id: Uuid, first_name: &str, role: &str, status: &str) -> Value {
    json!({
        "id": id.to_string(),
        "first_name": first_name,
        "last_name": "Fixture",
        "email": format!("{}@fixture.test", first_name.to_lowercase()),
        "role": role,
        "status": status,
        "created_at": "2024-01-15T10:30:00Z",
    })
}

#[allow(dead_code)]
pub fn evaluation_json(id: Uuid, student_id: Uuid, term_id: Uuid, grade: &str) -> Value {
    json!({
        "id": id.to_string(),
        "student_id": student_id.to_string(),
        "term_id": term_id.to_string(),
        "grade": grade,
        "remarks": "Consistent effort",
        "status": "ACTIVE",
        "created_at": "2024-01-15T10:30:00Z",
    })
}

#[allow(dead_code)]
pub fn seed(state: &mut FixtureState, collection: &str, records: Vec<Value>) {
    state
        .collections
        .entry(collection.to_string())
        .or_default()
        .extend(records);
}
