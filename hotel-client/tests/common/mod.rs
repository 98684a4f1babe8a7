//! In-process stand-in for the hotel backend
//!
//! Keeps a handful of collections in memory, speaks the same envelope as
//! the real server and records every request so tests can assert on what
//! was (and was not) sent.

#![allow(dead_code)]

use std::sync::Arc;

use axum::extract::{Multipart, Path, Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use hotel_client::resource::Resource;
use hotel_client::{ApiResponse, OneshotHttpClient, RecordingNotifier, ResourceScreen};
use parking_lot::Mutex;
use serde_json::{Map, Value, json};

#[derive(Debug, Clone, PartialEq)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
struct Store {
    categories: Vec<Value>,
    menu_items: Vec<Value>,
    tables: Vec<Value>,
    specialists: Vec<Value>,
    departments: Vec<Value>,
    requests: Vec<Recorded>,
    next_id: u32,
}

impl Store {
    fn id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}-{}", prefix, self.next_id)
    }

    fn attach(&mut self, body: Value) {
        if let Some(last) = self.requests.last_mut() {
            last.body = Some(body);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Backend {
    store: Arc<Mutex<Store>>,
}

impl Backend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(self, categories: Vec<Value>) -> Self {
        self.store.lock().categories = categories;
        self
    }

    pub fn with_menu_items(self, items: Vec<Value>) -> Self {
        self.store.lock().menu_items = items;
        self
    }

    pub fn with_tables(self, tables: Vec<Value>) -> Self {
        self.store.lock().tables = tables;
        self
    }

    pub fn with_specialists(self, specialists: Vec<Value>) -> Self {
        self.store.lock().specialists = specialists;
        self
    }

    pub fn with_departments(self, departments: Vec<Value>) -> Self {
        self.store.lock().departments = departments;
        self
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.store.lock().requests.clone()
    }

    pub fn requests_with(&self, method: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method)
            .collect()
    }

    pub fn last_body(&self, method: &str) -> Option<Value> {
        self.requests_with(method).pop().and_then(|r| r.body)
    }

    pub fn categories(&self) -> Vec<Value> {
        self.store.lock().categories.clone()
    }

    pub fn menu_items(&self) -> Vec<Value> {
        self.store.lock().menu_items.clone()
    }

    pub fn specialists(&self) -> Vec<Value> {
        self.store.lock().specialists.clone()
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/api/auth/login", post(login))
            .route("/api/auth/logout", post(logout))
            .route(
                "/api/restaurant/menu-categories",
                get(list_categories).post(create_category),
            )
            .route(
                "/api/restaurant/menu-categories/{id}",
                put(update_category).delete(delete_category),
            )
            .route(
                "/api/restaurant/menu-items",
                get(list_menu_items).post(create_menu_item),
            )
            .route("/api/restaurant/menu-items/{id}", put(update_menu_item))
            .route("/api/specialists", get(list_specialists))
            .route("/api/specialists/{id}", put(update_specialist))
            .route("/api/restaurant/tables", get(list_tables))
            .route("/api/restaurant/tables/{id}", put(update_table))
            .route("/api/departments", get(list_departments))
            .route("/api/roles", get(malformed_roles))
            .route("/api/access-levels", get(rejected_access_levels))
            .layer(middleware::from_fn_with_state(self.clone(), record))
            .with_state(self.clone())
    }

    pub fn client(&self) -> OneshotHttpClient {
        OneshotHttpClient::new(self.router())
    }

    /// Client that sends `Authorization: Bearer <token>` from the start
    pub fn client_with_token(&self, token: &str) -> OneshotHttpClient {
        self.client().with_token(token)
    }

    pub fn screen<R: Resource>(
        &self,
    ) -> (
        ResourceScreen<R, OneshotHttpClient, Arc<RecordingNotifier>>,
        Arc<RecordingNotifier>,
    ) {
        self.screen_over(self.client())
    }

    pub fn screen_over<R: Resource>(
        &self,
        client: OneshotHttpClient,
    ) -> (
        ResourceScreen<R, OneshotHttpClient, Arc<RecordingNotifier>>,
        Arc<RecordingNotifier>,
    ) {
        let notifier = Arc::new(RecordingNotifier::new());
        (ResourceScreen::new(client, notifier.clone()), notifier)
    }
}

pub fn category(id: &str, name: &str, sort_order: i32) -> Value {
    json!({ "_id": id, "name": name, "sortOrder": sort_order, "isActive": true })
}

pub fn menu_item(id: &str, name: &str, images: &[&str]) -> Value {
    json!({
        "_id": id,
        "name": name,
        "category": "c1",
        "price": 9.5,
        "prepTime": 15,
        "ingredients": "flour, tomato, basil",
        "available": true,
        "images": images,
        "extras": [],
    })
}

pub fn specialist(id: &str, first_name: &str, photo: Option<&str>) -> Value {
    json!({
        "_id": id,
        "firstName": first_name,
        "lastName": "Moreau",
        "bio": "Deep tissue and hot stone massage",
        "specializations": ["massage"],
        "photo": photo,
        "status": "active",
    })
}

pub fn table(id: &str, number: u32, status: &str, customer: Option<&str>) -> Value {
    json!({
        "_id": id,
        "number": number,
        "capacity": 4,
        "status": status,
        "customerName": customer,
        "reservationTime": customer.map(|_| "2026-10-19T19:30:00Z"),
    })
}

async fn record(State(backend): State<Backend>, req: Request, next: Next) -> Response {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    backend.store.lock().requests.push(Recorded {
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        authorization,
        body: None,
    });
    next.run(req).await
}

fn ok(data: Value) -> Response {
    Json(ApiResponse::ok(data)).into_response()
}

fn done(message: &str) -> Response {
    Json(ApiResponse::<()>::done(message)).into_response()
}

fn fail(status: StatusCode, message: &str) -> Response {
    (status, Json(ApiResponse::<()>::error(message))).into_response()
}

/// Text fields by name, file parts as `{field, fileName, mime, size}`
async fn read_multipart(mut multipart: Multipart) -> (Map<String, Value>, Vec<Value>) {
    let mut fields = Map::new();
    let mut uploads = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        match field.file_name().map(String::from) {
            Some(file_name) => {
                let mime = field.content_type().unwrap_or_default().to_string();
                let size = field.bytes().await.map(|b| b.len()).unwrap_or_default();
                uploads.push(json!({ "field": name, "fileName": file_name, "mime": mime, "size": size }));
            }
            None => {
                let text = field.text().await.unwrap_or_default();
                fields.insert(name, Value::String(text));
            }
        }
    }
    (fields, uploads)
}

fn text(fields: &Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn upload_url(upload: &Value) -> Value {
    json!(format!("/uploads/{}", upload["fileName"].as_str().unwrap_or_default()))
}

/// Stored images the form kept plus one URL per uploaded file
fn merged_images(fields: &Map<String, Value>, uploads: &[Value]) -> Vec<Value> {
    let mut images: Vec<Value> =
        serde_json::from_str(&text(fields, "existingImages")).unwrap_or_default();
    images.extend(uploads.iter().map(upload_url));
    images
}

fn menu_item_from(id: String, fields: &Map<String, Value>, images: Vec<Value>) -> Value {
    json!({
        "_id": id,
        "name": text(fields, "name"),
        "category": text(fields, "category"),
        "price": text(fields, "price").parse::<f64>().unwrap_or_default(),
        "prepTime": text(fields, "prepTime").parse::<u32>().unwrap_or_default(),
        "ingredients": text(fields, "ingredients"),
        "available": text(fields, "available") == "true",
        "images": images,
        "extras": serde_json::from_str::<Value>(&text(fields, "extras")).unwrap_or(json!([])),
    })
}

fn find_mut<'a>(items: &'a mut [Value], id: &str) -> Option<&'a mut Value> {
    items.iter_mut().find(|v| v["_id"] == id)
}

// ========== Auth ==========

async fn login(State(backend): State<Backend>, Json(body): Json<Value>) -> Response {
    backend.store.lock().attach(body.clone());
    if body["password"] != "secret" {
        return fail(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }
    ok(json!({
        "token": "tok-123",
        "user": {
            "_id": "u1",
            "name": "Marta Silva",
            "email": body["email"],
            "role": "manager",
            "permissions": ["staff:view"],
        },
    }))
}

async fn logout() -> Response {
    done("Logged out")
}

// ========== Menu categories ==========

async fn list_categories(State(backend): State<Backend>) -> Response {
    let store = backend.store.lock();
    ok(json!({ "categories": store.categories }))
}

async fn create_category(State(backend): State<Backend>, Json(body): Json<Value>) -> Response {
    let mut store = backend.store.lock();
    store.attach(body.clone());
    let mut created = body;
    created["_id"] = json!(store.id("cat"));
    store.categories.push(created.clone());
    ok(created)
}

async fn update_category(
    State(backend): State<Backend>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut store = backend.store.lock();
    store.attach(body.clone());
    let Some(existing) = find_mut(&mut store.categories, &id) else {
        return fail(StatusCode::NOT_FOUND, "Category not found");
    };
    let mut updated = body;
    updated["_id"] = json!(id);
    *existing = updated.clone();
    ok(updated)
}

async fn delete_category(State(backend): State<Backend>, Path(id): Path<String>) -> Response {
    let mut store = backend.store.lock();
    let in_use = store
        .menu_items
        .iter()
        .filter(|item| item["category"] == id)
        .count();
    if in_use > 0 {
        return fail(
            StatusCode::CONFLICT,
            &format!("Cannot delete category: {} menu items still use it", in_use),
        );
    }
    let before = store.categories.len();
    store.categories.retain(|c| c["_id"] != id);
    if store.categories.len() == before {
        return fail(StatusCode::NOT_FOUND, "Category not found");
    }
    done("Category deleted")
}

// ========== Menu items ==========

async fn list_menu_items(State(backend): State<Backend>) -> Response {
    let store = backend.store.lock();
    ok(json!({ "menuItems": store.menu_items }))
}

async fn create_menu_item(State(backend): State<Backend>, multipart: Multipart) -> Response {
    let (fields, uploads) = read_multipart(multipart).await;
    let mut store = backend.store.lock();
    store.attach(json!({ "fields": fields, "files": uploads }));

    let id = store.id("item");
    let created = menu_item_from(id, &fields, merged_images(&fields, &uploads));
    store.menu_items.push(created.clone());
    ok(created)
}

/// Images not listed in `existingImages` are dropped from the record
async fn update_menu_item(
    State(backend): State<Backend>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Response {
    let (fields, uploads) = read_multipart(multipart).await;
    let mut store = backend.store.lock();
    store.attach(json!({ "fields": fields, "files": uploads }));

    let images = merged_images(&fields, &uploads);
    let Some(existing) = find_mut(&mut store.menu_items, &id) else {
        return fail(StatusCode::NOT_FOUND, "Menu item not found");
    };
    let updated = menu_item_from(id, &fields, images);
    *existing = updated.clone();
    ok(updated)
}

// ========== Spa specialists ==========

async fn list_specialists(State(backend): State<Backend>) -> Response {
    let store = backend.store.lock();
    ok(json!({ "specialists": store.specialists }))
}

/// A new photo wins; otherwise `existingPhoto` is kept, and its absence clears the photo
async fn update_specialist(
    State(backend): State<Backend>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Response {
    let (fields, uploads) = read_multipart(multipart).await;
    let mut store = backend.store.lock();
    store.attach(json!({ "fields": fields, "files": uploads }));

    let photo = match uploads.iter().find(|u| u["field"] == "photo") {
        Some(upload) => upload_url(upload),
        None => fields.get("existingPhoto").cloned().unwrap_or(Value::Null),
    };
    let Some(existing) = find_mut(&mut store.specialists, &id) else {
        return fail(StatusCode::NOT_FOUND, "Specialist not found");
    };
    let updated = json!({
        "_id": id,
        "firstName": text(&fields, "firstName"),
        "lastName": text(&fields, "lastName"),
        "bio": text(&fields, "bio"),
        "specializations": serde_json::from_str::<Value>(&text(&fields, "specializations")).unwrap_or(json!([])),
        "photo": photo,
        "status": text(&fields, "status"),
    });
    *existing = updated.clone();
    ok(updated)
}

// ========== Tables ==========

async fn list_tables(State(backend): State<Backend>) -> Response {
    let store = backend.store.lock();
    ok(json!({ "tables": store.tables }))
}

/// Freeing a table clears its guest, as the real backend does
async fn update_table(
    State(backend): State<Backend>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut store = backend.store.lock();
    store.attach(body.clone());
    let Some(existing) = find_mut(&mut store.tables, &id) else {
        return fail(StatusCode::NOT_FOUND, "Table not found");
    };
    let mut updated = body;
    updated["_id"] = json!(id);
    if updated["status"] == "available" {
        updated["customerName"] = Value::Null;
        updated["reservationTime"] = Value::Null;
    }
    *existing = updated.clone();
    ok(updated)
}

// ========== Staff directory ==========

async fn list_departments(State(backend): State<Backend>) -> Response {
    let store = backend.store.lock();
    ok(Value::Array(store.departments.clone()))
}

/// Wraps the list in an object although roles are a bare list
async fn malformed_roles() -> Response {
    ok(json!({ "roles": [{ "_id": "r1", "name": "Chef" }] }))
}

async fn rejected_access_levels() -> Response {
    Json(ApiResponse::<()>::error("Access levels are managed by head office")).into_response()
}
