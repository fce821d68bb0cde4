#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::{Duration, NaiveDate, Utc};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub body: Value,
    pub token: Option<String>,
}

#[derive(Default)]
pub struct FakeState {
    accounts: HashMap<String, String>,
    tokens: HashMap<String, String>,
    habits: HashMap<String, Vec<Value>>,
    failing_listings: Vec<String>,
    listing_gate: Option<ListingGate>,
    calls: Vec<RecordedCall>,
    next_id: u64,
}

type Shared = Arc<Mutex<FakeState>>;

/// Parks the next habit listing until `release` is notified.
#[derive(Clone, Default)]
pub struct ListingGate {
    pub entered: Arc<Notify>,
    pub release: Arc<Notify>,
}

/// In-process stand-in for the remote habit API.
pub struct FakeApi {
    pub url: String,
    state: Shared,
}

impl FakeApi {
    pub fn start() -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind fake api");
        listener.set_nonblocking(true).expect("nonblocking listener");
        let url = format!("http://{}", listener.local_addr().unwrap());
        let state: Shared = Arc::new(Mutex::new(FakeState::default()));
        let app = fake_router(Arc::clone(&state));

        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("fake api runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).expect("tokio listener");
                axum::serve(listener, app).await.expect("fake api server");
            });
        });

        Self { url, state }
    }

    pub fn add_account(&self, email: &str, password: &str) {
        let mut state = self.state.lock().unwrap();
        state.accounts.insert(email.to_string(), password.to_string());
        state.habits.entry(email.to_string()).or_default();
    }

    pub fn seed_habit(&self, email: &str, id: &str, name: &str, checks: &[(NaiveDate, bool)]) {
        let checks: Vec<Value> = checks
            .iter()
            .map(|(date, done)| json!({ "date": wire_date(*date), "isDone": done }))
            .collect();
        let mut state = self.state.lock().unwrap();
        state
            .habits
            .entry(email.to_string())
            .or_default()
            .push(json!({ "id": id, "name": name, "habitCheck": checks }));
    }

    pub fn hold_next_listing(&self) -> ListingGate {
        let gate = ListingGate::default();
        self.state.lock().unwrap().listing_gate = Some(gate.clone());
        gate
    }

    pub fn fail_listings_for(&self, email: &str) {
        self.state.lock().unwrap().failing_listings.push(email.to_string());
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn calls_for(&self, token: &str) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.token.as_deref() == Some(token))
            .collect()
    }

    pub fn count(&self, method: &str, path: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.method == method && call.path == path)
            .count()
    }

    pub fn habits_of(&self, email: &str) -> Vec<Value> {
        self.state
            .lock()
            .unwrap()
            .habits
            .get(email)
            .cloned()
            .unwrap_or_default()
    }
}

pub fn wire_date(date: NaiveDate) -> String {
    format!("{}T00:00:00.000Z", date.format("%Y-%m-%d"))
}

pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn days_ago(days: i64) -> NaiveDate {
    today_utc() - Duration::days(days)
}

pub fn unique_email(prefix: &str) -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{prefix}-{}-{n}@example.com", std::process::id())
}

fn fake_router(state: Shared) -> Router {
    Router::new()
        .route("/api/auth", post(auth))
        .route("/api/user", post(register))
        .route("/api/user/habits", get(list_habits))
        .route("/api/habit", post(create_habit))
        .route("/api/habit/:id", delete(delete_habit))
        .route("/api/habit/:id/check", post(add_check).delete(remove_check))
        .with_state(state)
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string)
}

fn record(
    state: &mut FakeState,
    method: &'static str,
    path: String,
    body: Value,
    headers: &HeaderMap,
) {
    state.calls.push(RecordedCall {
        method,
        path,
        body,
        token: bearer(headers),
    });
}

fn rejected(message: &str) -> Json<Value> {
    Json(json!({ "success": false, "errors": [{ "message": message }] }))
}

fn owner(state: &FakeState, headers: &HeaderMap) -> Option<String> {
    bearer(headers).and_then(|token| state.tokens.get(&token).cloned())
}

async fn auth(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut state = state.lock().unwrap();
    record(&mut state, "POST", "/api/auth".to_string(), body.clone(), &headers);

    let email = body["email"].as_str().unwrap_or_default().to_string();
    let password = body["password"].as_str().unwrap_or_default();
    if state.accounts.get(&email).map(String::as_str) != Some(password) {
        return rejected("Invalid email or password");
    }

    state.next_id += 1;
    let token = format!("token-{}", state.next_id);
    state.tokens.insert(token.clone(), email.clone());
    Json(json!({ "success": true, "value": { "accessToken": token, "id": email } }))
}

async fn register(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut state = state.lock().unwrap();
    record(&mut state, "POST", "/api/user".to_string(), body.clone(), &headers);

    let email = body["email"].as_str().unwrap_or_default().to_string();
    if state.accounts.contains_key(&email) {
        return rejected("Email already registered");
    }
    let password = body["password"].as_str().unwrap_or_default().to_string();
    state.accounts.insert(email.clone(), password);
    state.habits.entry(email).or_default();
    Json(json!({ "success": true }))
}

async fn list_habits(State(shared): State<Shared>, headers: HeaderMap) -> Json<Value> {
    let gate = {
        let mut state = shared.lock().unwrap();
        record(&mut state, "GET", "/api/user/habits".to_string(), Value::Null, &headers);
        state.listing_gate.take()
    };
    if let Some(gate) = gate {
        gate.entered.notify_one();
        gate.release.notified().await;
    }

    let state = shared.lock().unwrap();
    let Some(email) = owner(&state, &headers) else {
        return rejected("Unauthorized");
    };
    if state.failing_listings.contains(&email) {
        return rejected("Habit storage unavailable");
    }
    let habits = state.habits.get(&email).cloned().unwrap_or_default();
    Json(json!({ "success": true, "value": { "habits": habits } }))
}

async fn create_habit(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut state = state.lock().unwrap();
    record(&mut state, "POST", "/api/habit".to_string(), body.clone(), &headers);

    let Some(email) = owner(&state, &headers) else {
        return rejected("Unauthorized");
    };
    state.next_id += 1;
    let id = format!("habit-{}", state.next_id);
    let name = body["name"].clone();
    state
        .habits
        .entry(email)
        .or_default()
        .push(json!({ "id": id, "name": name, "habitCheck": [] }));
    Json(json!({ "success": true }))
}

async fn delete_habit(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Json<Value> {
    let mut state = state.lock().unwrap();
    record(&mut state, "DELETE", format!("/api/habit/{id}"), Value::Null, &headers);

    let Some(email) = owner(&state, &headers) else {
        return rejected("Unauthorized");
    };
    let habits = state.habits.entry(email).or_default();
    let before = habits.len();
    habits.retain(|habit| habit["id"] != id.as_str());
    if habits.len() == before {
        return rejected("Habit not found");
    }
    Json(json!({ "success": true }))
}

async fn add_check(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut state = state.lock().unwrap();
    record(&mut state, "POST", format!("/api/habit/{id}/check"), body.clone(), &headers);

    let Some(email) = owner(&state, &headers) else {
        return rejected("Unauthorized");
    };
    let habits = state.habits.entry(email).or_default();
    let Some(habit) = habits.iter_mut().find(|habit| habit["id"] == id.as_str()) else {
        return rejected("Habit not found");
    };
    let date = body["date"].clone();
    if let Some(checks) = habit["habitCheck"].as_array_mut() {
        checks.push(json!({ "date": date, "isDone": true }));
    }
    Json(json!({ "success": true }))
}

async fn remove_check(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut state = state.lock().unwrap();
    record(&mut state, "DELETE", format!("/api/habit/{id}/check"), body.clone(), &headers);

    let Some(email) = owner(&state, &headers) else {
        return rejected("Unauthorized");
    };
    let habits = state.habits.entry(email).or_default();
    let Some(habit) = habits.iter_mut().find(|habit| habit["id"] == id.as_str()) else {
        return rejected("Habit not found");
    };
    if let Some(checks) = habit["habitCheck"].as_array_mut() {
        checks.retain(|check| check["date"] != body["date"]);
    }
    Json(json!({ "success": true }))
}
