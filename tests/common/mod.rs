use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use reqwest::Client;
use serde_json::{json, Value};
use uuid::Uuid;

use elegance_intake::config::{Config, StoreConfig};

/// A running intake server plus a stub persistence sink that records
/// every insert it receives.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub sink: SinkHandle,
}

pub type SinkHandle = Arc<SinkState>;

#[derive(Default)]
pub struct SinkState {
    inserts: Mutex<Vec<Value>>,
    fail_with: Mutex<Option<(u16, String)>>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a contact-form body, return (parsed body, status).
    #[allow(dead_code)]
    pub async fn submit(&self, body: &Value) -> (Value, reqwest::StatusCode) {
        let resp = self
            .client
            .post(self.url("/v1/contact"))
            .json(body)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST raw bytes as JSON, return the unparsed response.
    #[allow(dead_code)]
    pub async fn submit_raw(&self, body: &str) -> reqwest::Response {
        self.client
            .post(self.url("/v1/contact"))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("submit request failed")
    }

    /// Rows the stub sink has accepted so far.
    #[allow(dead_code)]
    pub fn inserts(&self) -> Vec<Value> {
        self.sink.inserts.lock().unwrap().clone()
    }

    /// Make the stub sink reject inserts with the given status and body.
    #[allow(dead_code)]
    pub fn fail_inserts(&self, status: u16, body: &str) {
        *self.sink.fail_with.lock().unwrap() = Some((status, body.to_string()));
    }
}

async fn insert_row(
    State(sink): State<SinkHandle>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> axum::response::Response {
    // The intake endpoint must authenticate with both headers.
    if headers.get("authorization").is_none() || headers.get("apikey").is_none() {
        return (StatusCode::UNAUTHORIZED, "missing credentials").into_response();
    }

    if let Some((status, text)) = sink.fail_with.lock().unwrap().clone() {
        return (StatusCode::from_u16(status).unwrap(), text).into_response();
    }

    let mut row = body;
    row["id"] = json!(Uuid::now_v7());
    sink.inserts.lock().unwrap().push(row.clone());

    (StatusCode::CREATED, Json(json!([row]))).into_response()
}

/// Spawn the intake app on a random port, wired to a fresh stub sink.
pub async fn spawn_app() -> TestApp {
    spawn(true).await
}

/// Spawn the intake app with no storage credentials configured.
#[allow(dead_code)]
pub async fn spawn_app_unconfigured() -> TestApp {
    spawn(false).await
}

async fn spawn(with_store: bool) -> TestApp {
    let sink: SinkHandle = Arc::new(SinkState::default());

    let sink_router = Router::new()
        .route("/rest/v1/contact_inquiries", post(insert_row))
        .with_state(sink.clone());
    let sink_listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind sink port");
    let sink_addr = sink_listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(sink_listener, sink_router)
            .await
            .expect("Sink server failed");
    });

    let config = Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to a random port
        max_body_size: 1_048_576,
        log_level: "warn".to_string(),
        store: with_store.then(|| StoreConfig {
            base_url: format!("http://{sink_addr}"),
            service_role_key: "test-service-role-key".to_string(),
        }),
    };

    let app = elegance_intake::build_app(config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::new();

    TestApp { addr, client, sink }
}
