//! Runs the real service router on an ephemeral local port.

use std::sync::Arc;

use serde_json::Value;

use tally_common::store::PointsStore;
use tally_server::{app, AppState};

/// A running server instance backed by a fresh, empty store.
pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Bind the service on `127.0.0.1:0` and serve it on a background task.
    pub async fn spawn() -> Self {
        let state = Arc::new(AppState {
            store: PointsStore::new(),
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let addr = listener.local_addr().expect("listener address");

        tokio::spawn(async move {
            axum::serve(listener, app(state)).await.expect("serve test app");
        });

        Self {
            base_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
        }
    }

    /// POST a receipt body to `/receipts/process`.
    pub async fn process(&self, receipt: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}/receipts/process", self.base_url))
            .json(receipt)
            .send()
            .await
            .expect("POST /receipts/process")
    }

    /// POST a receipt and return the issued identifier, asserting success.
    pub async fn process_ok(&self, receipt: &Value) -> String {
        let resp = self.process(receipt).await;
        assert!(resp.status().is_success(), "unexpected status {}", resp.status());
        let body: Value = resp.json().await.expect("id response JSON");
        body["id"].as_str().expect("id field").to_string()
    }

    /// GET `/receipts/{id}/points`.
    pub async fn points(&self, id: &str) -> reqwest::Response {
        self.client
            .get(format!("{}/receipts/{id}/points", self.base_url))
            .send()
            .await
            .expect("GET /receipts/{id}/points")
    }

    /// GET the points for an id, asserting the receipt exists.
    pub async fn points_ok(&self, id: &str) -> u64 {
        let resp = self.points(id).await;
        assert!(resp.status().is_success(), "unexpected status {}", resp.status());
        let body: Value = resp.json().await.expect("points response JSON");
        body["points"].as_u64().expect("points field")
    }

    /// GET `/health`.
    pub async fn health(&self) -> Value {
        self.client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .expect("GET /health")
            .json()
            .await
            .expect("health response JSON")
    }
}
