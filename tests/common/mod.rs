use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};

use expert_link::config::Config;
use expert_link::sheets::{RowStore, StoreError};

/// In-memory stand-in for the external spreadsheet. Records appended
/// rows; can be flipped to fail every append.
pub struct RecordingStore {
    pub rows: Mutex<Vec<(String, DateTime<Utc>)>>,
    fail: bool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn row_names(&self) -> Vec<String> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }
}

#[async_trait]
impl RowStore for RecordingStore {
    async fn append_row(&self, name: &str, submitted_at: DateTime<Utc>) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Status(403, "permission denied".to_string()));
        }
        self.rows
            .lock()
            .unwrap()
            .push((name.to_string(), submitted_at));
        Ok(())
    }
}

/// A running test server instance backed by a recording store.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<RecordingStore>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Post a form submission, return the response body + status.
    pub async fn submit(&self, name: &str) -> (String, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .form(&[("expertName", name)])
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        (body, status)
    }
}

fn test_config() -> Config {
    Config {
        host: IpAddr::from([127, 0, 0, 1]),
        port: 0,
        base_url: "https://www.iecs.fcu.edu.tw/".to_string(),
        spreadsheet_id: "test-spreadsheet".to_string(),
        sheets_api_base: "http://127.0.0.1:9".to_string(),
        sheets_access_token: "test-token".to_string(),
        styles_path: "styles.html".to_string(),
        log_level: "info".to_string(),
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_store(Arc::new(RecordingStore::new())).await
}

pub async fn spawn_app_with_store(store: Arc<RecordingStore>) -> TestApp {
    let app = expert_link::build_app(
        store.clone(),
        test_config(),
        ".test-css{color:#000}".to_string(),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        addr,
        client: Client::new(),
        store,
    }
}
