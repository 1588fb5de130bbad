#![allow(dead_code)]

use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    extract::ConnectInfo,
    http::{Request, StatusCode},
    Router,
};
use contact_relay::{
    routes::AppState,
    services::{
        notification::{Notifier, NotifyError},
        submission_log::SubmissionLog,
    },
    startup::build_router,
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tokio::sync::{mpsc, Mutex};
use tower::util::ServiceExt;

/// Notifier that forwards every message to a channel instead of the network.
pub struct RecordingNotifier {
    sender: mpsc::UnboundedSender<String>,
    fail: bool,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        self.sender.send(text.to_string()).ok();
        if self.fail {
            return Err(NotifyError::Connection("messaging API unreachable".to_string()));
        }
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub log_path: PathBuf,
    pub public_dir: PathBuf,
    notifications: Mutex<mpsc::UnboundedReceiver<String>>,
    _dir: TempDir,
}

pub enum NotifierMode {
    Disabled,
    Succeeding,
    Failing,
}

impl TestApp {
    pub fn spawn() -> Self {
        Self::with_notifier(NotifierMode::Succeeding)
    }

    pub fn with_notifier(mode: NotifierMode) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let log_path = dir.path().join("submissions.ndjson");
        let public_dir = dir.path().join("public");
        std::fs::create_dir_all(&public_dir).unwrap();
        std::fs::write(public_dir.join("index.html"), "<h1>Contact</h1>").unwrap();

        let (sender, receiver) = mpsc::unbounded_channel();
        let notifier: Option<Arc<dyn Notifier>> = match mode {
            NotifierMode::Disabled => None,
            NotifierMode::Succeeding => Some(Arc::new(RecordingNotifier { sender, fail: false })),
            NotifierMode::Failing => Some(Arc::new(RecordingNotifier { sender, fail: true })),
        };

        let state = AppState {
            submissions: SubmissionLog::new(&log_path),
            notifier,
        };

        Self {
            router: build_router(state, &public_dir),
            log_path,
            public_dir,
            notifications: Mutex::new(receiver),
            _dir: dir,
        }
    }

    /// Sends a request as if it arrived from 127.0.0.1.
    pub async fn send(&self, mut request: Request<Body>) -> (StatusCode, Bytes) {
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 54321))));

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");
        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();
        (status, body)
    }

    pub async fn submit(&self, body: &str) -> (StatusCode, serde_json::Value) {
        self.submit_with_headers(body, &[]).await
    }

    pub async fn submit_with_headers(
        &self,
        body: &str,
        headers: &[(&str, &str)],
    ) -> (StatusCode, serde_json::Value) {
        let mut all = vec![("content-type", "application/json")];
        all.extend_from_slice(headers);
        self.submit_raw(body, &all).await
    }

    /// Posts to /api/submit with exactly the given headers (no default content type).
    pub async fn submit_raw(
        &self,
        body: &str,
        headers: &[(&str, &str)],
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method("POST").uri("/api/submit");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();

        let (status, bytes) = self.send(request).await;
        let json = serde_json::from_slice(&bytes).expect("Response is not JSON");
        (status, json)
    }

    pub fn log_lines(&self) -> Vec<String> {
        match std::fs::read_to_string(&self.log_path) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Waits for the next notification, or None after a short timeout.
    pub async fn next_notification(&self) -> Option<String> {
        let mut receiver = self.notifications.lock().await;
        tokio::time::timeout(std::time::Duration::from_secs(2), receiver.recv())
            .await
            .ok()
            .flatten()
    }
}
