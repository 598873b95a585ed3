//! Common test utilities for E2E tests

#![allow(dead_code)]

use taskboard::storage::DeletePolicy;
use taskboard::{AppState, Config, app};
use tokio::net::TcpListener;
use zeroize::Zeroizing;

/// Test server instance
pub struct TestServer {
    pub addr: String,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Create a new test server instance with default settings
    pub async fn new() -> Self {
        Self::with_config(3600, DeletePolicy::Orphan).await
    }

    /// Create a test server with a custom token lifetime and delete policy
    pub async fn with_config(token_ttl_secs: i64, delete_policy: DeletePolicy) -> Self {
        let config = Config {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            token_ttl_secs,
            secret_key: Zeroizing::new(vec![7u8; 32]),
            delete_policy,
        };

        let state = AppState::new(&config);

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app(state)).await.unwrap();
        });

        // Wait a bit for the server to start
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        Self {
            addr: format!("http://{}", addr),
            client: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .unwrap(),
        }
    }

    /// Get base URL for API requests
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.addr, path)
    }

    /// Register a user and log in, leaving the session cookie in the client's
    /// cookie store. Returns the raw token from the login response.
    pub async fn register_and_login(&self, email: &str, password: &str) -> String {
        let response = self
            .client
            .post(self.url("/api/auth/register"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200, "registration failed");

        let response = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200, "login failed");

        let body: serde_json::Value = response.json().await.unwrap();
        body["token"].as_str().unwrap().to_string()
    }

    /// A second client with its own cookie store, for multi-user scenarios.
    pub fn another_client(&self) -> reqwest::Client {
        reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .unwrap()
    }
}
