//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers against a throwaway
//! SQLite file and making form-encoded requests with a session cookie.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use portfolio_api::{create_app, create_app_state};
use portfolio_common::AppConfig;
use reqwest::header::SET_COOKIE;
use reqwest::{redirect, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Admin username every test server accepts
pub const TEST_ADMIN_USER: &str = "admin";

/// Admin password every test server accepts
pub const TEST_ADMIN_PASS: &str = "correct-horse-battery-staple";

/// Test server instance that manages lifecycle
///
/// Owns its database directory; dropping the server deletes it.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _db_dir: TempDir,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a server on an empty database
    pub async fn start() -> Result<Self> {
        Self::start_with(&[]).await
    }

    /// Start a server whose empty database gets the demo content
    pub async fn start_seeded() -> Result<Self> {
        Self::start_with(&[("SEED_DATABASE", "true")]).await
    }

    /// Start a server with extra environment overrides
    pub async fn start_with(overrides: &[(&str, &str)]) -> Result<Self> {
        let db_dir = tempfile::tempdir()?;
        let config = test_config(&db_dir, overrides)?;

        let state = create_app_state(config).await?;
        let app = create_app(state);

        // Ephemeral port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Redirects are asserted on, never followed
        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _db_dir: db_dir,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request as htmx would
    pub async fn get_htmx(&self, path: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .header("HX-Request", "true")
            .send()
            .await?)
    }

    /// Submit the login form
    pub async fn login(&self, username: &str, password: &str) -> Result<Response> {
        Ok(self
            .client
            .post(self.url("/admin/login"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?)
    }

    /// Log in with the test credentials and return the session token
    pub async fn admin_session(&self) -> Result<String> {
        let response = self.login(TEST_ADMIN_USER, TEST_ADMIN_PASS).await?;
        assert_eq!(response.status(), StatusCode::OK);
        session_cookie(&response).context("login did not set a session cookie")
    }

    /// POST /admin/logout with the given session
    pub async fn logout(&self, session: &str) -> Result<Response> {
        Ok(self
            .with_session(self.client.post(self.url("/admin/logout")), session)
            .send()
            .await?)
    }

    /// GET an admin page with the given session
    pub async fn get_admin(&self, path: &str, session: &str) -> Result<Response> {
        Ok(self
            .with_session(self.client.get(self.url(path)), session)
            .send()
            .await?)
    }

    /// POST a form to an admin route
    pub async fn post_form(
        &self,
        path: &str,
        session: &str,
        form: &[(&str, String)],
    ) -> Result<Response> {
        Ok(self
            .with_session(self.client.post(self.url(path)), session)
            .header("HX-Request", "true")
            .form(form)
            .send()
            .await?)
    }

    /// PUT a form to an admin route
    pub async fn put_form(
        &self,
        path: &str,
        session: &str,
        form: &[(&str, String)],
    ) -> Result<Response> {
        Ok(self
            .with_session(self.client.put(self.url(path)), session)
            .header("HX-Request", "true")
            .form(form)
            .send()
            .await?)
    }

    /// DELETE an admin resource
    pub async fn delete_admin(&self, path: &str, session: &str) -> Result<Response> {
        Ok(self
            .with_session(self.client.delete(self.url(path)), session)
            .header("HX-Request", "true")
            .send()
            .await?)
    }

    fn with_session(&self, request: RequestBuilder, session: &str) -> RequestBuilder {
        request.header("Cookie", format!("session={session}"))
    }
}

/// Configuration for a test server on `db_dir`
///
/// Login rate limiting is loosened so tests can log in freely.
pub fn test_config(db_dir: &TempDir, overrides: &[(&str, &str)]) -> Result<AppConfig> {
    let db_path = db_dir.path().join("portfolio.db");

    let mut env: HashMap<String, String> = HashMap::from([
        ("APP_ENV".to_string(), "development".to_string()),
        ("DATABASE_PATH".to_string(), db_path.to_string_lossy().into_owned()),
        ("ADMIN_USER".to_string(), TEST_ADMIN_USER.to_string()),
        ("ADMIN_PASS".to_string(), TEST_ADMIN_PASS.to_string()),
        ("SEED_DATABASE".to_string(), "false".to_string()),
        ("SESSION_PURGE_INTERVAL_SECS".to_string(), "0".to_string()),
        ("RATE_LIMIT_REQUESTS_PER_SECOND".to_string(), "1".to_string()),
        ("RATE_LIMIT_BURST".to_string(), "1000".to_string()),
    ]);
    for (key, value) in overrides {
        env.insert((*key).to_string(), (*value).to_string());
    }

    AppConfig::from_lookup(|key| env.get(key).cloned())
        .map_err(|e| anyhow::anyhow!("Config error: {}", e))
}

/// Value of the `session` cookie set by a response, if any
pub fn session_cookie(response: &Response) -> Option<String> {
    set_cookie_header(response).and_then(|header| {
        header
            .strip_prefix("session=")
            .and_then(|rest| rest.split(';').next())
            .map(str::to_string)
    })
}

/// Raw `Set-Cookie` header for the session cookie, if any
pub fn set_cookie_header(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("session="))
        .map(str::to_string)
}

/// Value of a response header as a string
pub fn header(response: &Response, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
