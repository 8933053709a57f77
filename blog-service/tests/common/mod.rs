use std::sync::Arc;

use auth::FixedClock;
use auth::JwtHandler;
use auth::SessionTokens;
use blog_service::domain::identity::models::Identity;
use blog_service::domain::identity::models::IdentityId;
use blog_service::domain::identity::ports::IdentityServicePort;
use blog_service::inbound::http::router::create_router;
use blog_service::inbound::http::router::AppState;
use blog_service::outbound::hashing::Argon2PasswordHasher;
use blog_service::outbound::repositories::InMemoryCommentRepository;
use blog_service::outbound::repositories::InMemoryCredentialStore;
use blog_service::outbound::repositories::InMemoryPostRepository;
use chrono::Duration;
use chrono::Utc;
use serde_json::json;
use serde_json::Value;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Test application that spawns a real server over in-memory storage
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    /// Clock shared with the server's token issuance and expiry checks
    pub clock: Arc<FixedClock>,
    pub identity_service: Arc<dyn IdentityServicePort>,
    pub posts: Arc<InMemoryPostRepository>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let clock = Arc::new(FixedClock::new(Utc::now()));
        let tokens = Arc::new(
            SessionTokens::new(
                JWT_SECRET,
                Duration::hours(TOKEN_TTL_HOURS),
                clock.clone(),
            )
            .expect("Failed to create session tokens"),
        );

        let posts = Arc::new(InMemoryPostRepository::new());
        let state = AppState::new(
            Arc::new(InMemoryCredentialStore::new()),
            Arc::new(Argon2PasswordHasher::new()),
            posts.clone(),
            Arc::new(InMemoryCommentRepository::new()),
            tokens,
        );
        let identity_service = state.identity_service.clone();

        let router = create_router(state);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET).expect("Failed to create JWT handler"),
            clock,
            identity_service,
            posts,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Sign up through the API and return the created identity's id
    pub async fn sign_up(&self, username: &str, password: &str) -> IdentityId {
        let response = self
            .post("/api/sign-up")
            .json(&json!({
                "username": username,
                "password": password,
                "confirm_password": password,
                "firstname": "Test",
                "lastname": "User"
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = response.json().await.expect("Failed to parse response");
        IdentityId::from_string(body["data"]["id"].as_str().unwrap()).unwrap()
    }

    /// Log in through the API and return the bearer token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .post("/api/login")
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"].as_str().unwrap().to_string()
    }

    /// Administrative flip of the author flag; there is no HTTP route for it
    pub async fn set_author(&self, id: &IdentityId, is_author: bool) -> Identity {
        self.identity_service
            .set_author(id, is_author)
            .await
            .expect("Failed to set author flag")
    }

    /// Sign up, grant the author role and log in
    pub async fn author_token(&self, username: &str) -> String {
        let id = self.sign_up(username, "password123").await;
        self.set_author(&id, true).await;
        self.login(username, "password123").await
    }
}
