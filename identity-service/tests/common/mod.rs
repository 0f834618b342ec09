use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::TokenService;
use chrono::Duration;
use identity_service::domain::user::models::NewUser;
use identity_service::domain::user::models::User;
use identity_service::domain::user::models::UserId;
use identity_service::domain::user::service::UserDirectory;
use identity_service::inbound::http::middleware::AuthGate;
use identity_service::inbound::http::router::create_router;
use identity_service::user::errors::UserError;
use identity_service::user::ports::UserStore;

pub const TOKEN_SECRET: &str = "test-secret-key-for-token-signing-at-least-32-bytes";
pub const PEPPER: &str = "test_pepper";

/// In-memory double for the user store, so the suite runs without a
/// database. Persistence is an external collaborator behind the
/// `UserStore` port; these tests exercise everything above it.
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, new_user: NewUser) -> Result<User, UserError> {
        let user = User {
            id: UserId(self.next_id.fetch_add(1, Ordering::SeqCst)),
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            password_hash: new_user.password_hash,
        };

        self.users.lock().unwrap().push(user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }

    async fn find_by_full_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<User>, UserError> {
        // First match, like the SQL adapter.
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.first_name == first_name && user.last_name == last_name)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        Ok(self.users.lock().unwrap().clone())
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
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

        // Low cost keeps the suite fast; the policy itself is covered by
        // the auth crate's unit tests.
        let password_hasher =
            Arc::new(PasswordHasher::new(PEPPER, 1).expect("Failed to build hasher"));
        let token_service = Arc::new(
            TokenService::new(TOKEN_SECRET, Duration::hours(24))
                .expect("Failed to build token service"),
        );
        let auth_gate = Arc::new(AuthGate::new(Arc::clone(&token_service)));

        let user_store = Arc::new(InMemoryUserStore::new());
        let user_directory = Arc::new(UserDirectory::new(
            user_store,
            password_hasher,
            token_service,
        ));

        let router = create_router(user_directory, auth_gate);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
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

    /// Register a user and return the issued token.
    pub async fn register(&self, first_name: &str, last_name: &str, password: &str) -> String {
        let response = self
            .post("/users/register")
            .json(&serde_json::json!({
                "first_name": first_name,
                "last_name": last_name,
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert!(response.status().is_success());

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"].as_str().expect("Missing token").to_string()
    }

    /// Token signed with the right secret but already expired.
    pub fn expired_token(&self, user_id: i64) -> String {
        TokenService::new(TOKEN_SECRET, Duration::seconds(-5))
            .expect("Failed to build token service")
            .issue(user_id)
            .expect("Failed to issue token")
    }

    /// Decode a token issued by the app under test.
    pub fn verify_token(&self, token: &str) -> Option<i64> {
        TokenService::new(TOKEN_SECRET, Duration::hours(24))
            .expect("Failed to build token service")
            .verify(token)
    }
}
