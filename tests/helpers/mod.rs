//! Shared test helpers for integration tests.
//!
//! The router under test is the real production router; only the storage
//! collaborators are replaced with in-memory implementations, so every
//! test runs hermetically without a database.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use vault_api::state::AppState;
use vault_auth::identity::IdentityResolver;
use vault_auth::jwt::decoder::JwtDecoder;
use vault_auth::jwt::encoder::JwtEncoder;
use vault_auth::password::hasher::PasswordHasher;
use vault_auth::password::validator::PasswordValidator;
use vault_auth::policy::PolicyEngine;
use vault_core::config::AppConfig;
use vault_core::error::AppError;
use vault_core::result::AppResult;
use vault_core::traits::{OwnershipChecker, SnippetStore, TagStore, UserDirectory};
use vault_core::types::resource::{ResourceKind, Snippet, Tag};
use vault_core::types::role::Role;
use vault_core::types::user::{NewUser, User};

/// In-memory user directory.
#[derive(Default)]
pub struct MemoryDirectory {
    users: Mutex<HashMap<i64, User>>,
    roles: Mutex<HashMap<i64, Vec<Role>>>,
    next_id: AtomicI64,
}

impl MemoryDirectory {
    /// Replace a user's role set, as a live directory change would.
    pub fn set_roles(&self, user_id: i64, roles: Vec<Role>) {
        self.roles.lock().unwrap().insert(user_id, roles);
    }
}

#[async_trait]
impl UserDirectory for MemoryDirectory {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }

    async fn roles_of(&self, user_id: i64) -> AppResult<Vec<Role>> {
        Ok(self
            .roles
            .lock()
            .unwrap()
            .get(&user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self.users.lock().unwrap().values().cloned().collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.username == user.username) {
            return Err(AppError::conflict("Username already exists"));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let created = User {
            id,
            username: user.username,
            password_hash: user.password_hash,
            created_at: chrono::Utc::now(),
        };
        users.insert(id, created.clone());
        self.roles.lock().unwrap().insert(id, user.roles);
        Ok(created)
    }

    async fn delete(&self, id: i64) -> AppResult<Option<User>> {
        self.roles.lock().unwrap().remove(&id);
        Ok(self.users.lock().unwrap().remove(&id))
    }

    async fn admin_count(&self) -> AppResult<i64> {
        Ok(self
            .roles
            .lock()
            .unwrap()
            .values()
            .filter(|roles| roles.contains(&Role::Admin))
            .count() as i64)
    }
}

/// In-memory tag store.
#[derive(Default)]
pub struct MemoryTags {
    tags: Mutex<HashMap<i64, Tag>>,
    next_id: AtomicI64,
}

impl MemoryTags {
    pub fn insert(&self, owner: i64, name: &str) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.tags.lock().unwrap().insert(
            id,
            Tag {
                id,
                user_id: owner,
                name: name.to_string(),
                color: "#808080".to_string(),
                created_at: chrono::Utc::now(),
            },
        );
        id
    }

    /// Reassign a tag to a different owner.
    pub fn set_owner(&self, tag_id: i64, owner: i64) {
        if let Some(tag) = self.tags.lock().unwrap().get_mut(&tag_id) {
            tag.user_id = owner;
        }
    }

    fn exists(&self, tag_id: i64) -> bool {
        self.tags.lock().unwrap().contains_key(&tag_id)
    }
}

#[async_trait]
impl OwnershipChecker for MemoryTags {
    async fn owner_of(&self, resource_id: i64) -> AppResult<Option<i64>> {
        Ok(self.tags.lock().unwrap().get(&resource_id).map(|t| t.user_id))
    }
}

#[async_trait]
impl TagStore for MemoryTags {
    async fn delete(&self, id: i64) -> AppResult<Option<Tag>> {
        Ok(self.tags.lock().unwrap().remove(&id))
    }
}

/// In-memory snippet store holding snippet-tag links.
pub struct MemorySnippets {
    snippets: Mutex<HashMap<i64, Snippet>>,
    links: Mutex<HashSet<(i64, i64)>>,
    tags: Arc<MemoryTags>,
    next_id: AtomicI64,
}

impl MemorySnippets {
    pub fn new(tags: Arc<MemoryTags>) -> Self {
        Self {
            snippets: Mutex::new(HashMap::new()),
            links: Mutex::new(HashSet::new()),
            tags,
            next_id: AtomicI64::new(0),
        }
    }

    pub fn insert(&self, owner: i64, title: &str) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.snippets.lock().unwrap().insert(
            id,
            Snippet {
                id,
                user_id: owner,
                title: title.to_string(),
                description: None,
                created_at: chrono::Utc::now(),
            },
        );
        id
    }

    pub fn is_linked(&self, snippet_id: i64, tag_id: i64) -> bool {
        self.links.lock().unwrap().contains(&(snippet_id, tag_id))
    }
}

#[async_trait]
impl OwnershipChecker for MemorySnippets {
    async fn owner_of(&self, resource_id: i64) -> AppResult<Option<i64>> {
        Ok(self
            .snippets
            .lock()
            .unwrap()
            .get(&resource_id)
            .map(|s| s.user_id))
    }
}

#[async_trait]
impl SnippetStore for MemorySnippets {
    async fn find(&self, id: i64) -> AppResult<Option<Snippet>> {
        Ok(self.snippets.lock().unwrap().get(&id).cloned())
    }

    async fn delete(&self, id: i64) -> AppResult<Option<Snippet>> {
        self.links.lock().unwrap().retain(|(sid, _)| *sid != id);
        Ok(self.snippets.lock().unwrap().remove(&id))
    }

    async fn attach_tag(&self, snippet_id: i64, tag_id: i64) -> AppResult<()> {
        if !self.snippets.lock().unwrap().contains_key(&snippet_id) || !self.tags.exists(tag_id) {
            return Err(AppError::not_found("Snippet or tag not found"));
        }
        if !self.links.lock().unwrap().insert((snippet_id, tag_id)) {
            return Err(AppError::conflict("Tag is already on snippet"));
        }
        Ok(())
    }

    async fn detach_tag(&self, snippet_id: i64, tag_id: i64) -> AppResult<()> {
        if !self.links.lock().unwrap().remove(&(snippet_id, tag_id)) {
            return Err(AppError::validation("Tag is not on snippet"));
        }
        Ok(())
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Token issuer sharing the router's signing key
    pub jwt_encoder: Arc<JwtEncoder>,
    /// In-memory user directory
    pub directory: Arc<MemoryDirectory>,
    /// In-memory snippet store
    pub snippets: Arc<MemorySnippets>,
    /// In-memory tag store
    pub tags: Arc<MemoryTags>,
    hasher: PasswordHasher,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let config = AppConfig::default();

        let directory = Arc::new(MemoryDirectory::default());
        let tags = Arc::new(MemoryTags::default());
        let snippets = Arc::new(MemorySnippets::new(Arc::clone(&tags)));

        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let password_hasher = Arc::new(PasswordHasher::new());
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let identity_resolver = Arc::new(IdentityResolver::new(
            Arc::clone(&directory) as Arc<dyn UserDirectory>
        ));

        let policy = Arc::new(
            PolicyEngine::builder()
                .register(
                    ResourceKind::Snippet,
                    Arc::clone(&snippets) as Arc<dyn OwnershipChecker>,
                )
                .register(
                    ResourceKind::Tag,
                    Arc::clone(&tags) as Arc<dyn OwnershipChecker>,
                )
                .build(),
        );

        let state = AppState {
            config: Arc::new(config),
            jwt_encoder: Arc::clone(&jwt_encoder),
            jwt_decoder,
            password_hasher,
            password_validator,
            identity_resolver,
            policy,
            directory: Arc::clone(&directory) as Arc<dyn UserDirectory>,
            snippets: Arc::clone(&snippets) as Arc<dyn SnippetStore>,
            tags: Arc::clone(&tags) as Arc<dyn TagStore>,
        };

        Self {
            router: vault_api::router::build_router(state),
            jwt_encoder,
            directory,
            snippets,
            tags,
            hasher: PasswordHasher::new(),
        }
    }

    /// Create a user directly in the directory and return their id
    pub async fn create_user(&self, username: &str, password: &str, admin: bool) -> i64 {
        let hash = self.hasher.hash(password).expect("Failed to hash password");
        let roles = if admin {
            vec![Role::User, Role::Admin]
        } else {
            vec![Role::User]
        };
        let user = self
            .directory
            .create(NewUser {
                username: username.to_string(),
                password_hash: hash,
                roles,
            })
            .await
            .expect("Failed to create test user");
        user.id
    }

    /// Login and return the bearer token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response
            .body
            .get("token")
            .and_then(|v| v.as_str())
            .expect("No token in login response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
