//! Common test utilities for API tests
//!
//! Provides in-memory and failing repositories for router-level tests, and a
//! PostgreSQL container-backed application for e2e tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;
use uuid::Uuid;

use user_registry::application::UserApplicationService;
use user_registry::domain::gateways::UserRepository;
use user_registry::domain::models::user::{User, UserId};
use user_registry::domain::services::UserDomainService;
use user_registry::infrastructure::driven_adapters::database;
use user_registry::infrastructure::driven_adapters::user_repository::PostgresUserRepository;
use user_registry::infrastructure::driving_adapters::api_rest::{self, AppState};
use user_registry::shared::errors::RepositoryError;

/// Repository keeping users in memory, enforcing unique identifications
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.identification() == user.identification()) {
            return Err(RepositoryError::Database(sqlx::Error::Protocol(
                "duplicate key value violates unique constraint \"users_identification_key\"".to_string(),
            )));
        }

        let saved = user.clone().with_id(UserId::from_uuid(Uuid::new_v4()));
        users.push(saved.clone());
        Ok(saved)
    }

    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id() == Some(id)).cloned())
    }

    async fn get_by_identification(&self, identification: i64) -> Result<Option<User>, RepositoryError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| u.identification() == identification)
            .cloned())
    }
}

/// Repository whose every call fails as if the database were down
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn save(&self, _user: &User) -> Result<User, RepositoryError> {
        Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn get_by_id(&self, _id: &UserId) -> Result<Option<User>, RepositoryError> {
        Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn get_by_identification(&self, _identification: i64) -> Result<Option<User>, RepositoryError> {
        Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
    }
}

/// Repository that panics on every call
pub struct PanickingUserRepository;

#[async_trait]
impl UserRepository for PanickingUserRepository {
    async fn save(&self, _user: &User) -> Result<User, RepositoryError> {
        panic!("repository exploded while saving")
    }

    async fn get_by_id(&self, _id: &UserId) -> Result<Option<User>, RepositoryError> {
        panic!("repository exploded while reading by id")
    }

    async fn get_by_identification(&self, _identification: i64) -> Result<Option<User>, RepositoryError> {
        panic!("repository exploded while reading by identification")
    }
}

/// Wire the full application around a repository
pub fn build_router(user_repository: Arc<dyn UserRepository>) -> Router {
    let user_domain_service = Arc::new(UserDomainService::new(user_repository));
    let user_application_service = Arc::new(UserApplicationService::new(user_domain_service));
    api_rest::router(AppState::new(user_application_service))
}

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub pool: Option<PgPool>,
    _container: Option<ContainerAsync<Postgres>>,
}

impl TestApp {
    /// Application backed by an in-memory repository
    pub fn in_memory() -> Self {
        Self {
            router: build_router(Arc::new(InMemoryUserRepository::default())),
            pool: None,
            _container: None,
        }
    }

    /// Application whose repository always fails
    pub fn failing() -> Self {
        Self {
            router: build_router(Arc::new(FailingUserRepository)),
            pool: None,
            _container: None,
        }
    }

    /// Application whose repository panics
    pub fn panicking() -> Self {
        Self {
            router: build_router(Arc::new(PanickingUserRepository)),
            pool: None,
            _container: None,
        }
    }

    /// Application backed by a fresh PostgreSQL database
    pub async fn postgres() -> Self {
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let database_url = format!("postgres://postgres:postgres@{host}:{port}/postgres");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .min_connections(1)
            .connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        database::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            router: build_router(Arc::new(PostgresUserRepository::new(pool.clone()))),
            pool: Some(pool),
            _container: Some(container),
        }
    }

    /// POST a JSON body to `/`
    pub async fn post_json<T: Serialize>(&self, body: &T) -> Response<Body> {
        self.post_raw(serde_json::to_string(body).unwrap()).await
    }

    /// POST a raw body to `/`
    pub async fn post_raw(&self, body: String) -> Response<Body> {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// GET a path
    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    /// Create a user and return the response body, asserting 201
    pub async fn create_user(&self, request: &CreateUserRequest) -> UserResponse {
        let response = self.post_json(request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        read_json(response).await
    }
}

/// Deserialize a response body
pub async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// Helper struct for creating user request bodies
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserRequest {
    pub identification: i64,
    pub name: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Default for CreateUserRequest {
    fn default() -> Self {
        Self {
            identification: 1_234_567_890,
            name: "John Doe".to_string(),
            role: "CUSTOMER".to_string(),
            phone: Some("1234567890".to_string()),
        }
    }
}

impl CreateUserRequest {
    pub fn driver(identification: i64, name: &str) -> Self {
        Self {
            identification,
            name: name.to_string(),
            role: "DRIVER".to_string(),
            phone: None,
        }
    }
}

/// User response structure for deserialization
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub identification: i64,
    pub name: String,
    pub role: String,
    pub phone: Option<String>,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub message: String,
}
