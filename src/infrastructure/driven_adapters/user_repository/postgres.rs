//! PostgreSQL User Repository Implementation
//!
//! Implements the UserRepository trait using SQLx for PostgreSQL.
//!
//! Every user lives in `users`. Each role owns an index table (`customers`,
//! `drivers`) holding the ids of its members, consulted on read to rebuild
//! the role.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::UserRepository;
use crate::domain::models::phone::Phone;
use crate::domain::models::user::{Role, User, UserId};
use crate::shared::errors::RepositoryError;

const SELECT_USER: &str = r#"
    SELECT u.id, u.identification, u.name, u.role, u.phone,
           (c.user_id IS NOT NULL) AS is_customer,
           (d.user_id IS NOT NULL) AS is_driver
    FROM users u
    LEFT JOIN customers c ON c.user_id = u.id
    LEFT JOIN drivers d ON d.user_id = u.id
"#;

/// Database row representation for the users table joined to the role tables
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    identification: i64,
    name: String,
    role: String,
    phone: Option<String>,
    is_customer: bool,
    is_driver: bool,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let role = match (row.is_customer, row.is_driver) {
            (true, false) => Role::Customer,
            (false, true) => Role::Driver,
            // No index row (or both): trust the role column
            _ => row
                .role
                .parse::<Role>()
                .map_err(|e| RepositoryError::Mapping(format!("Failed to parse role: {e}")))?,
        };

        let phone = row
            .phone
            .as_deref()
            .map(Phone::new)
            .transpose()
            .map_err(|e| RepositoryError::Mapping(format!("Failed to parse phone: {e}")))?;

        Ok(User::restore(
            UserId::from_uuid(row.id),
            row.identification,
            row.name,
            role,
            phone,
        ))
    }
}

/// Insert statement for the index table of a role
fn role_index_insert(role: Role) -> &'static str {
    match role {
        Role::Customer => "INSERT INTO customers (user_id) VALUES ($1)",
        Role::Driver => "INSERT INTO drivers (user_id) VALUES ($1)",
    }
}

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new PostgresUserRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, user: &User) -> Result<User, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO users (identification, name, role, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(user.identification())
        .bind(user.name())
        .bind(user.role().as_str())
        .bind(user.phone().map(Phone::as_str))
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(role_index_insert(user.role()))
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(user_id = %id, role = %user.role(), "User row inserted");
        Ok(user.clone().with_id(UserId::from_uuid(id)))
    }

    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE u.id = $1"))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(User::try_from).transpose()
    }

    async fn get_by_identification(&self, identification: i64) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{SELECT_USER} WHERE u.identification = $1"))
            .bind(identification)
            .fetch_optional(&self.pool)
            .await?;

        row.map(User::try_from).transpose()
    }
}
