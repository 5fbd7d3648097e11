// src/repositories/user_repository.rs

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::AppResult,
    models::{
        page::PageRequest,
        user::{NewUser, ProfileUpdate, User},
    },
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;
    /// Looks up by email regardless of the soft-delete flag.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;
    async fn create(&self, user: &NewUser) -> AppResult<User>;
    /// Returns false if no user has this id.
    async fn set_approved(&self, id: i64, approved: bool) -> AppResult<bool>;
    /// Returns false if no user has this id.
    async fn set_deleted(&self, id: i64, deleted: bool) -> AppResult<bool>;
    async fn list(&self, page: PageRequest) -> AppResult<(Vec<User>, i64)>;
    /// Rewrites the profile of a non-blocked user. A `None` password hash keeps
    /// the current one. Returns `None` if no such user exists.
    async fn update_profile(&self, id: i64, profile: &ProfileUpdate) -> AppResult<Option<User>>;
    /// Accounts that are not blocked.
    async fn count_live(&self) -> AppResult<i64>;
}

const USER_COLUMNS: &str = r#"
    id, name, email, password, role, is_approved, is_deleted,
    profile_pic, bio, education, created_at, updated_at
"#;

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Login DB error: {:?}", e);
                e
            })?;
        Ok(user)
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn create(&self, user: &NewUser) -> AppResult<User> {
        let sql = format!(
            r#"
            INSERT INTO users
                (name, email, password, role, is_approved, is_deleted, profile_pic, bio, education)
            VALUES ($1, $2, $3, $4, $5, FALSE, $6, $7, $8)
            RETURNING {USER_COLUMNS}
            "#
        );
        let created = sqlx::query_as::<_, User>(&sql)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.role)
            .bind(user.is_approved)
            .bind(user.profile_pic.as_deref())
            .bind(user.bio.as_deref())
            .bind(user.education.as_deref())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to register user: {:?}", e);
                e
            })?;
        Ok(created)
    }

    async fn set_approved(&self, id: i64, approved: bool) -> AppResult<bool> {
        let result = sqlx::query("UPDATE users SET is_approved = $1, updated_at = NOW() WHERE id = $2")
            .bind(approved)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn set_deleted(&self, id: i64, deleted: bool) -> AppResult<bool> {
        let result = sqlx::query("UPDATE users SET is_deleted = $1, updated_at = NOW() WHERE id = $2")
            .bind(deleted)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, page: PageRequest) -> AppResult<(Vec<User>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        let sql = format!("SELECT {USER_COLUMNS} FROM users ORDER BY id DESC LIMIT $1 OFFSET $2");
        let users = sqlx::query_as::<_, User>(&sql)
            .bind(page.size)
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list users: {:?}", e);
                e
            })?;

        Ok((users, total))
    }

    async fn update_profile(&self, id: i64, profile: &ProfileUpdate) -> AppResult<Option<User>> {
        let sql = format!(
            r#"
            UPDATE users SET
                name = $1,
                password = COALESCE($2, password),
                profile_pic = $3,
                bio = $4,
                education = $5,
                updated_at = NOW()
            WHERE id = $6 AND is_deleted = FALSE
            RETURNING {USER_COLUMNS}
            "#
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(&profile.name)
            .bind(profile.password_hash.as_deref())
            .bind(profile.profile_pic.as_deref())
            .bind(profile.bio.as_deref())
            .bind(profile.education.as_deref())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update profile of user {}: {:?}", id, e);
                e
            })?;
        Ok(user)
    }

    async fn count_live(&self) -> AppResult<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE is_deleted = FALSE")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }
}
