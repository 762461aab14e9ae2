use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::token::errors::TokenError;
use crate::domain::token::models::AuthToken;
use crate::domain::token::models::TokenId;
use crate::domain::token::ports::TokenRepository;
use crate::domain::user::models::UserId;

pub struct PostgresTokenRepository {
    pool: PgPool,
}

impl PostgresTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_token(row: PgRow) -> Result<AuthToken, TokenError> {
        let db_err = |e: sqlx::Error| TokenError::DatabaseError(e.to_string());

        Ok(AuthToken {
            id: TokenId(row.try_get("id").map_err(db_err)?),
            user_id: UserId(row.try_get("user_id").map_err(db_err)?),
            name: row.try_get("name").map_err(db_err)?,
            digest: row.try_get("token_digest").map_err(db_err)?,
            created_at: row.try_get("created_at").map_err(db_err)?,
            expires_at: row.try_get("expires_at").map_err(db_err)?,
        })
    }
}

#[async_trait]
impl TokenRepository for PostgresTokenRepository {
    async fn create(&self, token: AuthToken) -> Result<AuthToken, TokenError> {
        sqlx::query(
            r#"
            INSERT INTO personal_access_tokens (id, user_id, name, token_digest, created_at, expires_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(token.id.0)
        .bind(token.user_id.0)
        .bind(&token.name)
        .bind(&token.digest)
        .bind(token.created_at)
        .bind(token.expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TokenError::DatabaseError(e.to_string()))?;

        Ok(token)
    }

    async fn find_by_digest(&self, digest: &str) -> Result<Option<AuthToken>, TokenError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, name, token_digest, created_at, expires_at
            FROM personal_access_tokens
            WHERE token_digest = $1
            "#,
        )
        .bind(digest)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TokenError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_token).transpose()
    }

    async fn delete_by_digest(&self, digest: &str) -> Result<(), TokenError> {
        let result = sqlx::query(
            r#"
            DELETE FROM personal_access_tokens
            WHERE token_digest = $1
            "#,
        )
        .bind(digest)
        .execute(&self.pool)
        .await
        .map_err(|e| TokenError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TokenError::NotFound);
        }

        Ok(())
    }
}
