use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::company::errors::CompanyError;
use crate::domain::company::models::Company;
use crate::domain::company::models::CompanyAddress;
use crate::domain::company::models::CompanyId;
use crate::domain::company::models::CompanyName;
use crate::domain::company::models::PhoneNumber;
use crate::domain::company::ports::CompanyRepository;
use crate::domain::email::EmailAddress;

pub struct PostgresCompanyRepository {
    pool: PgPool,
}

impl PostgresCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_company(row: PgRow) -> Result<Company, CompanyError> {
        let db_err = |e: sqlx::Error| CompanyError::DatabaseError(e.to_string());
        let corrupt =
            |field: &str| CompanyError::DatabaseError(format!("Stored company has invalid {}", field));

        Ok(Company {
            id: CompanyId(row.try_get("id").map_err(db_err)?),
            name: CompanyName::new(row.try_get("name").map_err(db_err)?)
                .map_err(|_| corrupt("name"))?,
            email: EmailAddress::new(row.try_get("email").map_err(db_err)?)
                .map_err(|_| corrupt("email"))?,
            address: CompanyAddress::new(row.try_get("address").map_err(db_err)?)
                .map_err(|_| corrupt("address"))?,
            phone_no: PhoneNumber::new(row.try_get("phone_no").map_err(db_err)?)
                .map_err(|_| corrupt("phone_no"))?,
            created_at: row.try_get("created_at").map_err(db_err)?,
            updated_at: row.try_get("updated_at").map_err(db_err)?,
        })
    }

    fn map_write_error(e: sqlx::Error, company: &Company) -> CompanyError {
        if let Some(db_err) = e.as_database_error() {
            if db_err.is_unique_violation() && db_err.constraint() == Some("companies_email_key") {
                return CompanyError::EmailAlreadyExists(company.email.as_str().to_string());
            }
        }
        CompanyError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
    async fn create(&self, company: Company) -> Result<Company, CompanyError> {
        sqlx::query(
            r#"
            INSERT INTO companies (id, name, email, address, phone_no, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(company.id.0)
        .bind(company.name.as_str())
        .bind(company.email.as_str())
        .bind(company.address.as_str())
        .bind(company.phone_no.as_str())
        .bind(company.created_at)
        .bind(company.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &company))?;

        Ok(company)
    }

    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>, CompanyError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, address, phone_no, created_at, updated_at
            FROM companies
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CompanyError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_company).transpose()
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Company>, CompanyError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, email, address, phone_no, created_at, updated_at
            FROM companies
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CompanyError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_company).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Company>, CompanyError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email, address, phone_no, created_at, updated_at
            FROM companies
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CompanyError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_company).collect()
    }

    async fn update(&self, company: Company) -> Result<Company, CompanyError> {
        let result = sqlx::query(
            r#"
            UPDATE companies
            SET name = $2, email = $3, address = $4, phone_no = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(company.id.0)
        .bind(company.name.as_str())
        .bind(company.email.as_str())
        .bind(company.address.as_str())
        .bind(company.phone_no.as_str())
        .bind(company.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_write_error(e, &company))?;

        if result.rows_affected() == 0 {
            return Err(CompanyError::NotFound(company.id.to_string()));
        }

        Ok(company)
    }

    async fn delete(&self, id: &CompanyId) -> Result<(), CompanyError> {
        let result = sqlx::query(
            r#"
            DELETE FROM companies
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| CompanyError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CompanyError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
