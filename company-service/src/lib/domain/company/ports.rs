use async_trait::async_trait;

use crate::domain::company::errors::CompanyError;
use crate::domain::company::models::Company;
use crate::domain::company::models::CompanyId;
use crate::domain::company::models::CompanyInput;
use crate::domain::email::EmailAddress;

/// Port for company directory operations.
#[async_trait]
pub trait CompanyServicePort: Send + Sync + 'static {
    /// All companies, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_companies(&self) -> Result<Vec<Company>, CompanyError>;

    /// Create a new company.
    ///
    /// # Arguments
    /// * `input` - Raw name, email, address and phone number
    ///
    /// # Returns
    /// Created company entity
    ///
    /// # Errors
    /// * `Validation` - One or more fields are missing or malformed, or the email is taken
    /// * `DatabaseError` - Database operation failed
    async fn create_company(&self, input: CompanyInput) -> Result<Company, CompanyError>;

    /// Retrieve company by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Company does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_company(&self, id: &CompanyId) -> Result<Company, CompanyError>;

    /// Update the supplied fields of an existing company.
    ///
    /// # Arguments
    /// * `id` - Company identifier
    /// * `input` - Fields to change; absent fields are left untouched
    ///
    /// # Returns
    /// Updated company entity
    ///
    /// # Errors
    /// * `NotFound` - Company does not exist
    /// * `Validation` - A supplied field is blank or malformed, or the email belongs to another company
    /// * `DatabaseError` - Database operation failed
    async fn update_company(
        &self,
        id: &CompanyId,
        input: CompanyInput,
    ) -> Result<Company, CompanyError>;

    /// Delete company by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Company does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_company(&self, id: &CompanyId) -> Result<(), CompanyError>;
}

/// Persistence operations for companies.
#[async_trait]
pub trait CompanyRepository: Send + Sync + 'static {
    /// Persist new company to storage.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already used by another company
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, company: Company) -> Result<Company, CompanyError>;

    /// Retrieve company by identifier.
    ///
    /// # Returns
    /// Optional company entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>, CompanyError>;

    /// Retrieve company by email address.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Company>, CompanyError>;

    /// Retrieve all companies ordered by `created_at` then `id`, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Company>, CompanyError>;

    /// Persist changes to an existing company.
    ///
    /// # Errors
    /// * `NotFound` - Company does not exist
    /// * `EmailAlreadyExists` - Email is already used by another company
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, company: Company) -> Result<Company, CompanyError>;

    /// Remove company from storage.
    ///
    /// # Errors
    /// * `NotFound` - Company does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &CompanyId) -> Result<(), CompanyError>;
}
