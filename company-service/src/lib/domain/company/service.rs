use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::company::errors::CompanyError;
use crate::domain::company::models::Company;
use crate::domain::company::models::CompanyId;
use crate::domain::company::models::CompanyInput;
use crate::domain::company::ports::CompanyRepository;
use crate::domain::company::ports::CompanyServicePort;
use crate::domain::email::EmailAddress;
use crate::domain::validation::FieldError;
use crate::domain::validation::ValidationErrors;

/// Domain service implementation for company operations.
pub struct CompanyService<CR>
where
    CR: CompanyRepository,
{
    repository: Arc<CR>,
}

impl<CR> CompanyService<CR>
where
    CR: CompanyRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }

    /// Whether `email` belongs to a company other than `current`.
    async fn email_taken(
        &self,
        email: &EmailAddress,
        current: Option<&CompanyId>,
    ) -> Result<bool, CompanyError> {
        let existing = self.repository.find_by_email(email).await?;
        Ok(existing.map_or(false, |company| Some(&company.id) != current))
    }
}

/// A unique violation from the store surfaces as a field error on `email`.
fn duplicate_as_validation(err: CompanyError) -> CompanyError {
    match err {
        CompanyError::EmailAlreadyExists(_) => {
            let mut errors = ValidationErrors::new();
            errors.add("email", FieldError::Taken);
            CompanyError::Validation(errors)
        }
        other => other,
    }
}

#[async_trait]
impl<CR> CompanyServicePort for CompanyService<CR>
where
    CR: CompanyRepository,
{
    async fn list_companies(&self) -> Result<Vec<Company>, CompanyError> {
        self.repository.list_all().await
    }

    async fn create_company(&self, input: CompanyInput) -> Result<Company, CompanyError> {
        let (fields, mut errors) = input.validate_all();

        if let Some(email) = &fields.email {
            if self.email_taken(email, None).await? {
                errors.add("email", FieldError::Taken);
            }
        }

        let new_company = match fields.into_new_company() {
            Some(new_company) if errors.is_empty() => new_company,
            _ => return Err(CompanyError::Validation(errors)),
        };

        let now = Utc::now();
        let company = Company {
            id: CompanyId::new(),
            name: new_company.name,
            email: new_company.email,
            address: new_company.address,
            phone_no: new_company.phone_no,
            created_at: now,
            updated_at: now,
        };

        let created = self
            .repository
            .create(company)
            .await
            .map_err(duplicate_as_validation)?;
        tracing::info!(company_id = %created.id, "Company created");

        Ok(created)
    }

    async fn get_company(&self, id: &CompanyId) -> Result<Company, CompanyError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CompanyError::NotFound(id.to_string()))
    }

    async fn update_company(
        &self,
        id: &CompanyId,
        input: CompanyInput,
    ) -> Result<Company, CompanyError> {
        let mut company = self.get_company(id).await?;

        let (changes, mut errors) = input.validate_supplied();

        if let Some(email) = &changes.email {
            if self.email_taken(email, Some(id)).await? {
                errors.add("email", FieldError::Taken);
            }
        }

        if !errors.is_empty() {
            return Err(CompanyError::Validation(errors));
        }

        company.apply(changes, Utc::now());

        let updated = self
            .repository
            .update(company)
            .await
            .map_err(duplicate_as_validation)?;
        tracing::info!(company_id = %updated.id, "Company updated");

        Ok(updated)
    }

    async fn delete_company(&self, id: &CompanyId) -> Result<(), CompanyError> {
        self.repository.delete(id).await?;
        tracing::info!(company_id = %id, "Company deleted");
        Ok(())
    }
}
