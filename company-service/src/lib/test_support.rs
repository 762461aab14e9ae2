//! In-memory store fakes for service and router tests.
//!
//! Each fake enforces the same uniqueness rules as the PostgreSQL schema so
//! duplicate handling can be exercised without a database.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::company::errors::CompanyError;
use crate::domain::company::models::Company;
use crate::domain::company::models::CompanyId;
use crate::domain::company::ports::CompanyRepository;
use crate::domain::email::EmailAddress;
use crate::domain::token::errors::TokenError;
use crate::domain::token::models::AuthToken;
use crate::domain::token::ports::TokenRepository;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|existing| existing.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .find(|user| &user.email == email)
            .cloned())
    }
}

#[derive(Default)]
pub struct InMemoryTokenRepository {
    tokens: Mutex<HashMap<String, AuthToken>>,
}

impl InMemoryTokenRepository {
    pub fn all(&self) -> Vec<AuthToken> {
        self.tokens.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn create(&self, token: AuthToken) -> Result<AuthToken, TokenError> {
        let mut tokens = self.tokens.lock().unwrap();
        if tokens.contains_key(&token.digest) {
            return Err(TokenError::DatabaseError("duplicate token digest".to_string()));
        }
        tokens.insert(token.digest.clone(), token.clone());
        Ok(token)
    }

    async fn find_by_digest(&self, digest: &str) -> Result<Option<AuthToken>, TokenError> {
        Ok(self.tokens.lock().unwrap().get(digest).cloned())
    }

    async fn delete_by_digest(&self, digest: &str) -> Result<(), TokenError> {
        self.tokens
            .lock()
            .unwrap()
            .remove(digest)
            .map(|_| ())
            .ok_or(TokenError::NotFound)
    }
}

#[derive(Default)]
pub struct InMemoryCompanyRepository {
    companies: Mutex<HashMap<CompanyId, Company>>,
}

impl InMemoryCompanyRepository {
    fn email_in_use(
        companies: &HashMap<CompanyId, Company>,
        email: &EmailAddress,
        except: &CompanyId,
    ) -> bool {
        companies
            .values()
            .any(|company| &company.email == email && &company.id != except)
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn create(&self, company: Company) -> Result<Company, CompanyError> {
        let mut companies = self.companies.lock().unwrap();
        if Self::email_in_use(&companies, &company.email, &company.id) {
            return Err(CompanyError::EmailAlreadyExists(company.email.to_string()));
        }
        companies.insert(company.id, company.clone());
        Ok(company)
    }

    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>, CompanyError> {
        Ok(self.companies.lock().unwrap().get(id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<Company>, CompanyError> {
        Ok(self
            .companies
            .lock()
            .unwrap()
            .values()
            .find(|company| &company.email == email)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Company>, CompanyError> {
        let mut companies: Vec<Company> =
            self.companies.lock().unwrap().values().cloned().collect();
        companies.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(companies)
    }

    async fn update(&self, company: Company) -> Result<Company, CompanyError> {
        let mut companies = self.companies.lock().unwrap();
        if !companies.contains_key(&company.id) {
            return Err(CompanyError::NotFound(company.id.to_string()));
        }
        if Self::email_in_use(&companies, &company.email, &company.id) {
            return Err(CompanyError::EmailAlreadyExists(company.email.to_string()));
        }
        companies.insert(company.id, company.clone());
        Ok(company)
    }

    async fn delete(&self, id: &CompanyId) -> Result<(), CompanyError> {
        self.companies
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or(CompanyError::NotFound(id.to_string()))
    }
}
