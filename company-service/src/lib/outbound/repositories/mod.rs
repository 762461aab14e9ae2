pub mod company;
pub mod token;
pub mod user;

pub use company::PostgresCompanyRepository;
pub use token::PostgresTokenRepository;
pub use user::PostgresUserRepository;
