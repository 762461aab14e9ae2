//! Authentication primitives shared by the API services.
//!
//! - Password hashing (Argon2id, PHC string output)
//! - Opaque bearer token generation with SHA-256 digests for storage
//!
//! Services own their credential and token stores; this crate only produces
//! and checks the secret material.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("abc12345").unwrap();
//! assert!(hasher.verify("abc12345", &hash).unwrap());
//! assert!(!hasher.verify("wrong", &hash).unwrap());
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::TokenGenerator;
//!
//! let generator = TokenGenerator::new();
//! let token = generator.generate();
//!
//! // Only the digest is persisted; the plain text goes back to the client once.
//! assert_eq!(generator.digest(token.plain_text()), token.digest());
//! ```

pub mod password;
pub mod token;

pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::GeneratedToken;
pub use token::TokenGenerator;
