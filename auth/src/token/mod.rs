pub mod generator;

pub use generator::GeneratedToken;
pub use generator::TokenGenerator;
