pub mod company;
pub mod email;
pub mod token;
pub mod user;
pub mod validation;
