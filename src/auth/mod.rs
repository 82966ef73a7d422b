pub mod claims;
pub mod credentials;
mod dto;
pub mod extractors;
pub mod handlers;
pub mod jwt;

pub use credentials::{CredentialVerifier, FixedCredentials};
pub use extractors::AuthUser;
pub use jwt::JwtKeys;
