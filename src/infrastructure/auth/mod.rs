mod jwt_token_service;
mod sha256_password_hasher;

pub use jwt_token_service::JwtTokenService;
pub use sha256_password_hasher::Sha256PasswordHasher;
