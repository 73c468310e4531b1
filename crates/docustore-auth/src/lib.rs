//! Authentication for Docustore: Argon2id password hashing, JWT access
//! tokens, and database-backed session lifecycle.

pub mod jwt;
pub mod password;
pub mod session;

pub use jwt::claims::Claims;
pub use jwt::decoder::JwtDecoder;
pub use jwt::encoder::JwtEncoder;
pub use password::hasher::PasswordHasher;
pub use session::manager::SessionManager;
