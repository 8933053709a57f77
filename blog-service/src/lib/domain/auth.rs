pub mod authenticator;
pub mod errors;
pub mod guard;
pub mod issuer;
pub mod models;
pub mod verifier;

pub use authenticator::LocalAuthenticator;
pub use guard::AccessGuard;
pub use issuer::TokenIssuer;
pub use verifier::TokenVerifier;
