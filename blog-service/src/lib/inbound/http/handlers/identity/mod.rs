use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::identity::models::Identity;

mod login;
mod logout;
mod me;
mod sign_up;

pub use login::login;
pub use login::LoginRequestBody;
pub use login::LoginResponseData;
pub use logout::logout;
pub use me::me;
pub use sign_up::sign_up;
pub use sign_up::SignUpRequestBody;

/// Public view of an identity. Never carries the credential hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityData {
    pub id: String,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub is_author: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Identity> for IdentityData {
    fn from(identity: &Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            username: identity.username.as_str().to_string(),
            firstname: identity.firstname.as_str().to_string(),
            lastname: identity.lastname.as_str().to_string(),
            is_author: identity.is_author,
            created_at: identity.created_at,
        }
    }
}
