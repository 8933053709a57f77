use crate::domain::auth::models::AuthContext;
use crate::domain::auth::models::AuthResult;
use crate::domain::auth::models::Denial;
use crate::domain::auth::models::RequiredRole;
use crate::domain::auth::verifier::TokenVerifier;
use crate::domain::identity::ports::CredentialStore;

/// Allow/deny decision consulted before every protected operation.
///
/// Absent token: 401 `missing_credentials`. Rejected token: 401 with the
/// rejection reason. Verified identity without the required role: 401
/// `not_authorized`. Store failure: 500 `internal_error`.
pub struct AccessGuard<CS>
where
    CS: CredentialStore + ?Sized,
{
    verifier: TokenVerifier<CS>,
}

impl<CS> AccessGuard<CS>
where
    CS: CredentialStore + ?Sized,
{
    pub fn new(verifier: TokenVerifier<CS>) -> Self {
        Self { verifier }
    }

    pub async fn authorize(
        &self,
        token: Option<&str>,
        required_role: RequiredRole,
    ) -> Result<AuthContext, Denial> {
        let Some(token) = token else {
            tracing::warn!(reason = "missing_credentials", "Access denied");
            return Err(Denial::missing_credentials());
        };

        let identity = match self.verifier.verify(token).await {
            Ok(AuthResult::Authenticated(identity)) => identity,
            Ok(AuthResult::Rejected(reason)) => {
                tracing::warn!(reason = %reason, "Access denied");
                return Err(Denial::rejected(reason));
            }
            Err(e) => {
                tracing::error!(error = %e, "Access check failed");
                return Err(Denial::internal_error());
            }
        };

        if !required_role.is_satisfied_by(&identity) {
            tracing::warn!(
                identity_id = %identity.id,
                required_role = ?required_role,
                reason = "not_authorized",
                "Access denied"
            );
            return Err(Denial::not_authorized());
        }

        Ok(AuthContext::new(identity))
    }
}
