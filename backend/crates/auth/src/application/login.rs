//! Login Use Case
//!
//! Checks administrator credentials and issues a session token.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::token::{SessionClaims, TokenService};
use crate::domain::repository::AdminRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Signed session token for the cookie
    pub token: String,
    pub claims: SessionClaims,
}

/// Login use case
pub struct LoginUseCase<A>
where
    A: AdminRepository,
{
    admin_repo: Arc<A>,
    tokens: Arc<TokenService>,
}

impl<A> LoginUseCase<A>
where
    A: AdminRepository,
{
    pub fn new(admin_repo: Arc<A>, tokens: Arc<TokenService>) -> Self {
        Self { admin_repo, tokens }
    }

    /// Unknown email, malformed email and wrong password all end in
    /// [`AuthError::InvalidCredentials`].
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let admin = self
            .admin_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !admin.password_hash.is_well_formed() {
            tracing::error!(
                admin_id = %admin.admin_id,
                "Stored password hash is not an Argon2 PHC string"
            );
            return Err(AuthError::InvalidCredentials);
        }

        // Argon2 is CPU-bound; keep it off the async workers
        let password = ClearTextPassword::for_verification(input.password);
        let stored_hash = admin.password_hash.clone();
        let password_valid =
            tokio::task::spawn_blocking(move || stored_hash.verify(&password, None)).await?;

        if !password_valid {
            return Err(AuthError::InvalidCredentials);
        }

        let claims = SessionClaims {
            admin_id: admin.admin_id,
            email: admin.email.as_str().to_string(),
        };
        let token = self.tokens.issue(&claims)?;

        tracing::info!(admin_id = %admin.admin_id, "Administrator signed in");

        Ok(LoginOutput { token, claims })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::AuthConfig;
    use crate::domain::entity::admin::Admin;
    use crate::domain::repository::AdminRepository;
    use crate::infra::memory::InMemoryAdminRepository;
    use platform::password::HashedPassword;

    async fn setup() -> (LoginUseCase<InMemoryAdminRepository>, Arc<TokenService>, Admin) {
        let repo = InMemoryAdminRepository::new();
        let hash = ClearTextPassword::for_verification("Cobalt-Skies-1987".to_string())
            .hash(None)
            .unwrap();
        let admin = repo
            .upsert(&Admin::new(Email::new("curator@example.com").unwrap(), hash))
            .await
            .unwrap();

        let tokens = Arc::new(TokenService::new(&AuthConfig::development()).unwrap());
        (
            LoginUseCase::new(Arc::new(repo), tokens.clone()),
            tokens,
            admin,
        )
    }

    fn input(email: &str, password: &str) -> LoginInput {
        LoginInput {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_success_issues_verifiable_token() {
        let (use_case, tokens, admin) = setup().await;

        let output = use_case
            .execute(input("curator@example.com", "Cobalt-Skies-1987"))
            .await
            .unwrap();

        let claims = tokens.verify(&output.token).unwrap();
        assert_eq!(claims.admin_id, admin.admin_id);
        assert_eq!(claims.email, "curator@example.com");
        assert_eq!(claims, output.claims);
    }

    #[tokio::test]
    async fn test_login_normalizes_email() {
        let (use_case, _, _) = setup().await;
        let result = use_case
            .execute(input("  Curator@Example.com ", "Cobalt-Skies-1987"))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
        let (use_case, _, _) = setup().await;

        let wrong_password = use_case
            .execute(input("curator@example.com", "wrong-password"))
            .await
            .err()
            .unwrap();
        let unknown_email = use_case
            .execute(input("nobody@example.com", "Cobalt-Skies-1987"))
            .await
            .err()
            .unwrap();
        let malformed_email = use_case
            .execute(input("not-an-email", "Cobalt-Skies-1987"))
            .await
            .err()
            .unwrap();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
        assert!(matches!(malformed_email, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_unreadable_stored_hash_is_invalid_credentials() {
        let repo = InMemoryAdminRepository::new();
        let bcrypt = HashedPassword::from_stored(
            "$2b$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy",
        );
        repo.upsert(&Admin::new(Email::new("legacy@example.com").unwrap(), bcrypt))
            .await
            .unwrap();
        let tokens = Arc::new(TokenService::new(&AuthConfig::development()).unwrap());
        let use_case = LoginUseCase::new(Arc::new(repo), tokens);

        let err = use_case
            .execute(input("legacy@example.com", "Cobalt-Skies-1987"))
            .await
            .err()
            .unwrap();

        assert!(matches!(err, AuthError::InvalidCredentials));
    }
}
