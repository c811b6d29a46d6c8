//! Admin Bootstrap Use Case
//!
//! Provisions (or re-keys) an administrator from deployment configuration.
//! This is the only write path for administrator records.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::domain::entity::admin::Admin;
use crate::domain::repository::AdminRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

pub struct BootstrapAdminUseCase<A>
where
    A: AdminRepository,
{
    admin_repo: Arc<A>,
}

impl<A> BootstrapAdminUseCase<A>
where
    A: AdminRepository,
{
    pub fn new(admin_repo: Arc<A>) -> Self {
        Self { admin_repo }
    }

    /// Upsert the administrator. The password must satisfy the platform
    /// password policy.
    pub async fn execute(&self, email: &str, password: String) -> AuthResult<Admin> {
        let email = Email::new(email)?;
        let password =
            ClearTextPassword::new(password).map_err(|e| AuthError::Validation(e.to_string()))?;

        let password_hash = tokio::task::spawn_blocking(move || password.hash(None))
            .await?
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let admin = self
            .admin_repo
            .upsert(&Admin::new(email, password_hash))
            .await?;

        tracing::info!(admin_id = %admin.admin_id, email = %admin.email, "Administrator provisioned");

        Ok(admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryAdminRepository;

    #[tokio::test]
    async fn test_bootstrap_creates_admin() {
        let repo = Arc::new(InMemoryAdminRepository::new());
        let use_case = BootstrapAdminUseCase::new(repo.clone());

        let admin = use_case
            .execute("Curator@Example.com", "Cobalt-Skies-1987".to_string())
            .await
            .unwrap();

        let stored = repo
            .find_by_email(&Email::new("curator@example.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.admin_id, admin.admin_id);
    }

    #[tokio::test]
    async fn test_bootstrap_rekeys_existing_admin() {
        let repo = Arc::new(InMemoryAdminRepository::new());
        let use_case = BootstrapAdminUseCase::new(repo.clone());

        let first = use_case
            .execute("curator@example.com", "Cobalt-Skies-1987".to_string())
            .await
            .unwrap();
        let second = use_case
            .execute("curator@example.com", "Vermilion-Dawn-2001".to_string())
            .await
            .unwrap();

        assert_eq!(first.admin_id, second.admin_id);
        let new_password = ClearTextPassword::for_verification("Vermilion-Dawn-2001".to_string());
        assert!(second.password_hash.verify(&new_password, None));
    }

    #[tokio::test]
    async fn test_bootstrap_rejects_weak_password() {
        let use_case = BootstrapAdminUseCase::new(Arc::new(InMemoryAdminRepository::new()));
        let result = use_case
            .execute("curator@example.com", "password123".to_string())
            .await;
        assert!(matches!(result, Err(AuthError::Validation(_))));
    }

    #[tokio::test]
    async fn test_bootstrap_rejects_bad_email() {
        let use_case = BootstrapAdminUseCase::new(Arc::new(InMemoryAdminRepository::new()));
        let result = use_case
            .execute("curator", "Cobalt-Skies-1987".to_string())
            .await;
        assert!(matches!(result, Err(AuthError::Validation(_))));
    }
}
