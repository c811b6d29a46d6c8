//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::admin::Admin;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Credential store
#[trait_variant::make(AdminRepository: Send)]
pub trait LocalAdminRepository {
    /// Find an administrator by (normalized) email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Admin>>;

    /// Insert an administrator, or replace the password hash of the one
    /// already holding this email. Returns the stored record.
    async fn upsert(&self, admin: &Admin) -> AuthResult<Admin>;
}
