//! In-Memory Repository Implementation
//!
//! Backs tests and local experiments without a database.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::admin::Admin;
use crate::domain::repository::AdminRepository;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Credential store keyed by normalized email
#[derive(Clone, Default)]
pub struct InMemoryAdminRepository {
    admins: Arc<RwLock<HashMap<String, Admin>>>,
}

impl InMemoryAdminRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AdminRepository for InMemoryAdminRepository {
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Admin>> {
        Ok(self.admins.read().await.get(email.as_str()).cloned())
    }

    async fn upsert(&self, admin: &Admin) -> AuthResult<Admin> {
        let mut admins = self.admins.write().await;
        let stored = admins
            .entry(admin.email.as_str().to_string())
            .and_modify(|existing| existing.password_hash = admin.password_hash.clone())
            .or_insert_with(|| admin.clone());
        Ok(stored.clone())
    }
}
