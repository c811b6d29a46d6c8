//! Admin Entity
//!
//! An administrator account. Accounts are provisioned out-of-band
//! (migration, seed, or the startup bootstrap); the HTTP API only reads them.

use kernel::id::AdminId;
use platform::password::HashedPassword;

use crate::domain::value_object::email::Email;

/// Administrator entity
#[derive(Debug, Clone)]
pub struct Admin {
    pub admin_id: AdminId,
    /// Unique login identifier
    pub email: Email,
    /// Argon2id PHC hash
    pub password_hash: HashedPassword,
}

impl Admin {
    pub fn new(email: Email, password_hash: HashedPassword) -> Self {
        Self {
            admin_id: AdminId::new(),
            email,
            password_hash,
        }
    }
}
