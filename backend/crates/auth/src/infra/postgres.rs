//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::AdminId;
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::admin::Admin;
use crate::domain::repository::AdminRepository;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// PostgreSQL-backed credential store
#[derive(Clone)]
pub struct PgAdminRepository {
    pool: PgPool,
}

impl PgAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Admin Repository Implementation
// ============================================================================

impl AdminRepository for PgAdminRepository {
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Admin>> {
        let row = sqlx::query_as::<_, AdminRow>(
            r#"
            SELECT
                admin_id,
                email,
                password_hash,
                created_at,
                updated_at
            FROM admins
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AdminRow::into_admin))
    }

    async fn upsert(&self, admin: &Admin) -> AuthResult<Admin> {
        let row = sqlx::query_as::<_, AdminRow>(
            r#"
            INSERT INTO admins (admin_id, email, password_hash)
            VALUES ($1, $2, $3)
            ON CONFLICT (email) DO UPDATE
            SET password_hash = EXCLUDED.password_hash,
                updated_at = now()
            RETURNING
                admin_id,
                email,
                password_hash,
                created_at,
                updated_at
            "#,
        )
        .bind(admin.admin_id.as_uuid())
        .bind(admin.email.as_str())
        .bind(admin.password_hash.as_phc_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_admin())
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct AdminRow {
    admin_id: Uuid,
    email: String,
    password_hash: String,
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
    #[allow(dead_code)]
    updated_at: DateTime<Utc>,
}

impl AdminRow {
    fn into_admin(self) -> Admin {
        Admin {
            admin_id: AdminId::from_uuid(self.admin_id),
            email: Email::from_db(self.email),
            password_hash: HashedPassword::from_stored(self.password_hash),
        }
    }
}
