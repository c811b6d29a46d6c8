//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, NIST SP 800-63B length rules)
//! - Cookie serialization and parsing
//! - Secure random bytes

pub mod cookie;
pub mod crypto;
pub mod password;
