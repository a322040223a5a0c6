//! Credential Storage
//! Mission: Hold user accounts and check passwords

use crate::auth::models::User;
use crate::db::Database;
use anyhow::{Context, Result};
use bcrypt::{hash, verify, DEFAULT_COST};
use rusqlite::params;
use tracing::{info, warn};

/// Credential store backed by the shared database
pub struct UserStore {
    db: Database,
}

impl UserStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Seed the default account on first boot. No-op when any user exists.
    pub fn seed_default(&self, email: &str, password: &str) -> Result<()> {
        let conn = self.db.conn();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))
            .context("Failed to count users")?;
        if count > 0 {
            return Ok(());
        }

        let password_hash = hash(password, DEFAULT_COST).context("Failed to hash password")?;
        conn.execute(
            "INSERT INTO users (email, password_hash) VALUES (?1, ?2)",
            params![email, password_hash],
        )
        .context("Failed to insert default user")?;

        info!("🔐 Default user created ({})", email);
        warn!("⚠️  CHANGE DEFAULT PASSWORD IN PRODUCTION!");
        Ok(())
    }

    fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let conn = self.db.conn();

        let mut stmt =
            conn.prepare("SELECT id, email, password_hash FROM users WHERE email = ?1")?;

        let user = stmt.query_row(params![email], |row| {
            Ok(User {
                id: row.get(0)?,
                email: row.get(1)?,
                password_hash: row.get(2)?,
            })
        });

        match user {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Check credentials. Returns `None` for an unknown email and for a
    /// password mismatch alike, so the caller cannot tell which check failed.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>> {
        match self.get_by_email(email)? {
            Some(user) => {
                let valid =
                    verify(password, &user.password_hash).context("Failed to verify password")?;
                Ok(valid.then_some(user))
            }
            None => Ok(None),
        }
    }
}
