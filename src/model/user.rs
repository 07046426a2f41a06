use serde::{Deserialize, Serialize};

/// Full `users` row. The role stays as the raw column value here; it is
/// parsed into [`crate::model::role::Role`] at login.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub password_hash: String,
    pub role: String,
}
