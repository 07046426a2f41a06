use chrono::NaiveDate;
use sqlx::MySqlPool;

use super::{AttendanceStore, CredentialStore, ScheduleStore};
use crate::error::StoreError;
use crate::model::attendance::{AttendanceDay, AttendanceRecord, AttendanceStatus};
use crate::model::schedule::ScheduleEntry;
use crate::model::user::User;

/// Production backend. Each call checks a connection out of the pool for the
/// duration of the statement; checkout is scoped, so the connection goes back
/// on every exit path, errors included. Writes auto-commit.
#[derive(Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

impl CredentialStore for MySqlStore {
    async fn find_user(&self, username: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, role
            FROM users
            WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

impl ScheduleStore for MySqlStore {
    async fn add_entry(&self, date: NaiveDate, description: &str) -> Result<(), StoreError> {
        sqlx::query(r#"INSERT INTO jadwal (date, description) VALUES (?, ?)"#)
            .bind(date)
            .bind(description)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list_entries(&self) -> Result<Vec<ScheduleEntry>, StoreError> {
        let entries = sqlx::query_as::<_, ScheduleEntry>(
            r#"SELECT id, date, description FROM jadwal ORDER BY date"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }
}

impl AttendanceStore for MySqlStore {
    async fn record(
        &self,
        user_id: u64,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Result<(), StoreError> {
        sqlx::query(r#"INSERT INTO absensi (user_id, date, status) VALUES (?, ?, ?)"#)
            .bind(user_id)
            .bind(date)
            .bind(status)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn list_for_user(&self, user_id: u64) -> Result<Vec<AttendanceDay>, StoreError> {
        // No ORDER BY: the caller gets whatever order the table yields.
        let days = sqlx::query_as::<_, AttendanceDay>(
            r#"SELECT date, status FROM absensi WHERE user_id = ?"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(days)
    }

    async fn filter_by_date(&self, date: NaiveDate) -> Result<Vec<AttendanceRecord>, StoreError> {
        let records = sqlx::query_as::<_, AttendanceRecord>(
            r#"SELECT id, user_id, date, status FROM absensi WHERE date = ?"#,
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
