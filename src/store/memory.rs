use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::RwLock;

use super::{AttendanceStore, CredentialStore, ScheduleStore};
use crate::error::StoreError;
use crate::model::attendance::{AttendanceDay, AttendanceRecord, AttendanceStatus};
use crate::model::schedule::ScheduleEntry;
use crate::model::user::User;

/// In-process backend with the same observable contract as [`super::MySqlStore`].
/// Clones share the underlying tables, so a test can keep a handle for
/// seeding while the app owns another.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Tables>>,
}

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    schedule: Vec<ScheduleEntry>,
    attendance: Vec<AttendanceRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a `users` row the way out-of-scope provisioning would, raw role
    /// string included. Returns the assigned id.
    pub fn add_user(&self, username: &str, password_hash: &str, role: &str) -> u64 {
        let mut tables = self.inner.write();
        let id = tables.users.len() as u64 + 1;
        tables.users.push(User {
            id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            role: role.to_string(),
        });
        id
    }
}

impl CredentialStore for MemoryStore {
    async fn find_user(&self, username: &str) -> Result<Option<User>, StoreError> {
        let tables = self.inner.read();
        Ok(tables
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }
}

impl ScheduleStore for MemoryStore {
    async fn add_entry(&self, date: NaiveDate, description: &str) -> Result<(), StoreError> {
        let mut tables = self.inner.write();
        let id = tables.schedule.len() as u64 + 1;
        tables.schedule.push(ScheduleEntry {
            id,
            date,
            description: description.to_string(),
        });
        Ok(())
    }

    async fn list_entries(&self) -> Result<Vec<ScheduleEntry>, StoreError> {
        let mut entries = self.inner.read().schedule.clone();
        // Stable sort: same-date entries keep insertion order.
        entries.sort_by_key(|e| e.date);
        Ok(entries)
    }
}

impl AttendanceStore for MemoryStore {
    async fn record(
        &self,
        user_id: u64,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Result<(), StoreError> {
        let mut tables = self.inner.write();
        let id = tables.attendance.len() as u64 + 1;
        tables.attendance.push(AttendanceRecord {
            id,
            user_id,
            date,
            status,
        });
        Ok(())
    }

    async fn list_for_user(&self, user_id: u64) -> Result<Vec<AttendanceDay>, StoreError> {
        Ok(self
            .inner
            .read()
            .attendance
            .iter()
            .filter(|r| r.user_id == user_id)
            .map(|r| AttendanceDay {
                date: r.date,
                status: r.status,
            })
            .collect())
    }

    async fn filter_by_date(&self, date: NaiveDate) -> Result<Vec<AttendanceRecord>, StoreError> {
        Ok(self
            .inner
            .read()
            .attendance
            .iter()
            .filter(|r| r.date == date)
            .cloned()
            .collect())
    }
}
