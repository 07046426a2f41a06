//! Persistence contract for the three tables the service owns, plus the two
//! backends that satisfy it: MySQL for deployments, an in-process store for
//! the HTTP test harness and local hacking.

use chrono::NaiveDate;

use crate::error::StoreError;
use crate::model::attendance::{AttendanceDay, AttendanceRecord, AttendanceStatus};
use crate::model::schedule::ScheduleEntry;
use crate::model::user::User;

mod memory;
mod mysql;

pub use memory::MemoryStore;
pub use mysql::MySqlStore;

/// Read-only access to `users`. Provisioning and deletion happen outside
/// this service, directly against the table.
#[allow(async_fn_in_trait)]
pub trait CredentialStore: Send + Sync + 'static {
    async fn find_user(&self, username: &str) -> Result<Option<User>, StoreError>;
}

/// `jadwal` access. Entries are only ever inserted and listed.
#[allow(async_fn_in_trait)]
pub trait ScheduleStore: Send + Sync + 'static {
    async fn add_entry(&self, date: NaiveDate, description: &str) -> Result<(), StoreError>;

    /// All entries, ascending by date regardless of insertion order.
    async fn list_entries(&self) -> Result<Vec<ScheduleEntry>, StoreError>;
}

/// `absensi` access. Rows accumulate: there is no uniqueness per
/// (user, date), no update and no delete.
#[allow(async_fn_in_trait)]
pub trait AttendanceStore: Send + Sync + 'static {
    async fn record(
        &self,
        user_id: u64,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Result<(), StoreError>;

    /// A user's own rows. Order is whatever the backend returns.
    async fn list_for_user(&self, user_id: u64) -> Result<Vec<AttendanceDay>, StoreError>;

    /// Every row for an exact date, across all users.
    async fn filter_by_date(&self, date: NaiveDate) -> Result<Vec<AttendanceRecord>, StoreError>;
}

/// Everything the route table needs from a backend.
pub trait Store: CredentialStore + ScheduleStore + AttendanceStore {}

impl<T: CredentialStore + ScheduleStore + AttendanceStore> Store for T {}
