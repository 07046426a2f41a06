use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Attendance status as submitted by a user for the current day.
/// Stored as the snake_case string in the `absensi.status` column.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    ExcusedLeave,
    Sick,
    Absent,
}

/// Full `absensi` row, as returned by the admin date filter.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AttendanceRecord {
    pub id: u64,
    pub user_id: u64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Projection a user sees of their own history: the day and what was
/// submitted for it. Row ids and the user id are not surfaced.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AttendanceDay {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_snake_case_names() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::ExcusedLeave).unwrap(),
            "\"excused_leave\""
        );
        assert_eq!(
            serde_json::from_str::<AttendanceStatus>("\"present\"").unwrap(),
            AttendanceStatus::Present
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<AttendanceStatus>("\"late\"").is_err());
    }
}
