use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Training-schedule row (`jadwal` table). Dates may repeat; descriptions
/// are free text.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ScheduleEntry {
    pub id: u64,
    pub date: NaiveDate,
    pub description: String,
}
