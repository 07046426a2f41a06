use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::attendance::AttendanceStatus;
use crate::model::role::Role;

#[derive(Deserialize)]
pub struct LoginReqDto {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: u64,
    pub username: String,
    pub role: Role,
}

#[derive(Deserialize)]
pub struct ScheduleReq {
    pub date: NaiveDate,
    pub description: String,
}

#[derive(Deserialize)]
pub struct AttendanceReq {
    pub status: AttendanceStatus,
}

#[derive(Deserialize)]
pub struct AttendanceFilter {
    pub date: NaiveDate,
}
