use actix_web::{HttpResponse, web};
use chrono::Local;
use serde_json::json;
use tracing::info;

use crate::auth::auth::AuthUser;
use crate::error::AppError;
use crate::models::{AttendanceFilter, AttendanceReq};
use crate::store::AttendanceStore;

/// Save today's attendance for the calling user. Submitting twice on the
/// same day inserts a second row; nothing dedups per (user, date).
pub async fn record_attendance<S: AttendanceStore>(
    auth: AuthUser,
    store: web::Data<S>,
    payload: web::Json<AttendanceReq>,
) -> Result<HttpResponse, AppError> {
    auth.require_user()?;

    let today = Local::now().date_naive();
    store.record(auth.user_id, today, payload.status).await?;

    info!(user_id = auth.user_id, status = ?payload.status, "Attendance saved");

    Ok(HttpResponse::Ok().json(json!({
        "message": "Attendance saved"
    })))
}

/// The calling user's own history as (date, status) pairs.
pub async fn list_own_attendance<S: AttendanceStore>(
    auth: AuthUser,
    store: web::Data<S>,
) -> Result<HttpResponse, AppError> {
    auth.require_user()?;

    let days = store.list_for_user(auth.user_id).await?;

    Ok(HttpResponse::Ok().json(days))
}

/// Admin cross-user query: every row whose date matches exactly.
pub async fn filter_attendance<S: AttendanceStore>(
    auth: AuthUser,
    store: web::Data<S>,
    query: web::Query<AttendanceFilter>,
) -> Result<HttpResponse, AppError> {
    auth.require_admin()?;

    let records = store.filter_by_date(query.date).await?;

    Ok(HttpResponse::Ok().json(records))
}

/// Placeholder. Document export has a menu entry but no implementation yet.
pub async fn export_attendance(auth: AuthUser) -> Result<HttpResponse, AppError> {
    auth.require_user()?;

    Ok(HttpResponse::NotImplemented().json(json!({
        "message": "Attendance export is not available yet"
    })))
}
