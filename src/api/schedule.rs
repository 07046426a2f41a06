use actix_web::{HttpResponse, web};
use serde_json::json;
use tracing::debug;

use crate::auth::auth::AuthUser;
use crate::error::AppError;
use crate::models::ScheduleReq;
use crate::store::ScheduleStore;

/// Training schedule, ascending by date. Both roles read the same list.
pub async fn list_schedule<S: ScheduleStore>(
    _auth: AuthUser,
    store: web::Data<S>,
) -> Result<HttpResponse, AppError> {
    let entries = store.list_entries().await?;

    Ok(HttpResponse::Ok().json(entries))
}

/// Admin only. No check that the date is unique or in the future; the
/// schedule takes whatever the admin submits.
pub async fn add_schedule<S: ScheduleStore>(
    auth: AuthUser,
    store: web::Data<S>,
    payload: web::Json<ScheduleReq>,
) -> Result<HttpResponse, AppError> {
    auth.require_admin()?;

    store.add_entry(payload.date, &payload.description).await?;
    debug!(date = %payload.date, "Schedule entry saved");

    Ok(HttpResponse::Ok().json(json!({
        "message": "Schedule entry saved"
    })))
}
