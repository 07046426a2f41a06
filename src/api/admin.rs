use actix_web::HttpResponse;
use serde_json::json;

use crate::auth::auth::AuthUser;
use crate::error::AppError;

/// Static liveness signal. Answering at all is the whole check; nothing is
/// probed behind it.
pub async fn monitor(auth: AuthUser) -> Result<HttpResponse, AppError> {
    auth.require_admin()?;

    Ok(HttpResponse::Ok().json(json!({
        "status": "server active"
    })))
}

/// Backup and restore run on the database hosting side; this service only
/// points the admin there.
pub async fn backup_info(auth: AuthUser) -> Result<HttpResponse, AppError> {
    auth.require_admin()?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Backup and restore are handled by the database hosting provider"
    })))
}
