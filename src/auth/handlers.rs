use actix_web::{HttpRequest, HttpResponse, Responder, web};
use tracing::{debug, info, instrument, warn};

use crate::{
    auth::{
        password::verify_password,
        session::{Identity, SessionManager},
    },
    error::AppError,
    model::role::Role,
    models::{LoginReqDto, LoginResponse},
    store::CredentialStore,
};

/// Login handler. Unknown username, wrong password and an unrecognized
/// stored role all collapse into the same 401 so the response never reveals
/// which part failed.
#[instrument(
    name = "auth_login",
    skip(store, sessions, user),
    fields(username = %user.username)
)]
pub async fn login<S: CredentialStore>(
    user: web::Json<LoginReqDto>,
    store: web::Data<S>,
    sessions: web::Data<SessionManager>,
) -> Result<HttpResponse, AppError> {
    info!("Login request received");

    // Basic validation
    let username = user.username.trim();
    if username.is_empty() || user.password.is_empty() {
        info!("Validation failed: empty username or password");
        return Err(AppError::Validation(
            "Username or password required".to_string(),
        ));
    }

    // Fetch user
    debug!("Fetching user from store");
    let db_user = match store.find_user(username).await? {
        Some(u) => u,
        None => {
            info!("Invalid credentials: user not found");
            return Err(AppError::InvalidCredentials);
        }
    };

    // Verify password
    debug!("Verifying password");
    if let Err(e) = verify_password(&user.password, &db_user.password_hash) {
        info!(error = %e, "Invalid credentials: password mismatch");
        return Err(AppError::InvalidCredentials);
    }

    // A role value provisioning got wrong is a hard failure, not a fallback
    // to a regular-user session.
    let role = match Role::from_name(&db_user.role) {
        Some(r) => r,
        None => {
            warn!(role = %db_user.role, "Unrecognized role on user row");
            return Err(AppError::InvalidCredentials);
        }
    };

    let token = sessions.issue(Identity {
        user_id: db_user.id,
        username: db_user.username.clone(),
        role,
    });

    info!("Login successful");

    Ok(HttpResponse::Ok().json(LoginResponse {
        token,
        user_id: db_user.id,
        username: db_user.username,
        role,
    }))
}

/// Logout handler. Clears the presented session token; responds 204 whether
/// or not the token was live, so repeated logouts are harmless.
pub async fn logout(req: HttpRequest, sessions: web::Data<SessionManager>) -> impl Responder {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    if let Some(token) = token {
        if sessions.clear(token) {
            debug!("Session cleared");
        }
    }

    HttpResponse::NoContent().finish()
}
