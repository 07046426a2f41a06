use actix_web::{FromRequest, HttpRequest, dev::Payload, web::Data};
use futures::future::{Ready, ready};

use crate::auth::session::SessionManager;
use crate::error::AppError;
use crate::model::role::Role;

/// The identity behind the request's bearer token. Extracting this is what
/// separates the login prompt from the routed capability sets: no token or a
/// cleared token fails here with 401 before any handler runs.
pub struct AuthUser {
    pub user_id: u64,
    pub username: String,
    pub role: Role,
}

impl FromRequest for AuthUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let token = match req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
        {
            Some(t) => t,
            None => return ready(Err(AppError::Unauthorized.into())),
        };

        let sessions = match req.app_data::<Data<SessionManager>>() {
            Some(s) => s,
            None => {
                return ready(Err(actix_web::error::ErrorInternalServerError(
                    "Session manager missing",
                )));
            }
        };

        match sessions.get(token) {
            Some(identity) => ready(Ok(AuthUser {
                user_id: identity.user_id,
                username: identity.username,
                role: identity.role,
            })),
            None => ready(Err(AppError::Unauthorized.into())),
        }
    }
}

impl AuthUser {
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.role == Role::Admin {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }

    /// Regular-user operations are not reachable from an admin session.
    pub fn require_user(&self) -> Result<(), AppError> {
        if self.role == Role::User {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_guards_are_exclusive() {
        let admin = AuthUser {
            user_id: 1,
            username: "boss".into(),
            role: Role::Admin,
        };
        let user = AuthUser {
            user_id: 2,
            username: "alice".into(),
            role: Role::User,
        };

        assert!(admin.require_admin().is_ok());
        assert!(matches!(admin.require_user(), Err(AppError::Forbidden)));
        assert!(user.require_user().is_ok());
        assert!(matches!(user.require_admin(), Err(AppError::Forbidden)));
    }
}
