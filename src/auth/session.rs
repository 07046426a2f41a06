use std::collections::HashMap;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::model::role::Role;

/// The authenticated (id, username, role) tuple held for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: u64,
    pub username: String,
    pub role: Role,
}

/// Token -> identity map for all live sessions. One instance is shared
/// through `web::Data` rather than living in a global, so each bearer token
/// is its own independent session. Sessions never expire on their own; they
/// end on logout or when the process does.
#[derive(Default)]
pub struct SessionManager {
    sessions: RwLock<HashMap<String, Identity>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs an identity under a fresh opaque token.
    pub fn issue(&self, identity: Identity) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions.write().insert(token.clone(), identity);
        token
    }

    pub fn get(&self, token: &str) -> Option<Identity> {
        self.sessions.read().get(token).cloned()
    }

    /// Ends a session. Idempotent; returns whether the token was live.
    pub fn clear(&self, token: &str) -> bool {
        self.sessions.write().remove(token).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(user_id: u64, role: Role) -> Identity {
        Identity {
            user_id,
            username: format!("user{user_id}"),
            role,
        }
    }

    #[test]
    fn issued_token_resolves_to_identity() {
        let sessions = SessionManager::new();
        let token = sessions.issue(identity(1, Role::User));
        assert_eq!(sessions.get(&token), Some(identity(1, Role::User)));
    }

    #[test]
    fn unknown_token_is_anonymous() {
        let sessions = SessionManager::new();
        assert_eq!(sessions.get("not-a-token"), None);
    }

    #[test]
    fn clear_returns_session_to_anonymous() {
        let sessions = SessionManager::new();
        let token = sessions.issue(identity(2, Role::Admin));
        assert!(sessions.clear(&token));
        assert_eq!(sessions.get(&token), None);
        // Clearing again is a no-op.
        assert!(!sessions.clear(&token));
    }

    #[test]
    fn sessions_are_independent() {
        let sessions = SessionManager::new();
        let admin = sessions.issue(identity(1, Role::Admin));
        let user = sessions.issue(identity(2, Role::User));
        assert_ne!(admin, user);

        sessions.clear(&user);
        assert_eq!(sessions.get(&admin), Some(identity(1, Role::Admin)));
        assert_eq!(sessions.get(&user), None);
    }
}
