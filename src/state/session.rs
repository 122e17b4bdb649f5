//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built once at startup from durable storage and provided through context.
//! Login and logout are pure transitions returning a new `Session`; callers
//! persist the result explicitly.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::{USER_ID_KEY, USERNAME_KEY};
use crate::net::types::UserId;
use crate::util::storage::KeyValueStore;

/// Identity of the logged-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub id: UserId,
    pub username: String,
}

/// The client's belief about who, if anyone, is logged in. The id and the
/// name are present together or not at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<SessionUser>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn for_user(id: UserId, username: &str) -> Self {
        Self { user: Some(SessionUser { id, username: username.to_owned() }) }
    }

    /// Read the identity persisted under the fixed storage keys. Missing,
    /// partial, or unparsable entries load as anonymous.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let id = store.get(USER_ID_KEY).and_then(|raw| raw.trim().parse::<UserId>().ok());
        let username = store.get(USERNAME_KEY).filter(|name| !name.is_empty());
        match (id, username) {
            (Some(id), Some(username)) => Self { user: Some(SessionUser { id, username }) },
            _ => Self::anonymous(),
        }
    }

    /// Write the identity to `store`, or clear both keys when anonymous.
    pub fn persist(&self, store: &impl KeyValueStore) {
        match &self.user {
            Some(user) => {
                store.set(USER_ID_KEY, &user.id.to_string());
                store.set(USERNAME_KEY, &user.username);
            }
            None => {
                store.remove(USER_ID_KEY);
                store.remove(USERNAME_KEY);
            }
        }
    }

    #[must_use]
    pub fn login(self, user: SessionUser) -> Self {
        Self { user: Some(user) }
    }

    #[must_use]
    pub fn logout(self) -> Self {
        Self::anonymous()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user.as_ref().map(|u| u.id)
    }

    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// True when the logged-in user created the record owned by `owner`.
    pub fn owns(&self, owner: UserId) -> bool {
        self.user_id() == Some(owner)
    }

    /// Header greeting for the authenticated layout.
    pub fn welcome(&self) -> Option<String> {
        self.username().map(|name| format!("Welcome, {name}!"))
    }
}
