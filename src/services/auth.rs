//! Register, login, and logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::EventApi;
use crate::net::error::{ClientError, ClientResult};
use crate::net::transport::Transport;
use crate::net::types::{LoginRequest, RegisterRequest};
use crate::state::session::{Session, SessionUser};
use crate::util::storage::KeyValueStore;

/// Result of a complete login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginOutcome {
    pub session: Session,
    /// Backend confirmation text.
    pub message: String,
}

/// Create an account. Returns the backend's confirmation text.
///
/// # Errors
///
/// Transport failure or backend rejection (duplicate user, missing fields).
pub async fn register<T: Transport>(
    api: &EventApi<T>,
    username: &str,
    email: &str,
    password: &str,
) -> ClientResult<String> {
    let request = RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    };
    api.register(&request).await
}

/// Authenticate, then resolve the username to its user id and persist the
/// new session.
///
/// # Errors
///
/// Backend rejection or transport failure of either request. When the
/// credentials are accepted but the lookup yields no user, returns
/// [`ClientError::IdentityUnresolved`] and nothing is persisted.
pub async fn login<T: Transport>(
    api: &EventApi<T>,
    store: &impl KeyValueStore,
    session: Session,
    username: &str,
    password: &str,
) -> ClientResult<LoginOutcome> {
    let request = LoginRequest { username: username.to_owned(), password: password.to_owned() };
    let message = api.login(&request).await?;
    let user = resolve_identity(api, username).await?;
    let session = session.login(user);
    session.persist(store);
    Ok(LoginOutcome { session, message })
}

async fn resolve_identity<T: Transport>(api: &EventApi<T>, username: &str) -> ClientResult<SessionUser> {
    match api.find_users(username).await {
        Ok(rows) => rows
            .into_iter()
            .next()
            .map(|row| SessionUser { id: row.id, username: username.to_owned() })
            .ok_or(ClientError::IdentityUnresolved),
        Err(ClientError::Network(e)) => Err(ClientError::Network(e)),
        Err(e) => {
            leptos::logging::warn!("user lookup for {username} failed: {e}");
            Err(ClientError::IdentityUnresolved)
        }
    }
}

/// Drop the identity from memory and durable storage. Never fails.
pub fn logout(store: &impl KeyValueStore, session: Session) -> Session {
    let session = session.logout();
    session.persist(store);
    session
}
