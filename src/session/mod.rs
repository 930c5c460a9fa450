//! Session context resolution.
//!
//! Every page asks the API once, at load, who is logged in. Everything that needs a user id
//! (list loads, shopping list actions, scan submissions) waits on the answer and stays inert
//! when there is none.

pub mod profile;

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;

use crate::{
    api::{endpoint, ApiRequest, Transport},
    model::{id::UserId, user::CurrentUserDto},
};

pub use profile::fetch_profile;

/// Identity of the browser session for the lifetime of one page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionContext {
    /// The current-user request has not completed yet.
    #[default]
    Unresolved,
    /// Resolved: nobody is logged in, or the lookup failed.
    Anonymous,
    /// Resolved: the logged in user.
    Authenticated(UserId),
}

impl SessionContext {
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            SessionContext::Authenticated(user_id) => Some(*user_id),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, SessionContext::Unresolved)
    }

    /// Records the resolution for this page.
    ///
    /// Only the first resolution is kept; the session is never re-resolved mid-page.
    ///
    /// # Returns
    /// - `true` - The context moved out of [`SessionContext::Unresolved`]
    /// - `false` - The context was already resolved, or `resolved` is itself unresolved
    pub fn settle(&mut self, resolved: SessionContext) -> bool {
        if self.is_resolved() {
            tracing::warn!(
                "Ignoring session resolution {:?}; session already resolved as {:?}",
                resolved,
                self
            );
            return false;
        }

        if !resolved.is_resolved() {
            return false;
        }

        *self = resolved;
        true
    }
}

/// Asks the API for the logged in user.
///
/// Never fails: a missing user id, an error body, an unparsable body, and an unreachable API
/// are all logged and resolve to [`SessionContext::Anonymous`]. No retry is attempted.
pub async fn resolve_session<T: Transport>(transport: &T) -> SessionContext {
    let response = match transport.send(ApiRequest::get(endpoint::CURRENT_USER)).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Error fetching user ID: {}", e);
            return SessionContext::Anonymous;
        }
    };

    match response.parse::<CurrentUserDto>() {
        Ok(CurrentUserDto {
            user_id: Some(user_id),
        }) => {
            tracing::info!("User ID set: {}", user_id);
            SessionContext::Authenticated(user_id)
        }
        Ok(_) => {
            tracing::error!("User not logged in");
            SessionContext::Anonymous
        }
        Err(e) => {
            tracing::error!("Error fetching user ID: {}", e);
            SessionContext::Anonymous
        }
    }
}
