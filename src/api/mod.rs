//! Lookup helpers built on the `UserStore` port.

use crate::ports::users::{User, UserStore};

/// Fetches a user by name, turning a missing record into a not-found error.
///
/// # Errors
///
/// Returns `user <name> not found` when the store has no matching record;
/// any other store failure is passed through unchanged.
pub async fn get_user(
    store: &dyn UserStore,
    name: &str,
) -> Result<User, Box<dyn std::error::Error + Send + Sync>> {
    match store.find_by_name(name).await? {
        Some(user) => Ok(user),
        None => Err(format!("user {name} not found").into()),
    }
}
