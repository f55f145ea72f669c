//! User store port for looking up user records.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

/// Boxed future type alias used by [`UserStore`] to keep the trait dyn-compatible.
pub type UserLookup<'a> =
    Pin<Box<dyn Future<Output = Result<Option<User>, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// A user record held in the backing store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user name, also the lookup key.
    pub name: String,
    /// SSH public keys registered for this user.
    #[serde(default)]
    pub keys: Vec<String>,
}

/// Looks up user records in a backing store.
///
/// Abstracting the store allows tests to serve canned records without a
/// real backend.
pub trait UserStore: Send + Sync {
    /// Finds a user by name, resolving to `Ok(None)` when no record matches.
    ///
    /// # Errors
    ///
    /// The future resolves to an error if the backing store cannot be
    /// queried.
    fn find_by_name(&self, name: &str) -> UserLookup<'_>;
}
