//! In-memory adapter for the `UserStore` port.

use std::path::Path;

use crate::ports::users::{User, UserLookup, UserStore};

/// User store double serving records from a fixed in-memory list.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: Vec<User>,
}

impl MemoryUserStore {
    /// Creates a store holding the given records.
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Loads user records from a YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_yaml_file(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read user fixture {}: {e}", path.display()))?;
        let users = serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse user fixture {}: {e}", path.display()))?;
        Ok(Self { users })
    }
}

impl UserStore for MemoryUserStore {
    fn find_by_name(&self, name: &str) -> UserLookup<'_> {
        let user = self.users.iter().find(|u| u.name == name).cloned();
        Box::pin(async move { Ok(user) })
    }
}
