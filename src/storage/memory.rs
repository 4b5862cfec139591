//! In-memory token store.
//!
//! For hosts without a filesystem (a browser shim bridging to its own
//! storage, a test harness). Nothing survives the process; the trait
//! contract is otherwise identical to the file-backed store.

use crate::domain::error::Result;
use crate::storage::backend::TokenStore;

/// Process-local token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Option<String>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { token: None }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Result<Option<String>> {
        Ok(self.token.clone())
    }

    fn set(&mut self, token: &str) -> Result<()> {
        self.token = Some(token.to_string());
        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        self.token = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_cycle() {
        let mut store = MemoryTokenStore::new();
        assert_eq!(store.get().expect("get"), None);
        store.set("tok").expect("set");
        assert_eq!(store.get().expect("get"), Some("tok".to_string()));
        store.remove().expect("remove");
        assert_eq!(store.get().expect("get"), None);
    }
}
