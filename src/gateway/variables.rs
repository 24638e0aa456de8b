//! In-memory variable store.

use std::collections::HashMap;

use crate::gateway::VariableStore;

/// Variable store backed by a `HashMap`, created fresh for every request.
#[derive(Debug, Clone, Default)]
pub struct MemoryVariableStore {
    vars: HashMap<String, String>,
}

impl MemoryVariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of variables currently set.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl VariableStore for MemoryVariableStore {
    fn get_var(&self, path: &str) -> Option<String> {
        self.vars.get(path).cloned()
    }

    fn set_var(&mut self, path: &str, value: &str) {
        self.vars.insert(path.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_overwrite() {
        let mut store = MemoryVariableStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get_var("var://service/transaction-id"), None);

        store.set_var("var://service/transaction-id", "legacy");
        store.set_var("var://service/transaction-id", "modern");

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get_var("var://service/transaction-id").as_deref(),
            Some("modern")
        );
    }
}
