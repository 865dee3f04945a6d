use serde::{Deserialize, Serialize};

/// Result of a read that degrades to an empty collection instead of failing.
/// `failure` records why the list is empty when the read did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftList<T> {
    pub items: Vec<T>,
    pub failure: Option<String>,
}

impl<T> SoftList<T> {
    pub fn loaded(items: Vec<T>) -> Self {
        Self { items, failure: None }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            failure: Some(reason.into()),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.failure.is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for SoftList<T> {
    fn default() -> Self {
        Self::loaded(Vec::new())
    }
}
