//! Category registry.
//!
//! # Responsibility
//! - Track every category label ever attached to a note.
//!
//! # Invariants
//! - Labels keep first-seen order and are never duplicated.
//! - The registry only grows; there is no removal operation, even when
//!   the last note using a label is deleted.

use serde::{Deserialize, Serialize};

/// Insertion-ordered, duplicate-free set of category labels.
///
/// Serializes as a plain string array, the shape already present in the
/// backing store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryRegistry {
    labels: Vec<String>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a label unless it is already present.
    ///
    /// Returns whether the registry grew; repeated calls with the same
    /// label are idempotent.
    pub fn register(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.contains(&label) {
            return false;
        }
        self.labels.push(label);
        true
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|known| known == label)
    }

    /// Labels in first-seen order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
