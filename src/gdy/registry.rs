//! Per-run registry of documented environment names.

use std::collections::HashSet;

use crate::error::{DocError, Result};

/// Names of every environment documented so far in this run.
#[derive(Debug, Default)]
pub struct NameRegistry {
    names: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a name, failing if it has already been seen.
    pub fn register(&mut self, name: &str) -> Result<()> {
        if !self.names.insert(name.to_string()) {
            return Err(DocError::DuplicateName {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
