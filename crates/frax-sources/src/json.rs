//! JSON file roster source.
//!
//! Reads a JSON array of user records once at construction:
//!
//! ```json
//! [
//!   {
//!     "id": "1",
//!     "given_name": "Nora",
//!     "family_name": "Vidal",
//!     "fractions": [ { "numerator": 1, "denominator": 2 }, null ]
//!   }
//! ]
//! ```
//!
//! Absent fraction entries are JSON `null`s; a missing `fractions` key is
//! an empty list. Document order is the iteration order.

use crate::UserSource;
use frax_core::User;
use std::path::Path;

/// Roster backed by a JSON document on disk.
#[derive(Debug)]
pub struct JsonSource {
    users: Vec<User>,
}

/// Failure while opening or decoding a roster document.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read roster file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed roster document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl JsonSource {
    /// Load the document at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let users: Vec<User> = serde_json::from_str(&raw)?;
        tracing::debug!(count = users.len(), path = %path.display(), "loaded roster");
        Ok(Self { users })
    }
}

impl UserSource for JsonSource {
    fn find_all(&self) -> Box<dyn Iterator<Item = User> + '_> {
        Box::new(self.users.iter().cloned())
    }
}
