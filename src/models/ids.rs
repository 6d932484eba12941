//! Record identifiers
//!
//! A session's record carries a random ID so audit entries from one session
//! can be grouped together. Records are never stored, so IDs are only
//! generated, displayed and serialized.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Random per-session record ID, shown as `rec-` plus 8 hex digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let simple = self.0.simple().to_string();
        write!(f, "rec-{}", &simple[..8])
    }
}
