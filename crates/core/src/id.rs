//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;

/// Opaque product identifier (e.g. `p-101`).
///
/// Identifiers are immutable and compared as plain strings; the store attaches
/// no meaning to their shape. Seed data uses short hand-written ids, freshly
/// added products get a minted one via [`ProductId::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh identifier.
    ///
    /// Uses UUIDv7 (time-ordered) so generated ids sort by creation time.
    /// Prefer passing ids explicitly in tests for determinism.
    pub fn generate() -> Self {
        Self(format!("p-{}", Uuid::now_v7().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl FromStr for ProductId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(StoreError::invalid_id("ProductId: blank identifier"));
        }
        Ok(Self(s.to_string()))
    }
}
