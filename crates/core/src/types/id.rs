//! Newtype IDs for type-safe entity references.
//!
//! Identifiers are canonically strings. [`PlantId`] additionally accepts
//! JSON numbers when deserializing, because older collection data stored
//! generated ids as raw millisecond timestamps and catalog ids as small
//! integers; both are canonicalized to their decimal string form on read.

use core::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a plant, in the catalog or in a personal collection.
///
/// Uniqueness holds within a single store only. A personal plant may share
/// an id with a catalog plant; lookups resolve the personal entry first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlantId(String);

impl PlantId {
    /// Create an ID from an existing string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh ID from the current time, as a decimal string of
    /// milliseconds since the Unix epoch.
    #[must_use]
    pub fn generate() -> Self {
        Self(chrono::Utc::now().timestamp_millis().to_string())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the ID and return its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PlantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for PlantId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl Serialize for PlantId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PlantId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = PlantId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a plant id as a string or integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<PlantId, E> {
                Ok(PlantId::new(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<PlantId, E> {
                Ok(PlantId::new(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<PlantId, E> {
                Ok(PlantId::new(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// Identifier of a registered user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create an ID from an existing string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the ID and return its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}
