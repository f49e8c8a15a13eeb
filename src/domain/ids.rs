//! Resource identifier type
//!
//! FHIR logical ids are taken from the source document when present and
//! generated otherwise. The newtype keeps them distinct from arbitrary strings
//! and centralizes generation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Logical id of a built FHIR resource
///
/// # Examples
///
/// ```
/// use qrda_fhir::domain::ids::ResourceId;
/// use std::str::FromStr;
///
/// let id = ResourceId::from_str("12345").unwrap();
/// assert_eq!(id.as_str(), "12345");
/// assert_eq!(id.reference("Patient"), "Patient/12345");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    /// Creates a new ResourceId from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(ResourceId)` if the id is non-blank, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Resource ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Generates a fresh random (UUID v4) id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Uses the source value when present and valid, otherwise generates one
    pub fn from_source_or_generate(source: Option<&str>) -> Self {
        source
            .and_then(|s| Self::new(s).ok())
            .unwrap_or_else(Self::generate)
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Formats a FHIR literal reference, e.g. `Patient/123`
    pub fn reference(&self, resource_type: &str) -> String {
        format!("{}/{}", resource_type, self.0)
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ResourceId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
