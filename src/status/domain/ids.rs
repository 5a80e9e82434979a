//! Identifier and validated scalar types for the status domain.

use super::StatusDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardId(Uuid);

impl BoardId {
    /// Creates a new random board identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a board identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for BoardId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a status column.
///
/// Identifiers minted by an edit session for newly added statuses are
/// provisional; the status source assigns the persisted identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusId(Uuid);

impl StatusId {
    /// Creates a new random status identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a status identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for StatusId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for StatusId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for StatusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trimmed, non-empty status display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusName(String);

impl StatusName {
    /// Creates a validated status name.
    ///
    /// # Errors
    ///
    /// Returns [`StatusDomainError::EmptyName`] when the value is blank after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, StatusDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(StatusDomainError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Creates a validated status name no longer than `max_chars`.
    ///
    /// # Errors
    ///
    /// Returns [`StatusDomainError::EmptyName`] for blank values or
    /// [`StatusDomainError::NameTooLong`] when the trimmed name exceeds the
    /// limit.
    pub fn bounded(value: impl Into<String>, max_chars: usize) -> Result<Self, StatusDomainError> {
        let name = Self::new(value)?;
        let actual = name.0.chars().count();
        if actual > max_chars {
            return Err(StatusDomainError::NameTooLong {
                max: max_chars,
                actual,
            });
        }
        Ok(name)
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StatusName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StatusName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// CSS hex color in `#rgb` or `#rrggbb` form, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusColor(String);

impl StatusColor {
    /// Creates a validated color.
    ///
    /// # Errors
    ///
    /// Returns [`StatusDomainError::InvalidColor`] when the value is not a
    /// three- or six-digit hex color prefixed with `#`.
    pub fn new(value: impl Into<String>) -> Result<Self, StatusDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();
        let is_valid = normalized
            .strip_prefix('#')
            .is_some_and(|digits| {
                matches!(digits.len(), 3 | 6) && digits.chars().all(|ch| ch.is_ascii_hexdigit())
            });

        if !is_valid {
            return Err(StatusDomainError::InvalidColor(raw));
        }
        Ok(Self(normalized))
    }

    /// Returns the color as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StatusColor {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for StatusColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
