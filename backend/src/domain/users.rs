//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable user identifier assigned by the user store.
///
/// Identifiers are allocated monotonically starting at zero and are never
/// reused, even after the user is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::UserId;
    ///
    /// let id = UserId::new(7);
    /// assert_eq!(id.get(), 7);
    /// ```
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered board user.
///
/// Beyond identity uniqueness the user record carries no invariants; name
/// and email are stored as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identity.
    pub id: UserId,
    /// Display name shown alongside the user's ads.
    pub name: String,
    /// Contact email.
    pub email: String,
}
