//! Ad data model and content validation.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::UserId;

/// Maximum number of characters accepted in an ad title.
pub const TITLE_MAX_CHARS: usize = 100;

/// Maximum number of characters accepted in an ad body.
pub const TEXT_MAX_CHARS: usize = 500;

/// Stable ad identifier assigned by the ad store.
///
/// Identifiers are allocated monotonically starting at zero and are never
/// reused, even after the ad is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdId(i64);

impl AdId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for AdId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for AdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A classified ad.
///
/// Ads start unpublished. `created_at` is set once when the ad is stored;
/// `updated_at` stays `None` until the first content update and is never
/// touched by publish/unpublish transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ad {
    /// Store-assigned identity.
    pub id: AdId,
    /// Short headline, subject to [`validate_content`].
    pub title: String,
    /// Body text, subject to [`validate_content`].
    pub text: String,
    /// Owning user; only the author may mutate or delete the ad.
    pub author: UserId,
    /// Visibility flag toggled by publish/unpublish.
    pub published: bool,
    /// Creation instant, UTC.
    pub created_at: DateTime<Utc>,
    /// Instant of the last content update, UTC.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Content rule violations raised by [`validate_content`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdContentError {
    /// Title is the empty string.
    #[error("ad title must not be empty")]
    EmptyTitle,
    /// Title exceeds [`TITLE_MAX_CHARS`].
    #[error("ad title must be at most {max} characters")]
    TitleTooLong { max: usize },
    /// Body is the empty string.
    #[error("ad text must not be empty")]
    EmptyText,
    /// Body exceeds [`TEXT_MAX_CHARS`].
    #[error("ad text must be at most {max} characters")]
    TextTooLong { max: usize },
}

impl AdContentError {
    /// Name of the offending field, for structured error details.
    pub const fn field(self) -> &'static str {
        match self {
            Self::EmptyTitle | Self::TitleTooLong { .. } => "title",
            Self::EmptyText | Self::TextTooLong { .. } => "text",
        }
    }
}

/// Check a title/text pair against the board's content rules.
///
/// Pure predicate: character counts only, no trimming or other
/// normalisation. A title of exactly [`TITLE_MAX_CHARS`] characters and a
/// body of exactly [`TEXT_MAX_CHARS`] characters are both valid.
///
/// # Examples
/// ```
/// use backend::domain::{AdContentError, validate_content};
///
/// assert!(validate_content("bicycle for sale", "barely used").is_ok());
/// assert_eq!(
///     validate_content("", "barely used"),
///     Err(AdContentError::EmptyTitle),
/// );
/// ```
pub fn validate_content(title: &str, text: &str) -> Result<(), AdContentError> {
    if title.is_empty() {
        return Err(AdContentError::EmptyTitle);
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(AdContentError::TitleTooLong {
            max: TITLE_MAX_CHARS,
        });
    }
    if text.is_empty() {
        return Err(AdContentError::EmptyText);
    }
    if text.chars().count() > TEXT_MAX_CHARS {
        return Err(AdContentError::TextTooLong {
            max: TEXT_MAX_CHARS,
        });
    }
    Ok(())
}
