//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! statuses, RPC error frames, or any other protocol-specific envelope.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::{Ad, AdContentError, AdId, UserId};

/// Stable machine-readable error code describing the failure category.
///
/// Both inbound adapters serialise this code verbatim so clients see the
/// same vocabulary regardless of transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The referenced user does not exist.
    NoSuchUser,
    /// The referenced ad does not exist.
    NoSuchAd,
    /// The acting user does not own the ad.
    PermissionDenied,
    /// The ad content fails the board's validation rules.
    InvalidAd,
    /// An unexpected error occurred inside the domain.
    Unknown,
}

/// Failures raised by the board service.
///
/// The underlying stores only ever report a missing entity; the service
/// re-labels those by which store produced them, so adapters never see a
/// raw store error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoardError {
    /// No user is registered under this id.
    #[error("no user with id {user_id}")]
    NoSuchUser {
        /// The id that failed to resolve.
        user_id: UserId,
    },
    /// No ad is stored under this id.
    #[error("no ad with id {ad_id}")]
    NoSuchAd {
        /// The id that failed to resolve.
        ad_id: AdId,
    },
    /// The acting user is not the ad's author.
    #[error("user {user_id} may not modify ad {ad_id}")]
    PermissionDenied {
        /// The user attempting the mutation.
        user_id: UserId,
        /// The ad being mutated.
        ad_id: AdId,
    },
    /// The title/text pair violates the content rules.
    ///
    /// Carries the unsaved candidate record so callers can inspect what
    /// was rejected; nothing is persisted when this is returned.
    #[error("invalid ad content: {source}")]
    InvalidAd {
        /// The record that failed validation, never stored.
        candidate: Box<Ad>,
        /// The violated rule.
        source: AdContentError,
    },
    /// A store misbehaved in a way the service cannot classify.
    #[error("internal store failure: {message}")]
    Internal {
        /// Detail for the logs; never shown to clients verbatim.
        message: String,
    },
}

impl BoardError {
    /// Helper for [`BoardError::NoSuchUser`].
    pub const fn no_such_user(user_id: UserId) -> Self {
        Self::NoSuchUser { user_id }
    }

    /// Helper for [`BoardError::NoSuchAd`].
    pub const fn no_such_ad(ad_id: AdId) -> Self {
        Self::NoSuchAd { ad_id }
    }

    /// Helper for [`BoardError::PermissionDenied`].
    pub const fn permission_denied(user_id: UserId, ad_id: AdId) -> Self {
        Self::PermissionDenied { user_id, ad_id }
    }

    /// Helper for [`BoardError::InvalidAd`].
    pub fn invalid_ad(candidate: Ad, source: AdContentError) -> Self {
        Self::InvalidAd {
            candidate: Box::new(candidate),
            source,
        }
    }

    /// Helper for [`BoardError::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Stable machine-readable code for this failure.
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NoSuchUser { .. } => ErrorCode::NoSuchUser,
            Self::NoSuchAd { .. } => ErrorCode::NoSuchAd,
            Self::PermissionDenied { .. } => ErrorCode::PermissionDenied,
            Self::InvalidAd { .. } => ErrorCode::InvalidAd,
            Self::Internal { .. } => ErrorCode::Unknown,
        }
    }
}
