//! Driving ports for ad commands and queries.
//!
//! Inbound adapters depend on these traits (as `Arc<dyn …>`) rather than on
//! the service type, so transport code stays testable without wiring real
//! stores. Error precedence is part of the contract: implementations check
//! user existence before ad existence before ownership before content.

use chrono::{DateTime, Utc};

use crate::domain::{Ad, AdId, BoardError, UserId};

/// Predicate bundle for [`AdsQuery::list_ads`].
///
/// `published` always filters; `author` and `created_at` only filter when
/// present. The creation-time filter is an exact match, not a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListAdsFilter {
    /// Match ads with exactly this published flag.
    pub published: bool,
    /// When set, match only ads authored by this user.
    pub author: Option<UserId>,
    /// When set, match only ads created at exactly this instant.
    pub created_at: Option<DateTime<Utc>>,
}

/// Mutating ad operations.
#[cfg_attr(test, mockall::automock)]
pub trait AdsCommand: Send + Sync {
    /// Create an unpublished ad owned by `author`.
    ///
    /// Fails `NoSuchUser` when the author is unknown and `InvalidAd` when
    /// the content violates the board's rules; the `InvalidAd` failure
    /// carries the unsaved candidate record.
    fn create_ad(&self, title: &str, text: &str, author: UserId) -> Result<Ad, BoardError>;

    /// Publish or unpublish an ad. Idempotent in both directions; never
    /// touches the update timestamp.
    fn change_ad_status(
        &self,
        ad_id: AdId,
        user_id: UserId,
        published: bool,
    ) -> Result<Ad, BoardError>;

    /// Replace an ad's title and text, stamping the update timestamp.
    fn update_ad(
        &self,
        ad_id: AdId,
        user_id: UserId,
        title: &str,
        text: &str,
    ) -> Result<Ad, BoardError>;

    /// Remove an ad permanently.
    fn delete_ad(&self, ad_id: AdId, user_id: UserId) -> Result<(), BoardError>;
}

/// Read-only ad operations. Reads are public: no ownership checks.
#[cfg_attr(test, mockall::automock)]
pub trait AdsQuery: Send + Sync {
    /// Fetch one ad by id.
    fn ad(&self, ad_id: AdId) -> Result<Ad, BoardError>;

    /// All ads matching the filter. Never fails.
    fn list_ads(&self, filter: &ListAdsFilter) -> Vec<Ad>;

    /// All ads whose title contains `pattern` as a case-sensitive
    /// substring. Never fails.
    fn search_ads(&self, pattern: &str) -> Vec<Ad>;
}

/// Canned ad used by the fixture implementations below.
fn fixture_ad(ad_id: AdId, author: UserId) -> Ad {
    Ad {
        id: ad_id,
        title: "fixture ad".to_owned(),
        text: "fixture ad text".to_owned(),
        author,
        published: false,
        created_at: DateTime::UNIX_EPOCH,
        updated_at: None,
    }
}

/// Fixture implementation for adapter tests and doc examples.
///
/// Echoes back canned records without touching any store.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAdsCommand;

impl AdsCommand for FixtureAdsCommand {
    fn create_ad(&self, title: &str, text: &str, author: UserId) -> Result<Ad, BoardError> {
        let mut ad = fixture_ad(AdId::new(0), author);
        ad.title = title.to_owned();
        ad.text = text.to_owned();
        Ok(ad)
    }

    fn change_ad_status(
        &self,
        ad_id: AdId,
        user_id: UserId,
        published: bool,
    ) -> Result<Ad, BoardError> {
        let mut ad = fixture_ad(ad_id, user_id);
        ad.published = published;
        Ok(ad)
    }

    fn update_ad(
        &self,
        ad_id: AdId,
        user_id: UserId,
        title: &str,
        text: &str,
    ) -> Result<Ad, BoardError> {
        let mut ad = fixture_ad(ad_id, user_id);
        ad.title = title.to_owned();
        ad.text = text.to_owned();
        ad.updated_at = Some(DateTime::UNIX_EPOCH);
        Ok(ad)
    }

    fn delete_ad(&self, _ad_id: AdId, _user_id: UserId) -> Result<(), BoardError> {
        Ok(())
    }
}

/// Fixture implementation for adapter tests and doc examples.
///
/// Returns a canned ad for lookups and empty result sets for listings.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAdsQuery;

impl AdsQuery for FixtureAdsQuery {
    fn ad(&self, ad_id: AdId) -> Result<Ad, BoardError> {
        Ok(fixture_ad(ad_id, UserId::new(0)))
    }

    fn list_ads(&self, _filter: &ListAdsFilter) -> Vec<Ad> {
        Vec::new()
    }

    fn search_ads(&self, _pattern: &str) -> Vec<Ad> {
        Vec::new()
    }
}
