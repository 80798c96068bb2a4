//! Board domain service.
//!
//! Business rules layered over two entity stores: existence, ownership,
//! and content validation are all enforced here before any mutation
//! reaches a store. The stores themselves are rule-free.

use std::sync::Arc;

use mockable::Clock;
use tracing::debug;

use crate::domain::ports::{
    AdsCommand, AdsQuery, EntityRepository, ListAdsFilter, UsersCommand, UsersQuery,
};
use crate::domain::{Ad, AdId, BoardError, User, UserId, validate_content};

/// Domain service implementing the driving ports over two stores.
///
/// Holds one store of ads and one of users, plus an injected clock so
/// tests control creation and update timestamps. The two stores are
/// independent: nothing here mutates both under one atomic section, and
/// the user-deletion cascade is a sequence of separate store transactions.
#[derive(Clone)]
pub struct BoardService<A, U> {
    ads: Arc<A>,
    users: Arc<U>,
    clock: Arc<dyn Clock>,
}

impl<A, U> BoardService<A, U> {
    /// Create a service over the given stores.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::{Ad, BoardService, User};
    /// use backend::outbound::memory::MemoryRepository;
    /// use mockable::DefaultClock;
    ///
    /// let service = BoardService::new(
    ///     Arc::new(MemoryRepository::<Ad>::new()),
    ///     Arc::new(MemoryRepository::<User>::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// let _ = service;
    /// ```
    pub fn new(ads: Arc<A>, users: Arc<U>, clock: Arc<dyn Clock>) -> Self {
        Self { ads, users, clock }
    }
}

impl<A, U> BoardService<A, U>
where
    A: EntityRepository<Ad>,
    U: EntityRepository<User>,
{
    fn require_user(&self, user_id: UserId) -> Result<(), BoardError> {
        if self.users.exists(user_id.get()) {
            Ok(())
        } else {
            Err(BoardError::no_such_user(user_id))
        }
    }

    fn fetch_ad(&self, ad_id: AdId) -> Result<Ad, BoardError> {
        self.ads
            .get(ad_id.get())
            .map_err(|_| BoardError::no_such_ad(ad_id))
    }

    /// Fetch an ad and enforce that `user_id` is its author.
    fn fetch_owned_ad(&self, ad_id: AdId, user_id: UserId) -> Result<Ad, BoardError> {
        let ad = self.fetch_ad(ad_id)?;
        if ad.author == user_id {
            Ok(ad)
        } else {
            Err(BoardError::permission_denied(user_id, ad_id))
        }
    }

    fn persist_ad(&self, ad: Ad) -> Result<Ad, BoardError> {
        self.ads
            .update(ad.id.get(), ad.clone())
            .map_err(|_| BoardError::no_such_ad(ad.id))?;
        Ok(ad)
    }
}

impl<A, U> AdsCommand for BoardService<A, U>
where
    A: EntityRepository<Ad>,
    U: EntityRepository<User>,
{
    fn create_ad(&self, title: &str, text: &str, author: UserId) -> Result<Ad, BoardError> {
        self.require_user(author)?;

        // Identity is allocated before validation, so a rejected candidate
        // still consumes an id.
        let candidate = Ad {
            id: AdId::new(self.ads.next_id()),
            title: title.to_owned(),
            text: text.to_owned(),
            author,
            published: false,
            created_at: self.clock.utc(),
            updated_at: None,
        };

        if let Err(source) = validate_content(title, text) {
            return Err(BoardError::invalid_ad(candidate, source));
        }

        self.ads
            .add(candidate.clone())
            .map_err(|err| BoardError::internal(err.to_string()))?;
        debug!(ad_id = %candidate.id, author = %author, "ad created");
        Ok(candidate)
    }

    fn change_ad_status(
        &self,
        ad_id: AdId,
        user_id: UserId,
        published: bool,
    ) -> Result<Ad, BoardError> {
        self.require_user(user_id)?;
        let mut ad = self.fetch_owned_ad(ad_id, user_id)?;

        ad.published = published;
        self.persist_ad(ad)
    }

    fn update_ad(
        &self,
        ad_id: AdId,
        user_id: UserId,
        title: &str,
        text: &str,
    ) -> Result<Ad, BoardError> {
        self.require_user(user_id)?;
        let mut ad = self.fetch_owned_ad(ad_id, user_id)?;

        if let Err(source) = validate_content(title, text) {
            return Err(BoardError::invalid_ad(ad, source));
        }

        ad.title = title.to_owned();
        ad.text = text.to_owned();
        ad.updated_at = Some(self.clock.utc());
        self.persist_ad(ad)
    }

    fn delete_ad(&self, ad_id: AdId, user_id: UserId) -> Result<(), BoardError> {
        self.require_user(user_id)?;
        let ad = self.fetch_owned_ad(ad_id, user_id)?;

        self.ads
            .delete(ad.id.get())
            .map_err(|_| BoardError::no_such_ad(ad_id))?;
        debug!(ad_id = %ad_id, user_id = %user_id, "ad deleted");
        Ok(())
    }
}

impl<A, U> AdsQuery for BoardService<A, U>
where
    A: EntityRepository<Ad>,
    U: EntityRepository<User>,
{
    fn ad(&self, ad_id: AdId) -> Result<Ad, BoardError> {
        self.fetch_ad(ad_id)
    }

    fn list_ads(&self, filter: &ListAdsFilter) -> Vec<Ad> {
        self.ads
            .snapshot()
            .into_iter()
            .filter(|ad| {
                ad.published == filter.published
                    && filter.author.is_none_or(|author| ad.author == author)
                    && filter.created_at.is_none_or(|instant| ad.created_at == instant)
            })
            .collect()
    }

    fn search_ads(&self, pattern: &str) -> Vec<Ad> {
        self.ads
            .snapshot()
            .into_iter()
            .filter(|ad| ad.title.contains(pattern))
            .collect()
    }
}

impl<A, U> UsersCommand for BoardService<A, U>
where
    A: EntityRepository<Ad>,
    U: EntityRepository<User>,
{
    fn create_user(&self, name: &str, email: &str) -> Result<User, BoardError> {
        let user = User {
            id: UserId::new(self.users.next_id()),
            name: name.to_owned(),
            email: email.to_owned(),
        };

        self.users
            .add(user.clone())
            .map_err(|err| BoardError::internal(err.to_string()))?;
        debug!(user_id = %user.id, "user created");
        Ok(user)
    }

    fn update_user(&self, user_id: UserId, name: &str, email: &str) -> Result<User, BoardError> {
        let mut user = self
            .users
            .get(user_id.get())
            .map_err(|_| BoardError::no_such_user(user_id))?;

        user.name = name.to_owned();
        user.email = email.to_owned();
        self.users
            .update(user_id.get(), user.clone())
            .map_err(|_| BoardError::no_such_user(user_id))?;
        Ok(user)
    }

    fn delete_user(&self, user_id: UserId) -> Result<(), BoardError> {
        // Cascade over the user's ads through the same path as delete_ad,
        // aborting on the first failure. Ads removed before an abort stay
        // removed: the cascade is not transactional.
        for ad in self.ads.snapshot() {
            if ad.author == user_id {
                self.delete_ad(ad.id, user_id)?;
            }
        }

        self.users
            .delete(user_id.get())
            .map_err(|_| BoardError::no_such_user(user_id))?;
        debug!(user_id = %user_id, "user deleted");
        Ok(())
    }
}

impl<A, U> UsersQuery for BoardService<A, U>
where
    A: EntityRepository<Ad>,
    U: EntityRepository<User>,
{
    fn user(&self, user_id: UserId) -> Result<User, BoardError> {
        self.users
            .get(user_id.get())
            .map_err(|_| BoardError::no_such_user(user_id))
    }
}

#[cfg(test)]
#[path = "board_service_tests.rs"]
mod tests;
