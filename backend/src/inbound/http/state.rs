//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend
//! only on the domain's driving ports and remain testable without real
//! stores.

use std::sync::Arc;

use crate::domain::ports::{AdsCommand, AdsQuery, UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use backend::domain::ports::{
///     FixtureAdsCommand, FixtureAdsQuery, FixtureUsersCommand, FixtureUsersQuery,
/// };
/// use backend::inbound::http::state::HttpState;
///
/// let state = HttpState {
///     ads: Arc::new(FixtureAdsCommand),
///     ads_query: Arc::new(FixtureAdsQuery),
///     users: Arc::new(FixtureUsersCommand),
///     users_query: Arc::new(FixtureUsersQuery),
/// };
/// let _ads = state.ads.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// Mutating ad operations.
    pub ads: Arc<dyn AdsCommand>,
    /// Read-only ad operations.
    pub ads_query: Arc<dyn AdsQuery>,
    /// Mutating user operations.
    pub users: Arc<dyn UsersCommand>,
    /// Read-only user operations.
    pub users_query: Arc<dyn UsersQuery>,
}
