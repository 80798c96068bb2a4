//! Shared RPC adapter state.

use std::sync::Arc;

use crate::domain::ports::{AdsCommand, AdsQuery, UsersCommand, UsersQuery};

/// Dependency bundle for RPC sessions; the same driving ports the HTTP
/// adapter consumes.
#[derive(Clone)]
pub struct WsState {
    /// Mutating ad operations.
    pub ads: Arc<dyn AdsCommand>,
    /// Read-only ad operations.
    pub ads_query: Arc<dyn AdsQuery>,
    /// Mutating user operations.
    pub users: Arc<dyn UsersCommand>,
    /// Read-only user operations.
    pub users_query: Arc<dyn UsersQuery>,
}
