//! Adapter state assembly.
//!
//! Wires one board service over two fresh in-memory stores and hands the
//! same service instance to both inbound adapters as their port bundles.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use crate::domain::{Ad, BoardService, User};
use crate::inbound::http::health::HealthState;
use crate::inbound::http::state::HttpState;
use crate::inbound::ws::state::WsState;
use crate::outbound::memory::MemoryRepository;

type MemoryBoard = BoardService<MemoryRepository<Ad>, MemoryRepository<User>>;

/// Application state bundle shared by every worker.
#[derive(Clone)]
pub struct AppStates {
    /// Port bundle for the HTTP adapter.
    pub http: web::Data<HttpState>,
    /// Port bundle for the RPC adapter.
    pub ws: web::Data<WsState>,
    /// Probe state for health endpoints.
    pub health: web::Data<HealthState>,
}

/// Build the states backing a server instance.
///
/// Both adapters see the same service, so an ad created over HTTP is
/// immediately visible over RPC and vice versa.
pub fn build_states() -> AppStates {
    let board: Arc<MemoryBoard> = Arc::new(BoardService::new(
        Arc::new(MemoryRepository::new()),
        Arc::new(MemoryRepository::new()),
        Arc::new(DefaultClock),
    ));

    let http = web::Data::new(HttpState {
        ads: board.clone(),
        ads_query: board.clone(),
        users: board.clone(),
        users_query: board.clone(),
    });
    let ws = web::Data::new(WsState {
        ads: board.clone(),
        ads_query: board.clone(),
        users: board.clone(),
        users_query: board,
    });

    AppStates {
        http,
        ws,
        health: web::Data::new(HealthState::new()),
    }
}
