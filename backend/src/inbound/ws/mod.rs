//! RPC inbound adapter: typed JSON messages over one WebSocket channel.
//!
//! A second, interchangeable presentation of the same driving ports the
//! HTTP adapter consumes. Connection upkeep lives in [`session`]; the
//! wire vocabulary lives in [`messages`].

use actix_web::web::{self, Payload};
use actix_web::{HttpRequest, HttpResponse, get, rt};
use tracing::error;

pub mod messages;
mod session;
pub mod state;

/// Handle the WebSocket upgrade for the `/rpc` endpoint.
#[get("/rpc")]
pub async fn rpc_entry(
    state: web::Data<state::WsState>,
    req: HttpRequest,
    body: Payload,
) -> actix_web::Result<HttpResponse> {
    let (response, session, stream) = actix_ws::handle(&req, body).inspect_err(|err| {
        error!(error = %err, "WebSocket upgrade failed");
    })?;

    rt::spawn(session::handle_rpc_session(
        state.get_ref().clone(),
        session,
        stream,
    ));

    Ok(response)
}
