//! Per-connection RPC session.
//!
//! Keeps WebSocket framing and heartbeats at the edge while deferring all
//! behaviour to the injected driving ports. Pings every 5s and considers
//! a connection idle after 10s without client traffic; tests shorten both
//! intervals to speed up feedback.

use std::time::{Duration, Instant};

use actix_ws::{CloseCode, CloseReason, Closed, Message, MessageStream, ProtocolError, Session};
use serde_json::Value;
use tokio::time;
use tracing::warn;

use crate::domain::ports::ListAdsFilter;
use crate::domain::{AdId, BoardError, UserId};
use crate::inbound::ws::messages::{
    AdPayload, RpcCall, RpcErrorBody, RpcFailure, RpcOk, RpcRequest, UserPayload,
};
use crate::inbound::ws::state::WsState;

#[cfg(not(test))]
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);
#[cfg(test)]
const HEARTBEAT_INTERVAL: Duration = Duration::from_millis(50);

#[cfg(not(test))]
const CLIENT_TIMEOUT: Duration = Duration::from_secs(10);
#[cfg(test)]
const CLIENT_TIMEOUT: Duration = Duration::from_millis(100);

pub(super) async fn handle_rpc_session(state: WsState, session: Session, stream: MessageStream) {
    RpcSession::new(state).run(session, stream).await;
}

enum SessionError {
    ClientClosed(Option<CloseReason>),
    StreamClosed,
    HeartbeatTimeout,
    Protocol(ProtocolError),
    InvalidPayload,
    Network(Closed),
}

enum CloseAction {
    None,
    Close(Option<CloseReason>),
}

pub(super) struct RpcSession {
    state: WsState,
}

impl RpcSession {
    pub(super) fn new(state: WsState) -> Self {
        Self { state }
    }

    async fn run(&self, mut session: Session, mut stream: MessageStream) {
        let mut last_heartbeat = Instant::now();
        let mut heartbeat = time::interval(HEARTBEAT_INTERVAL);

        loop {
            let result = tokio::select! {
                _ = heartbeat.tick() => {
                    self.handle_heartbeat_tick(&mut session, &last_heartbeat).await
                }
                message = stream.recv() => {
                    self.handle_stream_message(&mut session, &mut last_heartbeat, message)
                        .await
                }
            };

            if let Err(error) = result {
                self.log_shutdown_reason(&error);
                let close_action = Self::close_action_for(&error);
                Self::close_session_if_needed(session, close_action).await;
                return;
            }
        }
    }

    async fn handle_heartbeat_tick(
        &self,
        session: &mut Session,
        last_heartbeat: &Instant,
    ) -> Result<(), SessionError> {
        if Instant::now().duration_since(*last_heartbeat) > CLIENT_TIMEOUT {
            return Err(SessionError::HeartbeatTimeout);
        }

        session.ping(b"").await.map_err(SessionError::Network)
    }

    async fn handle_stream_message(
        &self,
        session: &mut Session,
        last_heartbeat: &mut Instant,
        message: Option<Result<Message, ProtocolError>>,
    ) -> Result<(), SessionError> {
        let Some(message) = message else {
            return Err(SessionError::StreamClosed);
        };

        match message {
            Ok(message) => self.handle_message(session, last_heartbeat, message).await,
            Err(error) => Err(SessionError::Protocol(error)),
        }
    }

    async fn handle_message(
        &self,
        session: &mut Session,
        last_heartbeat: &mut Instant,
        message: Message,
    ) -> Result<(), SessionError> {
        match message {
            Message::Ping(payload) => {
                *last_heartbeat = Instant::now();
                session
                    .pong(&payload)
                    .await
                    .map_err(SessionError::Network)?;
                Ok(())
            }
            Message::Text(text) => {
                *last_heartbeat = Instant::now();
                self.handle_text_message(session, text.as_ref()).await
            }
            Message::Pong(_) | Message::Binary(_) | Message::Continuation(_) | Message::Nop => {
                *last_heartbeat = Instant::now();
                Ok(())
            }
            Message::Close(reason) => Err(SessionError::ClientClosed(reason)),
        }
    }

    async fn handle_text_message(
        &self,
        session: &mut Session,
        text: &str,
    ) -> Result<(), SessionError> {
        let request = match serde_json::from_str::<RpcRequest>(text) {
            Ok(request) => request,
            Err(error) => {
                warn!(error = %error, "rejected malformed RPC payload");
                return Err(SessionError::InvalidPayload);
            }
        };

        let RpcRequest { request_id, call } = request;
        let outcome = match self.dispatch(call) {
            Ok(data) => self.send_json(session, &RpcOk { request_id, data }).await,
            Err(error) => {
                self.send_json(
                    session,
                    &RpcFailure {
                        request_id,
                        error: RpcErrorBody::from_domain(&error),
                    },
                )
                .await
            }
        };
        outcome.map_err(SessionError::Network)
    }

    /// Route one call to the matching driving port and serialise its result.
    pub(super) fn dispatch(&self, call: RpcCall) -> Result<Value, BoardError> {
        match call {
            RpcCall::CreateAd {
                title,
                text,
                user_id,
            } => self
                .state
                .ads
                .create_ad(&title, &text, UserId::new(user_id))
                .and_then(ad_value),
            RpcCall::ChangeAdStatus {
                ad_id,
                user_id,
                published,
            } => self
                .state
                .ads
                .change_ad_status(AdId::new(ad_id), UserId::new(user_id), published)
                .and_then(ad_value),
            RpcCall::UpdateAd {
                ad_id,
                user_id,
                title,
                text,
            } => self
                .state
                .ads
                .update_ad(AdId::new(ad_id), UserId::new(user_id), &title, &text)
                .and_then(ad_value),
            RpcCall::GetAd { ad_id } => {
                self.state.ads_query.ad(AdId::new(ad_id)).and_then(ad_value)
            }
            RpcCall::DeleteAd { ad_id, user_id } => self
                .state
                .ads
                .delete_ad(AdId::new(ad_id), UserId::new(user_id))
                .map(|()| Value::Null),
            RpcCall::ListAds {
                published,
                user_id,
                created_at,
            } => {
                let filter = ListAdsFilter {
                    published,
                    author: user_id.filter(|raw| *raw != -1).map(UserId::new),
                    created_at,
                };
                ad_listing_value(self.state.ads_query.list_ads(&filter))
            }
            RpcCall::SearchAds { pattern } => {
                ad_listing_value(self.state.ads_query.search_ads(&pattern))
            }
            RpcCall::CreateUser { name, email } => self
                .state
                .users
                .create_user(&name, &email)
                .and_then(user_value),
            RpcCall::UpdateUser {
                user_id,
                name,
                email,
            } => self
                .state
                .users
                .update_user(UserId::new(user_id), &name, &email)
                .and_then(user_value),
            RpcCall::GetUser { user_id } => self
                .state
                .users_query
                .user(UserId::new(user_id))
                .and_then(user_value),
            RpcCall::DeleteUser { user_id } => self
                .state
                .users
                .delete_user(UserId::new(user_id))
                .map(|()| Value::Null),
        }
    }

    async fn send_json<T: serde::Serialize>(
        &self,
        session: &mut Session,
        payload: &T,
    ) -> Result<(), Closed> {
        match serde_json::to_string(payload) {
            Ok(body) => session.text(body).await,
            Err(error) => {
                // In debug builds fail fast so schema drift is fixed early.
                if cfg!(debug_assertions) {
                    panic!("RPC replies must serialize: {error}");
                } else {
                    warn!(error = %error, "failed to serialize RPC reply");
                }
                Ok(())
            }
        }
    }

    fn log_shutdown_reason(&self, error: &SessionError) {
        match error {
            SessionError::HeartbeatTimeout => {
                warn!("RPC heartbeat timeout; closing connection");
            }
            SessionError::Protocol(error) => {
                warn!(error = %error, "RPC protocol error");
            }
            SessionError::Network(error) => {
                warn!(error = %error, "RPC send failed; closing connection");
            }
            SessionError::InvalidPayload
            | SessionError::ClientClosed(_)
            | SessionError::StreamClosed => {}
        }
    }

    fn close_action_for(error: &SessionError) -> CloseAction {
        match error {
            SessionError::HeartbeatTimeout => CloseAction::Close(Some(CloseReason {
                code: CloseCode::Normal,
                description: Some("heartbeat timeout".to_owned()),
            })),
            SessionError::Protocol(_) => CloseAction::Close(Some(CloseReason {
                code: CloseCode::Protocol,
                description: Some("protocol error".to_owned()),
            })),
            SessionError::InvalidPayload => CloseAction::Close(Some(CloseReason {
                code: CloseCode::Policy,
                description: Some("invalid payload".to_owned()),
            })),
            SessionError::ClientClosed(reason) => CloseAction::Close(reason.clone()),
            SessionError::StreamClosed | SessionError::Network(_) => CloseAction::None,
        }
    }

    async fn close_session_if_needed(session: Session, close_action: CloseAction) {
        if let CloseAction::Close(reason) = close_action {
            if let Err(error) = session.close(reason).await {
                warn!(error = %error, "failed to close RPC session");
            }
        }
    }
}

fn ad_value(ad: crate::domain::Ad) -> Result<Value, BoardError> {
    serde_json::to_value(AdPayload::from(ad)).map_err(|err| BoardError::internal(err.to_string()))
}

fn ad_listing_value(ads: Vec<crate::domain::Ad>) -> Result<Value, BoardError> {
    let payloads: Vec<AdPayload> = ads.into_iter().map(AdPayload::from).collect();
    serde_json::to_value(payloads).map_err(|err| BoardError::internal(err.to_string()))
}

fn user_value(user: crate::domain::User) -> Result<Value, BoardError> {
    serde_json::to_value(UserPayload::from(user))
        .map_err(|err| BoardError::internal(err.to_string()))
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
