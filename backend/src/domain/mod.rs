//! Domain layer: models, validation, errors, the board service, and the
//! ports that bound it.
//!
//! Everything in here is transport agnostic and synchronous; the inbound
//! adapters translate protocol concerns into these types and back.

mod ads;
mod board_service;
mod error;
pub mod ports;
mod users;

pub use ads::{Ad, AdContentError, AdId, TEXT_MAX_CHARS, TITLE_MAX_CHARS, validate_content};
pub use board_service::BoardService;
pub use error::{BoardError, ErrorCode};
pub use users::{User, UserId};
