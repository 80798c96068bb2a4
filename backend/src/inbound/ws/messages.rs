//! Wire-level message definitions for the RPC adapter.
//!
//! Each inbound frame is one typed request carrying a client-chosen
//! correlation id; each outbound frame echoes that id with either a data
//! payload or an error body. Error codes are the same vocabulary the HTTP
//! adapter serialises.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::domain::{Ad, BoardError, ErrorCode, User};

/// Inbound RPC frame: correlation id plus the operation to perform.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcRequest {
    /// Client-provided correlation identifier, echoed in the reply.
    pub request_id: Uuid,
    /// The requested operation.
    #[serde(flatten)]
    pub call: RpcCall,
}

/// Operations exposed over the RPC channel; one variant per board
/// operation, discriminated by the `op` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum RpcCall {
    CreateAd {
        title: String,
        text: String,
        user_id: i64,
    },
    ChangeAdStatus {
        ad_id: i64,
        user_id: i64,
        published: bool,
    },
    UpdateAd {
        ad_id: i64,
        user_id: i64,
        title: String,
        text: String,
    },
    GetAd {
        ad_id: i64,
    },
    DeleteAd {
        ad_id: i64,
        user_id: i64,
    },
    ListAds {
        published: bool,
        user_id: Option<i64>,
        created_at: Option<DateTime<Utc>>,
    },
    SearchAds {
        pattern: String,
    },
    CreateUser {
        name: String,
        email: String,
    },
    UpdateUser {
        user_id: i64,
        name: String,
        email: String,
    },
    GetUser {
        user_id: i64,
    },
    DeleteUser {
        user_id: i64,
    },
}

/// Successful outbound frame.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcOk {
    pub request_id: Uuid,
    /// Operation result; `null` for deletions.
    pub data: serde_json::Value,
}

/// Failed outbound frame.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcFailure {
    pub request_id: Uuid,
    pub error: RpcErrorBody,
}

/// Error body mirroring the HTTP envelope's code/message pair.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

impl RpcErrorBody {
    /// Translate a domain failure, masking internal detail the same way
    /// the HTTP adapter does.
    pub fn from_domain(err: &BoardError) -> Self {
        match err {
            BoardError::Internal { message } => {
                error!(detail = %message, "masking internal failure");
                Self {
                    code: ErrorCode::Unknown,
                    message: "unknown error".to_owned(),
                }
            }
            _ => Self {
                code: err.code(),
                message: err.to_string(),
            },
        }
    }
}

/// Ad representation carried in RPC replies.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdPayload {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub author_id: i64,
    pub published: bool,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<Ad> for AdPayload {
    fn from(ad: Ad) -> Self {
        Self {
            id: ad.id.get(),
            title: ad.title,
            text: ad.text,
            author_id: ad.author.get(),
            published: ad.published,
            created_at: ad.created_at.to_rfc3339(),
            updated_at: ad.updated_at.map(|instant| instant.to_rfc3339()),
        }
    }
}

/// User representation carried in RPC replies.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserPayload {
    fn from(user: User) -> Self {
        Self {
            id: user.id.get(),
            name: user.name,
            email: user.email,
        }
    }
}
