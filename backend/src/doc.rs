//! OpenAPI documentation configuration.
//!
//! Generates the specification for the REST API; served by Swagger UI in
//! debug builds. The RPC adapter shares the same DTO vocabulary but is
//! not part of the OpenAPI surface.

use utoipa::OpenApi;

use crate::domain::ErrorCode;
use crate::inbound::http::ads::{
    AdResponse, AdStatusRequest, CreateAdRequest, DeleteAdRequest, UpdateAdRequest,
};
use crate::inbound::http::error::ApiError;
use crate::inbound::http::users::{CreateUserRequest, UpdateUserRequest, UserResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bulletin board API",
        description = "Classified-ad board: users create, publish, search, and delete ads."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::ads::create_ad,
        crate::inbound::http::ads::list_ads,
        crate::inbound::http::ads::search_ads,
        crate::inbound::http::ads::get_ad,
        crate::inbound::http::ads::update_ad,
        crate::inbound::http::ads::change_ad_status,
        crate::inbound::http::ads::delete_ad,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        AdResponse,
        AdStatusRequest,
        ApiError,
        CreateAdRequest,
        CreateUserRequest,
        DeleteAdRequest,
        ErrorCode,
        UpdateAdRequest,
        UpdateUserRequest,
        UserResponse,
    )),
    tags(
        (name = "ads", description = "Classified ads"),
        (name = "users", description = "Board users"),
        (name = "health", description = "Probes"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/api/v1/ads",
            "/api/v1/ads/search",
            "/api/v1/ads/{ad_id}",
            "/api/v1/ads/{ad_id}/status",
            "/api/v1/users",
            "/api/v1/users/{user_id}",
            "/health/live",
            "/health/ready",
        ] {
            assert!(
                paths.iter().any(|path| path.as_str() == expected),
                "missing path {expected}; have {paths:?}",
            );
        }
    }
}
