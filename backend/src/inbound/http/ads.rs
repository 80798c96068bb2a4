//! Ads API handlers.
//!
//! ```text
//! POST   /api/v1/ads              create an ad
//! GET    /api/v1/ads              list ads by filter
//! GET    /api/v1/ads/search       search ad titles
//! GET    /api/v1/ads/{ad_id}      fetch one ad
//! PUT    /api/v1/ads/{ad_id}      update title and text
//! PUT    /api/v1/ads/{ad_id}/status  publish or unpublish
//! DELETE /api/v1/ads/{ad_id}      delete an ad
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::ListAdsFilter;
use crate::domain::{Ad, AdId, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ApiError;
use crate::inbound::http::state::HttpState;

/// Request payload for creating an ad.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAdRequest {
    /// Ad headline.
    pub title: String,
    /// Ad body.
    pub text: String,
    /// Acting user; becomes the ad's author.
    pub user_id: i64,
}

/// Request payload for replacing an ad's content.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAdRequest {
    pub title: String,
    pub text: String,
    /// Acting user; must be the ad's author.
    pub user_id: i64,
}

/// Request payload for publishing or unpublishing an ad.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdStatusRequest {
    pub published: bool,
    /// Acting user; must be the ad's author.
    pub user_id: i64,
}

/// Request payload for deleting an ad.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAdRequest {
    /// Acting user; must be the ad's author.
    pub user_id: i64,
}

/// Query parameters for the ad listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAdsParams {
    /// Match ads with exactly this published flag.
    pub published: bool,
    /// Restrict to one author; `-1` (or absence) matches any author.
    pub user_id: Option<i64>,
    /// Restrict to ads created at exactly this RFC 3339 instant.
    pub created_at: Option<DateTime<Utc>>,
}

/// Query parameters for the title search.
#[derive(Debug, Deserialize)]
pub struct SearchAdsParams {
    /// Case-sensitive substring to look for in titles.
    pub pattern: String,
}

/// Ad representation returned by every ad endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdResponse {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub author_id: i64,
    pub published: bool,
    /// Creation instant, RFC 3339.
    pub created_at: String,
    /// Last content update, RFC 3339; null until the first update.
    pub updated_at: Option<String>,
}

impl From<Ad> for AdResponse {
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

fn ad_listing(ads: Vec<Ad>) -> web::Json<Vec<AdResponse>> {
    web::Json(ads.into_iter().map(AdResponse::from).collect())
}

impl From<&ListAdsParams> for ListAdsFilter {
    fn from(params: &ListAdsParams) -> Self {
        Self {
            published: params.published,
            // -1 is the wire sentinel for "any author".
            author: params
                .user_id
                .filter(|raw| *raw != -1)
                .map(UserId::new),
            created_at: params.created_at,
        }
    }
}

/// Create an unpublished ad.
#[utoipa::path(
    post,
    path = "/api/v1/ads",
    request_body = CreateAdRequest,
    responses(
        (status = 200, description = "Created ad", body = AdResponse),
        (status = 400, description = "Invalid ad content", body = ApiError),
        (status = 404, description = "Unknown author", body = ApiError),
        (status = 500, description = "Internal server error", body = ApiError)
    ),
    tags = ["ads"],
    operation_id = "createAd"
)]
#[post("/ads")]
pub async fn create_ad(
    state: web::Data<HttpState>,
    payload: web::Json<CreateAdRequest>,
) -> ApiResult<web::Json<AdResponse>> {
    let ad = state
        .ads
        .create_ad(&payload.title, &payload.text, UserId::new(payload.user_id))?;
    Ok(web::Json(ad.into()))
}

/// List ads matching a filter.
#[utoipa::path(
    get,
    path = "/api/v1/ads",
    params(
        ("published" = bool, Query, description = "Match ads with exactly this published flag"),
        ("userId" = Option<i64>, Query, description = "Restrict to one author; -1 matches any"),
        ("createdAt" = Option<String>, Query, description = "Exact RFC 3339 creation instant"),
    ),
    responses(
        (status = 200, description = "Matching ads", body = [AdResponse]),
        (status = 400, description = "Malformed filter", body = ApiError)
    ),
    tags = ["ads"],
    operation_id = "listAds"
)]
#[get("/ads")]
pub async fn list_ads(
    state: web::Data<HttpState>,
    params: web::Query<ListAdsParams>,
) -> ApiResult<web::Json<Vec<AdResponse>>> {
    let filter = ListAdsFilter::from(&*params);
    Ok(ad_listing(state.ads_query.list_ads(&filter)))
}

/// Search ad titles for a substring.
#[utoipa::path(
    get,
    path = "/api/v1/ads/search",
    params(
        ("pattern" = String, Query, description = "Case-sensitive substring to match in titles"),
    ),
    responses(
        (status = 200, description = "Matching ads", body = [AdResponse])
    ),
    tags = ["ads"],
    operation_id = "searchAds"
)]
#[get("/ads/search")]
pub async fn search_ads(
    state: web::Data<HttpState>,
    params: web::Query<SearchAdsParams>,
) -> ApiResult<web::Json<Vec<AdResponse>>> {
    Ok(ad_listing(state.ads_query.search_ads(&params.pattern)))
}

/// Fetch one ad. Reads are public.
#[utoipa::path(
    get,
    path = "/api/v1/ads/{ad_id}",
    params(("ad_id" = i64, Path, description = "Ad identity")),
    responses(
        (status = 200, description = "The ad", body = AdResponse),
        (status = 404, description = "Unknown ad", body = ApiError)
    ),
    tags = ["ads"],
    operation_id = "getAd"
)]
#[get("/ads/{ad_id}")]
pub async fn get_ad(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<AdResponse>> {
    let ad = state.ads_query.ad(AdId::new(path.into_inner()))?;
    Ok(web::Json(ad.into()))
}

/// Replace an ad's title and text.
#[utoipa::path(
    put,
    path = "/api/v1/ads/{ad_id}",
    params(("ad_id" = i64, Path, description = "Ad identity")),
    request_body = UpdateAdRequest,
    responses(
        (status = 200, description = "Updated ad", body = AdResponse),
        (status = 400, description = "Invalid ad content", body = ApiError),
        (status = 403, description = "Not the ad's author", body = ApiError),
        (status = 404, description = "Unknown ad or user", body = ApiError)
    ),
    tags = ["ads"],
    operation_id = "updateAd"
)]
#[put("/ads/{ad_id}")]
pub async fn update_ad(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UpdateAdRequest>,
) -> ApiResult<web::Json<AdResponse>> {
    let ad = state.ads.update_ad(
        AdId::new(path.into_inner()),
        UserId::new(payload.user_id),
        &payload.title,
        &payload.text,
    )?;
    Ok(web::Json(ad.into()))
}

/// Publish or unpublish an ad.
#[utoipa::path(
    put,
    path = "/api/v1/ads/{ad_id}/status",
    params(("ad_id" = i64, Path, description = "Ad identity")),
    request_body = AdStatusRequest,
    responses(
        (status = 200, description = "Updated ad", body = AdResponse),
        (status = 403, description = "Not the ad's author", body = ApiError),
        (status = 404, description = "Unknown ad or user", body = ApiError)
    ),
    tags = ["ads"],
    operation_id = "changeAdStatus"
)]
#[put("/ads/{ad_id}/status")]
pub async fn change_ad_status(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<AdStatusRequest>,
) -> ApiResult<web::Json<AdResponse>> {
    let ad = state.ads.change_ad_status(
        AdId::new(path.into_inner()),
        UserId::new(payload.user_id),
        payload.published,
    )?;
    Ok(web::Json(ad.into()))
}

/// Delete an ad permanently.
#[utoipa::path(
    delete,
    path = "/api/v1/ads/{ad_id}",
    params(("ad_id" = i64, Path, description = "Ad identity")),
    request_body = DeleteAdRequest,
    responses(
        (status = 204, description = "Ad deleted"),
        (status = 403, description = "Not the ad's author", body = ApiError),
        (status = 404, description = "Unknown ad or user", body = ApiError)
    ),
    tags = ["ads"],
    operation_id = "deleteAd"
)]
#[delete("/ads/{ad_id}")]
pub async fn delete_ad(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<DeleteAdRequest>,
) -> ApiResult<HttpResponse> {
    state
        .ads
        .delete_ad(AdId::new(path.into_inner()), UserId::new(payload.user_id))?;
    Ok(HttpResponse::NoContent().finish())
}
