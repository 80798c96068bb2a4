//! Route table for the HTTP adapter.

use actix_web::web;

use crate::inbound::http::{ads, users};

/// Register every `/api/v1` endpoint.
///
/// `/ads/search` must be registered before `/ads/{ad_id}` so the literal
/// segment wins over the path parameter.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(users::create_user)
            .service(users::get_user)
            .service(users::update_user)
            .service(users::delete_user)
            .service(ads::create_ad)
            .service(ads::list_ads)
            .service(ads::search_ads)
            .service(ads::get_ad)
            .service(ads::update_ad)
            .service(ads::change_ad_status)
            .service(ads::delete_ad),
    );
}
