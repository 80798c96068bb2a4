//! Server assembly: routes, middleware, and the HTTP listener.

pub mod config;
pub mod state_builders;

use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::inbound::{http, ws};
use crate::middleware::Trace;
use config::ServerSettings;
use state_builders::{AppStates, build_states};

/// Register every route and state entry on an app.
///
/// Shared between [`run`] and the integration tests so both exercise the
/// same route table.
pub fn app_config(states: AppStates) -> impl Fn(&mut web::ServiceConfig) + Clone {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(states.http.clone())
            .app_data(states.ws.clone())
            .app_data(states.health.clone())
            .service(ws::rpc_entry)
            .service(http::health::ready)
            .service(http::health::live);
        http::routes::configure(cfg);
    }
}

/// Bind and run the server until shutdown.
///
/// Readiness flips once the listener is bound; actix handles termination
/// signals and drains workers on shutdown.
pub async fn run(settings: ServerSettings) -> std::io::Result<()> {
    let states = build_states();
    let health = states.health.clone();

    let server = HttpServer::new(move || {
        let app = App::new()
            .wrap(Trace)
            .configure(app_config(states.clone()));

        #[cfg(debug_assertions)]
        let app = app.service(
            SwaggerUi::new("/docs/{_:.*}")
                .url("/api-docs/openapi.json", crate::doc::ApiDoc::openapi()),
        );

        app
    })
    .bind(settings.bind_addr())?;

    info!(addr = %settings.bind_addr(), "starting bulletin board server");
    health.mark_ready();
    server.run().await
}
