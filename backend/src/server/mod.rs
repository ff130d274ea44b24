//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use shopping_list::Trace;
#[cfg(debug_assertions)]
use shopping_list::doc::ApiDoc;
use shopping_list::inbound::http::state::HttpState;
use shopping_list::inbound::http::{items, json_error_handler, route_not_found};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .wrap(Trace)
        .configure(items::configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(route_not_found))
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// Every worker shares the single repository held by `config`.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        repository,
    } = config;
    let http_state = web::Data::new(HttpState::from_repository(repository));

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();
    Ok(server)
}
