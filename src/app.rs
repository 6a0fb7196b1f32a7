use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::{web, App, Error};
use sqlx::SqlitePool;
use std::path::Path;

use crate::errors::{json_config, path_config};
use crate::routes;

/// CORS for the panel's origin, or for any origin when none is configured.
pub fn cors(allowed_origin: Option<&str>) -> Cors {
    match allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_header(header::CONTENT_TYPE)
            .max_age(3600),
        None => Cors::permissive(),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig, static_dir: &Path) {
    cfg.app_data(json_config());
    cfg.app_data(path_config());
    routes::health::init(cfg);
    routes::auth::init(cfg);
    routes::login::init(cfg);
    routes::messages::init(cfg);
    // Last, so `/static` cannot shadow an API route.
    routes::panel::init(cfg, static_dir);
}

/// The full application as served by each worker.
pub fn build(
    pool: SqlitePool,
    static_dir: &Path,
    allowed_origin: Option<&str>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(cors(allowed_origin))
        .wrap(Logger::default())
        .app_data(web::Data::new(pool))
        .configure(|cfg| configure(cfg, static_dir))
}
