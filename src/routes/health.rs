use actix_web::{get, web, Responder};

#[get("/health")]
async fn health_check() -> impl Responder {
    "Healthy"
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);
}
