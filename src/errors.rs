use actix_web::{error, web, HttpResponse};
use log::warn;
use serde_json::{json, Value};

pub const MISSING_MESSAGE_FIELDS: &str = "Nome e mensagem são obrigatórios.";
pub const MESSAGE_NOT_FOUND: &str = "Mensagem não encontrada.";
pub const INVALID_BODY: &str = "Corpo da requisição inválido.";

pub fn error_body(message: &str) -> Value {
    json!({ "error": message })
}

/// Turns extractor failures for JSON bodies into `400 {"error": ..}` instead
/// of actix's plain-text response.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        warn!("Rejected body for {} {}: {}", req.method(), req.path(), err);
        let response = HttpResponse::BadRequest().json(error_body(INVALID_BODY));
        error::InternalError::from_response(err, response).into()
    })
}

/// Path segments are only numeric message ids, so a segment that does not
/// parse names no message.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::NotFound().json(error_body(MESSAGE_NOT_FOUND));
        error::InternalError::from_response(err, response).into()
    })
}
