use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde_json::json;
use sqlx::SqlitePool;

use crate::databases::auth::user::LoginRequest;
use crate::databases::auth::userdb::get_user_by_email;
use crate::errors::error_body;
use crate::services::password::verify_password;
use crate::services::validation::filled;

fn invalid_credentials() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({ "message": "Email ou senha incorretos." }))
}

pub async fn login(
    data: web::Json<LoginRequest>,
    db_pool: web::Data<SqlitePool>,
) -> impl Responder {
    let LoginRequest { email, password } = data.into_inner();

    let (email, password) = match (filled(email.as_deref()), password) {
        (Some(email), Some(password)) if !password.is_empty() => (email.to_lowercase(), password),
        _ => return HttpResponse::BadRequest().json(error_body("Email e senha são obrigatórios.")),
    };

    match get_user_by_email(&db_pool, &email).await {
        Ok(Some(user)) => {
            if verify_password(&password, &user.hashed_password) {
                info!("User {} logged in", user.id);
                HttpResponse::Ok().json(json!({
                    "message": "Login bem-sucedido!",
                    "id": user.id,
                    "nome": user.name,
                }))
            } else {
                invalid_credentials()
            }
        }
        Ok(None) => invalid_credentials(),
        Err(e) => {
            error!("DB query error: {:?}", e);
            HttpResponse::InternalServerError().json(error_body("Erro ao realizar o login."))
        }
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/login", web::post().to(login));
}
