use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use sqlx::SqlitePool;

use crate::databases::auth::user::RegisterRequest;
use crate::databases::auth::userdb::{insert_user, user_exists};
use crate::errors::error_body;
use crate::services::password::hash_password;

const EMAIL_TAKEN: &str = "Já existe um usuário com este email.";

pub async fn register(
    data: web::Json<RegisterRequest>,
    db_pool: web::Data<SqlitePool>,
) -> impl Responder {
    let user = match data.into_inner().validate() {
        Some(user) => user,
        None => {
            return HttpResponse::BadRequest()
                .json(error_body("Nome, email, telefone e senha são obrigatórios."))
        }
    };

    match user_exists(&db_pool, &user.email).await {
        Ok(true) => return HttpResponse::Conflict().json(error_body(EMAIL_TAKEN)),
        Err(e) => {
            error!("Error checking if user exists: {:?}", e);
            return HttpResponse::InternalServerError().json(error_body("Erro ao cadastrar o usuário."));
        }
        Ok(false) => {}
    }

    let password_hash = match hash_password(&user.password) {
        Ok(hash) => hash,
        Err(e) => {
            error!("Failed to hash password: {}", e);
            return HttpResponse::InternalServerError().json(error_body("Erro ao cadastrar o usuário."));
        }
    };

    match insert_user(&db_pool, &user, &password_hash).await {
        Ok(created) => {
            info!("Registered user {}", created.id);
            HttpResponse::Created().json(created)
        }
        // Lost a race with a concurrent registration of the same email.
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            HttpResponse::Conflict().json(error_body(EMAIL_TAKEN))
        }
        Err(e) => {
            error!("Error inserting user: {:?}", e);
            HttpResponse::InternalServerError().json(error_body("Erro ao cadastrar o usuário."))
        }
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/register", web::post().to(register));
}
