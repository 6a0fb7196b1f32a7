use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use log::{error, info};
use serde_json::json;
use sqlx::SqlitePool;

use crate::databases::messages::message::{GridQuery, MessagePayload};
use crate::databases::messages::messagedb::{
    delete_message as delete_message_row, get_message as get_message_row, insert_message,
    list_messages, update_message as update_message_row,
};
use crate::errors::{error_body, MESSAGE_NOT_FOUND, MISSING_MESSAGE_FIELDS};
use crate::services::search::filter_by_name;

#[post("/")]
async fn create_message(
    payload: web::Json<MessagePayload>,
    db_pool: web::Data<SqlitePool>,
) -> impl Responder {
    let new_message = match payload.validate() {
        Some(message) => message,
        None => return HttpResponse::BadRequest().json(error_body(MISSING_MESSAGE_FIELDS)),
    };

    match insert_message(db_pool.get_ref(), &new_message).await {
        Ok(message) => {
            info!("Created message {}", message.id);
            HttpResponse::Created().json(message)
        }
        Err(e) => {
            error!("Error inserting message: {:?}", e);
            HttpResponse::InternalServerError().json(error_body("Erro ao incluir a mensagem."))
        }
    }
}

#[get("/gridMensagem")]
async fn grid_messages(
    query: web::Query<GridQuery>,
    db_pool: web::Data<SqlitePool>,
) -> impl Responder {
    match list_messages(db_pool.get_ref()).await {
        Ok(messages) => {
            let messages = match query.nome.as_deref() {
                Some(term) => filter_by_name(messages, term),
                None => messages,
            };
            HttpResponse::Ok().json(messages)
        }
        Err(e) => {
            error!("Error listing messages: {:?}", e);
            HttpResponse::InternalServerError().json(error_body("Erro ao buscar as mensagens."))
        }
    }
}

#[get("/api/mensagens/{id}")]
async fn get_message(path: web::Path<i64>, db_pool: web::Data<SqlitePool>) -> impl Responder {
    let id = path.into_inner();

    match get_message_row(db_pool.get_ref(), id).await {
        Ok(Some(message)) => HttpResponse::Ok().json(message),
        Ok(None) => HttpResponse::NotFound().json(error_body(MESSAGE_NOT_FOUND)),
        Err(e) => {
            error!("Error fetching message {}: {:?}", id, e);
            HttpResponse::InternalServerError().json(error_body("Erro ao buscar a mensagem."))
        }
    }
}

#[put("/api/mensagens/{id}")]
async fn update_message(
    path: web::Path<i64>,
    payload: web::Json<MessagePayload>,
    db_pool: web::Data<SqlitePool>,
) -> impl Responder {
    let id = path.into_inner();

    let new_message = match payload.validate() {
        Some(message) => message,
        None => return HttpResponse::BadRequest().json(error_body(MISSING_MESSAGE_FIELDS)),
    };

    match update_message_row(db_pool.get_ref(), id, &new_message).await {
        Ok(true) => {
            info!("Updated message {}", id);
            HttpResponse::Ok().json(json!({ "message": "Mensagem atualizada com sucesso!" }))
        }
        Ok(false) => HttpResponse::NotFound().json(error_body(MESSAGE_NOT_FOUND)),
        Err(e) => {
            error!("Error updating message {}: {:?}", id, e);
            HttpResponse::InternalServerError().json(error_body("Erro ao atualizar a mensagem."))
        }
    }
}

#[delete("/api/mensagens/{id}")]
async fn delete_message(path: web::Path<i64>, db_pool: web::Data<SqlitePool>) -> impl Responder {
    let id = path.into_inner();

    match delete_message_row(db_pool.get_ref(), id).await {
        Ok(true) => {
            info!("Deleted message {}", id);
            HttpResponse::Ok().json(json!({ "message": "Mensagem excluída com sucesso!" }))
        }
        Ok(false) => HttpResponse::NotFound().json(json!({ "message": "Mensagem não encontrada!" })),
        Err(e) => {
            error!("Error deleting message {}: {:?}", id, e);
            HttpResponse::InternalServerError().json(error_body("Erro ao excluir a mensagem"))
        }
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(create_message);
    cfg.service(grid_messages);
    cfg.service(get_message);
    cfg.service(update_message);
    cfg.service(delete_message);
}
