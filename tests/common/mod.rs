#![allow(dead_code)]

use actix_web::test::TestRequest;
use serde_json::json;
use sqlx::SqlitePool;
use std::path::PathBuf;

use mensagens::databases;

pub async fn memory_pool() -> SqlitePool {
    let pool = databases::connect("sqlite::memory:")
        .await
        .expect("in-memory database should open");
    databases::setup_database(&pool)
        .await
        .expect("schema should be created");
    pool
}

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

pub fn create_message(nome: &str, mensagem: &str) -> TestRequest {
    TestRequest::post()
        .uri("/")
        .set_json(json!({ "nome": nome, "mensagem": mensagem }))
}

pub fn register(nome: &str, email: &str, telefone: &str, senha: &str) -> TestRequest {
    TestRequest::post().uri("/api/register").set_json(json!({
        "nome": nome,
        "email": email,
        "telefone": telefone,
        "senha": senha,
    }))
}

pub fn login(email: &str, senha: &str) -> TestRequest {
    TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "email": email, "senha": senha }))
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("count query should succeed")
}
