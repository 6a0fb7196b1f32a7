mod common;

use actix_web::http::{header, StatusCode};
use actix_web::test::{self, TestRequest};
use actix_web::web;

use mensagens::{app, databases};

#[actix_web::test]
async fn health_check_reports_healthy() {
    let pool = common::memory_pool().await;
    let app = test::init_service(app::build(pool, &common::static_dir(), None)).await;

    let body = test::call_and_read_body(&app, TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(body, web::Bytes::from_static(b"Healthy"));
}

#[actix_web::test]
async fn root_serves_the_admin_panel() {
    let pool = common::memory_pool().await;
    let app = test::init_service(app::build(pool, &common::static_dir(), None)).await;

    let resp = test::call_service(&app, TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Gerenciar Mensagens"));

    let resp = test::call_service(&app, TestRequest::get().uri("/static/panel.js").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn cors_allows_the_configured_origin() {
    let pool = common::memory_pool().await;
    let app = test::init_service(app::build(
        pool,
        &common::static_dir(),
        Some("http://localhost:3000"),
    ))
    .await;

    let req = TestRequest::get()
        .uri("/health")
        .insert_header((header::ORIGIN, "http://localhost:3000"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
}

#[actix_web::test]
async fn schema_setup_is_idempotent() {
    let pool = common::memory_pool().await;
    sqlx::query("INSERT INTO mensagens (nome, mensagem) VALUES ('fica', 'aqui')")
        .execute(&pool)
        .await
        .unwrap();

    databases::setup_database(&pool).await.unwrap();

    assert_eq!(common::count_rows(&pool, "mensagens").await, 1);
    assert_eq!(common::count_rows(&pool, "usuarios").await, 0);
}
