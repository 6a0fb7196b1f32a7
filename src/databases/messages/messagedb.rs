use sqlx::SqlitePool;

use crate::databases::messages::message::{Message, NewMessage};

pub async fn insert_message(pool: &SqlitePool, message: &NewMessage) -> Result<Message, sqlx::Error> {
    sqlx::query_as::<_, Message>(
        r#"
        INSERT INTO mensagens (nome, mensagem)
        VALUES (?, ?)
        RETURNING id, nome AS name, mensagem AS body
        "#,
    )
    .bind(&message.name)
    .bind(&message.body)
    .fetch_one(pool)
    .await
}

pub async fn list_messages(pool: &SqlitePool) -> Result<Vec<Message>, sqlx::Error> {
    sqlx::query_as::<_, Message>(
        "SELECT id, nome AS name, mensagem AS body FROM mensagens ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await
}

pub async fn get_message(pool: &SqlitePool, id: i64) -> Result<Option<Message>, sqlx::Error> {
    sqlx::query_as::<_, Message>(
        "SELECT id, nome AS name, mensagem AS body FROM mensagens WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Returns `false` when no message has this id.
pub async fn update_message(
    pool: &SqlitePool,
    id: i64,
    message: &NewMessage,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE mensagens SET nome = ?, mensagem = ? WHERE id = ?")
        .bind(&message.name)
        .bind(&message.body)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Returns `false` when no message has this id.
pub async fn delete_message(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM mensagens WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
