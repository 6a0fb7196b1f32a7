use sqlx::SqlitePool;

use crate::databases::auth::user::{LoginUser, NewUser, User};

pub async fn user_exists(pool: &SqlitePool, email: &str) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("SELECT 1 FROM usuarios WHERE email = ?")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(result.is_some())
}

pub async fn insert_user(
    pool: &SqlitePool,
    user: &NewUser,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO usuarios (nome, email, telefone, senha)
        VALUES (?, ?, ?, ?)
        RETURNING id, nome AS name, email, telefone AS phone
        "#,
    )
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.phone)
    .bind(password_hash)
    .fetch_one(pool)
    .await
}

pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<LoginUser>, sqlx::Error> {
    sqlx::query_as::<_, LoginUser>(
        r#"
        SELECT id, nome AS name, senha AS hashed_password
        FROM usuarios
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}
