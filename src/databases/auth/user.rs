use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::services::validation::filled;

#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "telefone")]
    pub phone: Option<String>,
    #[serde(rename = "senha")]
    pub password: Option<String>,
}

pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl RegisterRequest {
    /// Emails are compared case-insensitively, so they are stored lowercased.
    /// The password is kept exactly as typed.
    pub fn validate(self) -> Option<NewUser> {
        let password = self.password.filter(|p| !p.trim().is_empty())?;
        Some(NewUser {
            name: filled(self.name.as_deref())?,
            email: filled(self.email.as_deref())?.to_lowercase(),
            phone: filled(self.phone.as_deref())?,
            password,
        })
    }
}

/// A stored user as returned to clients. The password hash never leaves the
/// database layer through this type.
#[derive(Debug, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefone")]
    pub phone: String,
}

#[derive(Debug, FromRow)]
pub struct LoginUser {
    pub id: i64,
    pub name: String,
    pub hashed_password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    #[serde(rename = "senha")]
    pub password: Option<String>,
}
