pub mod auth;
pub mod health;
pub mod login;
pub mod messages;
pub mod panel;
