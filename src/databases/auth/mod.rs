pub mod user;
pub mod userdb;
