pub mod app;
pub mod config;
pub mod databases;
pub mod errors;
pub mod routes;
pub mod services;
