//! Plant resource HTTP API backed by SQLite.

pub mod actions;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod schema;
