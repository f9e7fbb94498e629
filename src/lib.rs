pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod project;
pub mod render;
pub mod routes;
