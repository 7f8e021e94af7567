// src/lib.rs
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod templates;
pub mod utils;

use crate::config::Config;
use crate::services::github::ActivityClient;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub activity_client: ActivityClient,
}
