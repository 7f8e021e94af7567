// src/services/mod.rs
pub mod activity;
pub mod github;
