//! Warehouse Desk
//!
//! Backend for the warehouse materials screens: purchase order receiving,
//! inventory grid, delivery receipt viewer and pick list viewer. Screen data
//! comes from the remote warehouse API; receiving sessions live here.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod receiving;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
