pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod service;

pub use crate::config::AppConfig;
pub use db::{create_pool, SchemaExecutor};
pub use error::AppError;
pub use models::{InitOutcome, InitResult, SchemaError};
pub use service::SchemaInitializer;
