pub mod handlers;

pub use handlers::*;

use crate::db::SchemaExecutor;
use crate::service::SchemaInitializer;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// 管理接口路由
pub fn router<E: SchemaExecutor + 'static>(initializer: Arc<SchemaInitializer<E>>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/db/init", post(initialize_database::<E>))
        .with_state(initializer)
}
