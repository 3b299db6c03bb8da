use crate::db::SchemaExecutor;
use crate::service::SchemaInitializer;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 建表接口, 成功 200, 失败 500, 响应体均为 InitResult
pub async fn initialize_database<E: SchemaExecutor + 'static>(
    State(initializer): State<Arc<SchemaInitializer<E>>>,
) -> Response {
    let result = initializer.initialize_database().await;
    let status = if result.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(result)).into_response()
}
