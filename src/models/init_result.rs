use serde::{Serialize, Serializer};
use thiserror::Error;

pub const MSG_CREATED: &str = "Database tables created successfully";
pub const MSG_ALREADY_EXIST: &str = "Database tables already exist";
pub const MSG_FAILED: &str = "Failed to initialize database";

/// 某一步 DDL 执行失败
#[derive(Debug, Error)]
#[error("{step} failed: {source}")]
pub struct SchemaError {
    pub step: &'static str,
    #[source]
    pub source: sqlx::Error,
}

/// 初始化走了哪个分支
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    AlreadyExists,
    Failed,
}

/// 初始化结果, 序列化为 `{ success, message, error? }`
#[derive(Debug, Serialize)]
pub struct InitResult {
    #[serde(skip)]
    pub outcome: InitOutcome,
    pub success: bool,
    pub message: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_error"
    )]
    pub error: Option<SchemaError>,
}

impl InitResult {
    pub fn created() -> Self {
        Self {
            outcome: InitOutcome::Created,
            success: true,
            message: MSG_CREATED.to_string(),
            error: None,
        }
    }

    pub fn already_exists() -> Self {
        Self {
            outcome: InitOutcome::AlreadyExists,
            success: true,
            message: MSG_ALREADY_EXIST.to_string(),
            error: None,
        }
    }

    pub fn failed(error: SchemaError) -> Self {
        Self {
            outcome: InitOutcome::Failed,
            success: false,
            message: MSG_FAILED.to_string(),
            error: Some(error),
        }
    }
}

fn serialize_error<S: Serializer>(error: &Option<SchemaError>, serializer: S) -> Result<S::Ok, S::Error> {
    match error {
        Some(e) => serializer.serialize_some(&e.to_string()),
        None => serializer.serialize_none(),
    }
}
