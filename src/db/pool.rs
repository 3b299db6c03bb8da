use crate::config::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;
use std::time::Duration;

/// 创建进程级共享连接池
///
/// 只校验 URL, 不在此处建立连接. 数据库不可达时由首次查询报错,
/// 建表流程会把它转成失败的 InitResult
pub fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let connect_options = PgConnectOptions::from_str(&config.url)?
        // DDL 偶尔会等锁, 超过 5 秒记一条 warn
        .log_slow_statements(tracing::log::LevelFilter::Warn, Duration::from_secs(5));

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_lazy_with(connect_options);

    tracing::info!(
        "Database pool created (max_connections = {})",
        config.max_connections
    );
    Ok(pool)
}
