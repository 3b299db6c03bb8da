use crate::db::schema::{INVOICES_TABLE, PUBLIC_SCHEMA, SCHEMA_STATEMENTS};
use crate::db::SchemaExecutor;
use crate::models::{InitResult, SchemaError};

/// 建表服务: 检查主表是否存在, 不存在则依次建表建索引
///
/// 可重复调用. 每条 DDL 都带 IF NOT EXISTS, 并发调用时可能观察到任一成功分支
pub struct SchemaInitializer<E> {
    executor: E,
}

impl<E: SchemaExecutor> SchemaInitializer<E> {
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// 初始化数据库表结构, 失败不向上抛出, 统一返回 InitResult
    pub async fn initialize_database(&self) -> InitResult {
        if self.tables_exist().await {
            tracing::info!("Database tables already exist, skipping DDL");
            return InitResult::already_exists();
        }

        match self.create_tables().await {
            Ok(()) => {
                tracing::info!("Database tables created successfully");
                InitResult::created()
            }
            Err(e) => {
                tracing::error!("Error initializing database: {}", e);
                InitResult::failed(e)
            }
        }
    }

    /// 主表是否存在. 目录查询失败时按不存在处理, 后续 DDL 自带幂等保护
    async fn tables_exist(&self) -> bool {
        match self.executor.table_exists(PUBLIC_SCHEMA, INVOICES_TABLE).await {
            Ok(exists) => exists,
            Err(e) => {
                tracing::warn!(
                    "Error checking if tables exist, assuming absent and attempting creation: {}",
                    e
                );
                false
            }
        }
    }

    // 严格按顺序执行, 遇错即停, 已建的表不回滚
    async fn create_tables(&self) -> Result<(), SchemaError> {
        for (step, sql) in SCHEMA_STATEMENTS {
            tracing::debug!("Executing: {}", step);
            self.executor
                .execute_ddl(sql)
                .await
                .map_err(|source| SchemaError { step, source })?;
        }
        Ok(())
    }
}
