use crate::db::schema::TABLE_EXISTS_QUERY;
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

/// 建表流程对数据库的最小依赖
///
/// 生产环境由 `PgPool` 实现, 测试中可替换为内存目录
#[async_trait]
pub trait SchemaExecutor: Send + Sync {
    /// 查询目录, 判断 `schema.table` 是否存在
    async fn table_exists(&self, schema: &str, table: &str) -> Result<bool, sqlx::Error>;

    /// 执行一条无参数 DDL
    async fn execute_ddl(&self, sql: &str) -> Result<(), sqlx::Error>;
}

#[async_trait]
impl SchemaExecutor for PgPool {
    async fn table_exists(&self, schema: &str, table: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(TABLE_EXISTS_QUERY)
            .bind(schema)
            .bind(table)
            .fetch_one(self)
            .await
    }

    async fn execute_ddl(&self, sql: &str) -> Result<(), sqlx::Error> {
        sqlx::query(sql).execute(self).await?;
        Ok(())
    }
}

#[async_trait]
impl<E: SchemaExecutor + ?Sized> SchemaExecutor for Arc<E> {
    async fn table_exists(&self, schema: &str, table: &str) -> Result<bool, sqlx::Error> {
        (**self).table_exists(schema, table).await
    }

    async fn execute_ddl(&self, sql: &str) -> Result<(), sqlx::Error> {
        (**self).execute_ddl(sql).await
    }
}
