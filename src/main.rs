use invoice_schema::{api, create_pool, AppConfig, AppError, SchemaInitializer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::fmt::time::ChronoLocal;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 初始化日志 - 使用本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置, 缺少 DATABASE_URL 直接退出
    let config = AppConfig::from_env()?;
    info!("Starting server with config: {:?}", config);

    // 延迟连接, 数据库不可达不影响服务启动
    let pool = create_pool(&config.database)?;
    let initializer = Arc::new(SchemaInitializer::new(pool));

    if config.database.init_on_startup {
        let result = initializer.initialize_database().await;
        if result.success {
            info!("Startup schema check: {}", result.message);
        } else {
            // 不退出, 可通过管理接口重试
            error!("Startup schema check: {} ({:?})", result.message, result.error);
        }
    }

    let app = api::router(initializer);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  GET  /health");
    info!("  POST /api/db/init");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
