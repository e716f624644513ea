use std::sync::Arc;

use anyhow::Context;
use productos_api::{
    app::product::ProductRepository,
    create_routes,
    infrastructure::{config::load_config, config::AppConfig, logger::Logger},
    AppState, InMemoryProductRepository,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().context("加载配置失败")?;
    let _guard = Logger::init(&config.logging).context("初始化日志失败")?;

    info!("启动产品服务...");

    let products = build_repository(&config).await?;
    let app = create_routes(AppState::new(products), config.server.timeout());

    let listener = TcpListener::bind((config.server.bind_address.as_str(), config.server.port))
        .await
        .with_context(|| {
            format!(
                "无法绑定到 {}:{}",
                config.server.bind_address, config.server.port
            )
        })?;
    let addr = listener.local_addr()?;

    info!("🚀 产品服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /productos?page=0&size=3 - 产品列表（可选分页，按名称排序）");
    info!("   GET    /productos/:id           - 获取产品");
    info!("   POST   /productos               - 创建产品");
    info!("   PUT    /productos/:id           - 更新产品");
    info!("   DELETE /productos/:id           - 删除产品");
    info!("   GET    /health                  - 健康检查");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

#[cfg(feature = "database")]
async fn build_repository(config: &AppConfig) -> anyhow::Result<Arc<dyn ProductRepository>> {
    use productos_api::{app::product::PgProductRepository, infrastructure::database::DatabaseManager};

    if config.database.in_memory {
        warn!("使用内存仓储，数据不会持久化");
        return Ok(Arc::new(InMemoryProductRepository::new()));
    }

    let manager = DatabaseManager::new(&config.database)
        .await
        .context("连接数据库失败")?;
    if config.database.ensure_schema {
        manager.ensure_schema().await.context("创建数据表失败")?;
    }

    Ok(Arc::new(PgProductRepository::new(manager.get_pool().clone())))
}

#[cfg(not(feature = "database"))]
async fn build_repository(_config: &AppConfig) -> anyhow::Result<Arc<dyn ProductRepository>> {
    warn!("未启用 database 特性，使用内存仓储");
    Ok(Arc::new(InMemoryProductRepository::new()))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("无法监听 Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("无法监听 SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("收到关闭信号");
}
