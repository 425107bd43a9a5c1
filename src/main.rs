use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use user_store_api::{router, AppState, Config, Logger, UserStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("加载配置失败")?;

    // 初始化日志
    Logger::init(&config.logging.level);

    info!("启动用户管理 API 服务器...");

    let state = AppState::new(UserStore::new());
    let app = router(state, &config.http);

    let address = config.http.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("无法绑定到 {}", address))?;

    info!("🚀 服务器运行在 http://{}", address);
    info!("📖 API 端点:");
    info!("   GET    /              - API 信息");
    info!("   GET    /users         - 获取用户列表 (name, age_min, age_max, page, limit)");
    info!("   POST   /users         - 创建新用户");
    info!("   GET    /users/:id     - 获取特定用户");
    info!("   PUT    /users/:id     - 更新用户");
    info!("   DELETE /users/:id     - 删除用户");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务器已停止");
    Ok(())
}

/// 等待 Ctrl-C 或 SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("无法监听 Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("无法监听 SIGTERM: {}", e);
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

    info!("收到关闭信号，正在停止...");
}
