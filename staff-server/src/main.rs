use staff_server::{Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 日志) 并加载配置
    let config = setup_environment();

    tracing::info!(
        environment = %config.environment,
        store = %config.store_path,
        "Staff server starting..."
    );

    // 2. 打开存储
    let state = ServerState::initialize(&config).inspect_err(|e| {
        tracing::error!("Failed to initialize state: {}", e);
    })?;

    // 3. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
