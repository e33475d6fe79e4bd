use element_server::{Config, Server, ServerState, load_dotenv, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 加载 .env 和配置
    load_dotenv();
    let config = Config::from_env()?;

    // 2. 设置日志
    setup_environment(&config)?;

    print_banner();

    tracing::info!(
        work_dir = %config.work_dir,
        port = config.http_port,
        env = %config.environment,
        "ELEMENT server starting..."
    );

    // 3. 初始化服务器状态
    let state = ServerState::initialize(&config)?;

    // 4. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
