use tracing_subscriber::EnvFilter;

use fayth_api::config::{Config, LogFormat};
use fayth_api::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = Config::from_env()?;

    let subscriber = tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env());
    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
    }

    let bind_addr = config.bind_addr;
    let app = fayth_api::app(AppState::new(config));

    match bind_addr {
        Some(addr) => {
            let listener = tokio::net::TcpListener::bind(addr).await?;
            tracing::info!(%addr, "listening");
            axum::serve(listener, app).await?;
            Ok(())
        }
        None => lambda_http::run(app).await.map_err(|e| eyre::eyre!(e)),
    }
}
