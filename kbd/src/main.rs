use kbd::{config::Config, proto, router, services};

use anyhow::{Context, Result};
use dotenv::dotenv;
use kb_api::status::StatusCode;
use std::net::SocketAddr;
use tokio::{io::AsyncWriteExt, net::TcpListener};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();
    tracing::info!(
        "[config] addr={} locale={} per_page={} radius={} catalog={}",
        config.addr,
        config.default_locale,
        config.per_page,
        config.page_radius,
        config
            .catalog_path
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<sample>".to_string())
    );
    let addr = config.addr.clone();
    services::init(config).context("service init failed")?;

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("kbd listening on http://{}", addr);

    loop {
        let (stream, peer) = listener.accept().await?;
        tokio::spawn(async move {
            if let Err(err) = handle_conn(stream, peer).await {
                tracing::warn!("[conn] {peer} error: {err:#}");
            }
        });
    }
}

// One request per connection; keep-alive is not supported.
async fn handle_conn(mut tcp: tokio::net::TcpStream, peer: SocketAddr) -> Result<()> {
    let req = match proto::http_like::read_request(&mut tcp).await {
        Ok(r) => r,
        Err(code) => {
            tracing::debug!("[conn] {peer} rejected with {}", code.as_u16());
            let resp = proto::http_like::make_empty_response(code);
            tcp.write_all(resp.as_bytes()).await?;
            return Ok(());
        }
    };

    let response = match router::handle(req) {
        Ok(resp) => resp,
        Err(err) => {
            tracing::error!("[router] {peer} internal error: {err:#}");
            proto::http_like::Response::empty(StatusCode::InternalServerError)
        }
    };
    tcp.write_all(&response.into_bytes()).await?;
    tcp.shutdown().await?;
    Ok(())
}
