mod config;
mod favicon;
mod handler;
mod security;

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::middleware;
use axum::routing::get;
use tracing_subscriber::EnvFilter;

use config::ServerConfig;
use favicon_core::{GlyphRenderer, SquareRenderer};
use security::{ContentSecurityPolicy, SecurityHeaders};

#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<dyn SquareRenderer + Send + Sync>,
    pub security: Arc<SecurityHeaders>,
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/favicon.ico", get(handler::favicon))
        .route("/icon.png", get(handler::icon))
        .route("/apple-icon.png", get(handler::apple_icon))
        .route("/health", get(handler::health))
        .fallback(handler::not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security::security_headers,
        ))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env().context("failed to load configuration")?;
    let csp = ContentSecurityPolicy::for_site(&config.cms_origins);
    let security = SecurityHeaders::new(&csp).context("invalid Content-Security-Policy")?;

    let state = AppState {
        renderer: Arc::new(GlyphRenderer::new(config.style.clone())),
        security: Arc::new(security),
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(
        addr = %config.bind_addr,
        label = %config.style.label,
        cms_origins = ?config.cms_origins,
        "favicon server listening"
    );

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutting down");
}

#[cfg(test)]
mod test_support {
    use super::*;
    use favicon_core::RenderError;

    /// 常に失敗するレンダラー
    pub struct FailingRenderer;

    impl SquareRenderer for FailingRenderer {
        fn render_square_png(&self, _size: u32) -> Result<Vec<u8>, RenderError> {
            Err(RenderError::EncodeFailed("rasterizer unavailable".to_string()))
        }
    }

    pub fn test_state<R: SquareRenderer + Send + Sync + 'static>(renderer: R) -> AppState {
        let csp = ContentSecurityPolicy::for_site(&["https://cdn.example.com".to_string()]);
        AppState {
            renderer: Arc::new(renderer),
            security: Arc::new(SecurityHeaders::new(&csp).unwrap()),
        }
    }
}
