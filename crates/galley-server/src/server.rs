use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Galley HTTP server.
pub struct GalleyServer {
    config: ServerConfig,
    state: AppState,
}

impl GalleyServer {
    /// Build the server, loading seed fixtures if the config names any.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let state = AppState::new(config.open_store()?);
        Ok(Self { config, state })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("Galley server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = GalleyServer::new(ServerConfig::default()).unwrap();
        assert_eq!(
            server.config().bind_addr,
            "127.0.0.1:5000".parse::<std::net::SocketAddr>().unwrap()
        );
    }

    #[test]
    fn missing_seed_file_fails_construction() {
        let config = ServerConfig {
            seed_path: Some("/nonexistent/galley-seed.json".into()),
            ..ServerConfig::default()
        };
        assert!(matches!(
            GalleyServer::new(config),
            Err(ServerError::Store(_))
        ));
    }
}
