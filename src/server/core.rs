use log::{info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::firewall::AddressAllowlist;
use crate::gate::{AppState, build_app};

pub struct Server {
    listener: TcpListener,
    state: Arc<AppState>,
    max_body_bytes: usize,
}

impl Server {
    /// Binds the listener and prepares shared state.
    ///
    /// The allowlist must already be built; a bad allowlist never reaches here.
    pub async fn new(config: &ServerConfig, allowlist: AddressAllowlist) -> std::io::Result<Self> {
        let listen_socket = config.listen_socket();
        let listener = TcpListener::bind(&listen_socket).await?;
        info!("Server bound to {}", listen_socket);

        let output_root = config.output_root_path();
        if let Err(e) = std::fs::create_dir_all(&output_root) {
            warn!("Failed to create output root directory: {}", e);
        } else {
            info!("Output root directory: {}", output_root.display());
        }

        if allowlist.is_permit_all() {
            warn!("No allowed CIDRs configured; accepting requests from any address");
        }

        Ok(Self {
            listener,
            state: Arc::new(AppState::new(allowlist, output_root)),
            max_body_bytes: config.max_body_bytes,
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serves requests until Ctrl-C. Each connection runs on its own task.
    pub async fn start(self) -> std::io::Result<()> {
        info!(
            "Starting config writer on {} ({} allowed prefixes)",
            self.local_addr()?,
            self.state.allowlist.prefixes().len()
        );

        let app = build_app(Arc::clone(&self.state), self.max_body_bytes);
        axum::serve(
            self.listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
