use std::io;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::{TcpListener, TcpSocket, lookup_host};
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::http::connection::Connection;

/// Pause after an accept error so a persistent one (e.g. out of file
/// descriptors) does not spin the loop.
const ACCEPT_ERROR_BACKOFF: Duration = Duration::from_millis(100);

/// Binds the configured address and serves until an unrecoverable error.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(&cfg.server.listen_addr, cfg.server.backlog).await?;
    info!("Web server running on {}", listener.local_addr()?);

    serve(listener, cfg).await
}

/// Opens a listening socket with the given accept backlog.
pub async fn bind(addr: &str, backlog: u32) -> anyhow::Result<TcpListener> {
    let addr: SocketAddr = lookup_host(addr)
        .await
        .with_context(|| format!("Failed to resolve listen address {}", addr))?
        .next()
        .with_context(|| format!("Listen address {} resolved to nothing", addr))?;

    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    socket
        .bind(addr)
        .with_context(|| format!("Failed to bind {}", addr))?;

    socket
        .listen(backlog)
        .with_context(|| format!("Failed to listen on {}", addr))
}

/// Accepts connections on `listener` forever, one task per connection.
///
/// At most `server.max_connections` tasks are live; when they are all busy the
/// loop waits for one to finish before accepting again.
pub async fn serve(listener: TcpListener, cfg: &Config) -> anyhow::Result<()> {
    let root: Arc<Path> = Arc::from(cfg.static_files.root.as_path());
    let slots = Arc::new(Semaphore::new(cfg.server.max_connections));

    loop {
        let permit = slots.clone().acquire_owned().await?;

        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) if is_listener_fatal(&e) => {
                return Err(e).context("Listening socket is no longer usable");
            }
            Err(e) => {
                warn!(error = %e, "Failed to accept connection");
                tokio::time::sleep(ACCEPT_ERROR_BACKOFF).await;
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let root = root.clone();
        tokio::spawn(async move {
            if let Err(e) = Connection::new(socket, root).run().await {
                error!("Connection error from {}: {:#}", peer, e);
            }
            drop(permit);
        });
    }
}

/// Errors meaning the listening socket itself is broken, as opposed to a
/// single pending connection failing.
fn is_listener_fatal(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::InvalidInput | io::ErrorKind::NotConnected | io::ErrorKind::Unsupported
    )
}
