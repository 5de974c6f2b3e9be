// Server loop module
// Accepts connections until shutdown is requested

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::spawn_connection;
use crate::config::AppState;
use crate::logger;

/// Configuration for server loop behavior
pub struct ServerLoopConfig {
    /// HTTP/1.1 keep-alive on accepted connections
    pub keep_alive: bool,
    /// Fired once to stop accepting and release the listener
    pub shutdown: Arc<Notify>,
}

/// Run the accept loop.
///
/// Returns after `shutdown` is notified; the listener is closed on return
/// while connections already accepted finish on their own tasks.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    config: ServerLoopConfig,
) -> std::io::Result<()> {
    let local_addr = listener.local_addr()?;

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        spawn_connection(stream, peer_addr, Arc::clone(&state), config.keep_alive);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = config.shutdown.notified() => break,
        }
    }

    drop(listener);
    logger::log_shutdown(&local_addr);
    Ok(())
}
