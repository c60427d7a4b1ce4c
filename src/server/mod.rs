// Server module entry
// Listener creation, accept loop and shutdown signal handling

pub mod connection;
pub mod listener;
pub mod signal;

// Re-export commonly used types
pub use listener::create_listener;
pub use signal::ShutdownSignal;

use crate::config::Config;
use crate::logger;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Accept connections until shutdown is requested.
///
/// Returning drops the listener, which releases the port.
pub async fn run(listener: TcpListener, config: Arc<Config>, shutdown: Arc<ShutdownSignal>) {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::spawn_connection(stream, peer_addr, Arc::clone(&config));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.wait() => {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    fn test_config() -> Arc<Config> {
        Arc::new(Config::load_from("nonexistent-test-config").expect("defaults"))
    }

    async fn start_test_server() -> (std::net::SocketAddr, Arc<ShutdownSignal>, tokio::task::JoinHandle<()>) {
        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = ShutdownSignal::new();
        let handle = tokio::spawn(run(listener, test_config(), Arc::clone(&shutdown)));
        (addr, shutdown, handle)
    }

    async fn raw_request(addr: std::net::SocketAddr, request: &str) -> String {
        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut response = Vec::new();
        stream.read_to_end(&mut response).await.unwrap();
        String::from_utf8_lossy(&response).into_owned()
    }

    #[tokio::test]
    async fn test_shutdown_releases_port() {
        let (addr, shutdown, handle) = start_test_server().await;

        shutdown.request();
        handle.await.expect("server loop exits");

        // The port must be immediately rebindable
        let rebound = create_listener(addr);
        assert!(rebound.is_ok());
    }

    #[tokio::test]
    async fn test_missing_file_gets_404_with_cors() {
        let (addr, shutdown, handle) = start_test_server().await;

        let response = raw_request(
            addr,
            "GET /no-such-file.bin HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await;

        assert!(response.starts_with("HTTP/1.1 404"));
        assert!(response
            .to_ascii_lowercase()
            .contains("access-control-allow-origin: *"));

        shutdown.request();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_program_info_over_the_wire() {
        let (addr, shutdown, handle) = start_test_server().await;

        let response = raw_request(
            addr,
            "GET /api/program-info HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        )
        .await;

        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.contains("\"status\": \"deployed\""));

        shutdown.request();
        handle.await.unwrap();
    }
}
