//! Raw HTTP endpoints for failures wiremock cannot produce.

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A URL on localhost where nothing is listening.
pub fn closed_port_url(path: &str) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}{}", addr, path)
}

/// What the server does after sending headers and part of the body
#[derive(Debug, Clone, Copy)]
pub enum BodyFailure {
    /// Close the connection mid-body
    Close,
    /// Hold the connection open without sending the rest
    Stall(Duration),
}

/// Serve one request: a 200 with `Content-Length: 200`, a few body bytes,
/// then `failure`. Returns the base URL.
pub async fn truncated_body_server(failure: BodyFailure) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;

        let head = "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 200\r\n\r\n{\"results\": [{\"na";
        socket.write_all(head.as_bytes()).await.unwrap();
        socket.flush().await.unwrap();

        match failure {
            BodyFailure::Close => drop(socket),
            BodyFailure::Stall(d) => {
                tokio::time::sleep(d).await;
                drop(socket);
            }
        }
    });

    format!("http://{}", addr)
}
