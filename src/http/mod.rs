//! HTTP protocol implementation.
//!
//! Each connection carries exactly one request and one response. The body is
//! framed by closing the connection, so no Content-Length is sent.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection state machine
//! - **`parser`**: Splits the request line into its tokens
//! - **`request`**: Request line and header lines as read off the wire
//! - **`path`**: Maps a request target onto the document root
//! - **`response`**: Status codes and the two kinds of response
//! - **`writer`**: Serializes the response head and sends the body
//! - **`body`**: Streams a file to the client in fixed blocks
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌────────────────────┐
//!        │ ReadingRequestLine │ ── stream ended ──┐
//!        └─────────┬──────────┘                   │
//!                  │ Request line parsed          │
//!                  ▼                              │
//!        ┌────────────────────┐                   │
//!        │   ReadingHeaders   │ ── stream ended ──┤
//!        └─────────┬──────────┘                   │
//!                  │ Blank line                   │
//!                  ▼                              │
//!        ┌────────────────────┐                   │
//!        │     Responding     │ ← 200 or 404      │
//!        └─────────┬──────────┘                   │
//!                  │ Response sent                │
//!                  ▼                              │
//!        ┌────────────────────┐                   │
//!        │       Closed       │ ◄─────────────────┘
//!        └────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use std::sync::Arc;
//! use webserver::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:6789").await?;
//!     let root: Arc<Path> = Arc::from(Path::new("."));
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let root = root.clone();
//!         tokio::spawn(async move {
//!             if let Err(e) = Connection::new(socket, root).run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod body;
pub mod connection;
pub mod mime;
pub mod parser;
pub mod path;
pub mod request;
pub mod response;
pub mod writer;
