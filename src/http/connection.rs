use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::http::parser::{parse_request_line, trim_line_ending};
use crate::http::path::resolve_target;
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

pub struct Connection<S> {
    stream: BufReader<S>,
    root: Arc<Path>,
    state: ConnectionState,
}

pub enum ConnectionState {
    ReadingRequestLine,
    ReadingHeaders(Request),
    Responding(Request),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, root: Arc<Path>) -> Self {
        Self {
            stream: BufReader::new(stream),
            root,
            state: ConnectionState::ReadingRequestLine,
        }
    }

    /// Serves one request, then closes the stream whatever the outcome.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let result = self.exchange().await;
        self.close().await;
        result
    }

    async fn exchange(&mut self) -> anyhow::Result<()> {
        loop {
            // Every arm sets the next state; leaving it as Closed ends the exchange
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::ReadingRequestLine => {
                    let Some(text) = self.read_line().await? else {
                        debug!("Connection closed before a request line");
                        continue;
                    };

                    info!(request_line = %text, "Request received");

                    let line = parse_request_line(&text)
                        .with_context(|| format!("Bad request line {:?}", text))?;
                    self.state = ConnectionState::ReadingHeaders(Request::new(line));
                }

                ConnectionState::ReadingHeaders(mut req) => match self.read_line().await? {
                    None => {
                        debug!("Connection closed before end of headers");
                    }
                    Some(header) if header.is_empty() => {
                        self.state = ConnectionState::Responding(req);
                    }
                    Some(header) => {
                        debug!(header = %header, "Header");
                        req.header_lines.push(header);
                        self.state = ConnectionState::ReadingHeaders(req);
                    }
                },

                ConnectionState::Responding(req) => {
                    let writer = ResponseWriter::new(self.respond_to(&req).await);
                    let status = writer.status();

                    let sent = writer
                        .write_to_stream(self.stream.get_mut())
                        .await
                        .context("Failed to write response")?;

                    info!(
                        path = %req.target(),
                        status = status.as_u16(),
                        bytes = sent,
                        "Response sent"
                    );
                }

                ConnectionState::Closed => break,
            }
        }

        Ok(())
    }

    /// Reads one line without its terminator; `None` once the client has
    /// closed its side and nothing is left.
    async fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut buf = Vec::new();
        let n = self.stream.read_until(b'\n', &mut buf).await?;

        if n == 0 {
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(trim_line_ending(&buf)).into_owned()))
    }

    async fn respond_to(&self, req: &Request) -> Response {
        let Some(path) = resolve_target(&self.root, req.target()) else {
            warn!(path = %req.target(), "Target escapes the document root");
            return Response::not_found();
        };

        debug!(file = %path.display(), "Resolved file name");

        match open_regular_file(&path).await {
            Ok(file) => Response::file(file, &path.to_string_lossy()),
            Err(e) => {
                debug!(file = %path.display(), error = %e, "Cannot open file");
                Response::not_found()
            }
        }
    }

    async fn close(&mut self) {
        if let Err(e) = self.stream.get_mut().shutdown().await {
            debug!(error = %e, "Error closing connection");
        }
    }
}

async fn open_regular_file(path: &Path) -> io::Result<File> {
    let file = File::open(path).await?;

    if !file.metadata().await?.is_file() {
        return Err(io::Error::new(io::ErrorKind::NotFound, "not a regular file"));
    }

    Ok(file)
}
