use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::body::send_bytes;
use crate::http::response::{Body, Response, StatusCode};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes the status line, the Content-Type line and the blank line
/// ending the header block.
///
/// No Content-Length is sent; the client reads the body until the
/// connection closes.
pub fn serialize_head(status: StatusCode, content_type: &str) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        status.as_u16(),
        status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    buf.extend_from_slice(b"Content-Type: ");
    buf.extend_from_slice(content_type.as_bytes());
    buf.extend_from_slice(b"\r\n");

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf
}

pub struct ResponseWriter {
    response: Response,
}

impl ResponseWriter {
    pub fn new(response: Response) -> Self {
        Self { response }
    }

    pub fn status(&self) -> StatusCode {
        self.response.status
    }

    /// Writes the head, then the body. The file handle, if any, is dropped
    /// once its contents are sent. Returns the number of body bytes written.
    pub async fn write_to_stream<W>(self, stream: &mut W) -> anyhow::Result<u64>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let head = serialize_head(self.response.status, self.response.content_type);
        stream.write_all(&head).await?;

        let sent = match self.response.body {
            Body::File(mut file) => send_bytes(&mut file, stream).await?,
            Body::Literal(text) => {
                stream.write_all(text.as_bytes()).await?;
                text.len() as u64
            }
        };

        stream.flush().await?;
        Ok(sent)
    }
}
