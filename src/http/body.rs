use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Size of each block copied from a file to the client.
pub const CHUNK_SIZE: usize = 1024;

/// Copies `source` to `dest` one block at a time.
///
/// Each block is fully written before the next read, so at most
/// [`CHUNK_SIZE`] bytes of the file are held in memory. Neither stream is
/// closed here. Returns the number of bytes sent.
pub async fn send_bytes<R, W>(source: &mut R, dest: &mut W) -> std::io::Result<u64>
where
    R: AsyncRead + Unpin + ?Sized,
    W: AsyncWrite + Unpin + ?Sized,
{
    let mut buffer = BytesMut::with_capacity(CHUNK_SIZE);
    let mut total = 0u64;

    loop {
        buffer.clear();
        let n = (&mut *source).take(CHUNK_SIZE as u64).read_buf(&mut buffer).await?;

        if n == 0 {
            break;
        }

        dest.write_all(&buffer[..n]).await?;
        total += n as u64;
    }

    dest.flush().await?;
    Ok(total)
}
