//! Byte stream helpers.
//!
//! Converts between async byte streams and in-memory buffers. Everything is
//! buffered in memory; there is no backpressure and no size limit, so keep
//! these to payloads that comfortably fit in RAM.

use bytes::{Bytes, BytesMut};
use futures::{Stream, TryStreamExt};
use std::io;
use std::time::Duration;
use tokio::io::AsyncRead;
use tokio_util::io::{ReaderStream, StreamReader};
use tracing::{debug, instrument};

use crate::error::Result;

/// Drain `stream` into a single contiguous buffer.
///
/// Resolves once the stream ends; the first error is returned and the
/// partial buffer is dropped.
#[instrument(skip(stream))]
pub async fn stream_to_buffer<S, B>(stream: S) -> Result<Bytes>
where
    S: Stream<Item = io::Result<B>>,
    B: AsRef<[u8]>,
{
    let mut stream = std::pin::pin!(stream);
    let mut buffer = BytesMut::new();
    let mut chunks = 0usize;
    while let Some(chunk) = stream.try_next().await? {
        buffer.extend_from_slice(chunk.as_ref());
        chunks += 1;
    }
    debug!(chunks, bytes = buffer.len(), "Stream drained");
    Ok(buffer.freeze())
}

/// Drain an [`AsyncRead`] into a single buffer.
pub async fn read_to_buffer<R: AsyncRead>(reader: R) -> Result<Bytes> {
    stream_to_buffer(ReaderStream::new(reader)).await
}

/// One-shot stream over an in-memory buffer: yields the whole buffer, then ends.
#[derive(Debug)]
pub struct BufferStream {
    inner: tokio_stream::Once<io::Result<Bytes>>,
}

impl BufferStream {
    /// Adapt into an [`AsyncRead`].
    pub fn into_reader(self) -> StreamReader<Self, Bytes> {
        StreamReader::new(self)
    }
}

impl Stream for BufferStream {
    type Item = io::Result<Bytes>;

    fn poll_next(
        mut self: std::pin::Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        std::pin::Pin::new(&mut self.inner).poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Wrap `buffer` as a readable stream.
pub fn buffer_to_stream(buffer: impl Into<Bytes>) -> BufferStream {
    BufferStream {
        inner: tokio_stream::once(Ok(buffer.into())),
    }
}

/// Wait `ms` milliseconds on the tokio timer.
pub async fn sleep(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}
