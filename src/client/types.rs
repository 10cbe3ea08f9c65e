use crate::types::OutputFormat;
use crate::{BoxStream, Result};
use bytes::{Bytes, BytesMut};
use futures::stream::{Stream, StreamExt};
use futures::task::AtomicWaker;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll};

/// Response body shared between an [`AudioStream`] and its [`CancelHandle`].
///
/// Whoever takes the body out of the slot drops the connection with it.
struct BodySlot {
    body: Mutex<Option<BoxStream<'static, Bytes>>>,
    waker: AtomicWaker,
    cancelled: AtomicBool,
}

impl BodySlot {
    fn new(body: BoxStream<'static, Bytes>) -> Self {
        Self {
            body: Mutex::new(Some(body)),
            waker: AtomicWaker::new(),
            cancelled: AtomicBool::new(false),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<BoxStream<'static, Bytes>>> {
        self.body.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn close(&self) {
        let body = self.lock().take();
        drop(body);
    }
}

/// Cancels one streaming call.
///
/// [`CancelHandle::cancel`] drops the response body at once, closing the
/// connection even if nobody is polling the stream. A pending or later poll of
/// the [`AudioStream`] returns `None`.
#[derive(Clone)]
pub struct CancelHandle {
    slot: Arc<BodySlot>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.slot.cancelled.store(true, Ordering::Release);
        self.slot.close();
        self.slot.waker.wake();
    }

    pub fn is_cancelled(&self) -> bool {
        self.slot.cancelled.load(Ordering::Acquire)
    }
}

impl std::fmt::Debug for CancelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancelHandle")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

/// Audio body of a streaming synthesis call, chunk by chunk, in arrival order.
///
/// Chunk boundaries carry no meaning; only the concatenation is the encoded
/// audio. The stream is one-shot and ends after the first transport error.
/// Dropping it closes the connection.
pub struct AudioStream {
    slot: Arc<BodySlot>,
    format: OutputFormat,
}

impl AudioStream {
    pub(crate) fn new(body: BoxStream<'static, Bytes>, format: OutputFormat) -> Self {
        Self {
            slot: Arc::new(BodySlot::new(body)),
            format,
        }
    }

    /// Stream plus a handle that can close it from another task.
    pub(crate) fn cancellable(
        body: BoxStream<'static, Bytes>,
        format: OutputFormat,
    ) -> (Self, CancelHandle) {
        let stream = Self::new(body, format);
        let handle = CancelHandle {
            slot: Arc::clone(&stream.slot),
        };
        (stream, handle)
    }

    /// Format requested for this stream.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Drain the stream into one buffer.
    pub async fn collect_bytes(mut self) -> Result<Bytes> {
        let mut buf = BytesMut::new();
        while let Some(chunk) = self.next().await {
            buf.extend_from_slice(&chunk?);
        }
        Ok(buf.freeze())
    }
}

impl Stream for AudioStream {
    type Item = Result<Bytes>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let slot = &self.get_mut().slot;
        slot.waker.register(cx.waker());

        let mut guard = slot.lock();
        let Some(body) = guard.as_mut() else {
            return Poll::Ready(None);
        };
        match body.as_mut().poll_next(cx) {
            Poll::Ready(Some(Ok(chunk))) => Poll::Ready(Some(Ok(chunk))),
            Poll::Ready(Some(Err(e))) => {
                *guard = None;
                Poll::Ready(Some(Err(e)))
            }
            Poll::Ready(None) => {
                *guard = None;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl Drop for AudioStream {
    fn drop(&mut self) {
        self.slot.close();
    }
}

impl std::fmt::Debug for AudioStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioStream")
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportError;
    use crate::Error;

    fn ok(b: &'static [u8]) -> Result<&'static [u8]> {
        Ok(b)
    }

    fn chunks(items: Vec<Result<&'static [u8]>>) -> BoxStream<'static, Bytes> {
        Box::pin(futures::stream::iter(
            items.into_iter().map(|r| r.map(Bytes::from_static)),
        ))
    }

    /// A body that never yields and holds `marker` until it is dropped.
    fn held_body(marker: Arc<()>) -> BoxStream<'static, Bytes> {
        Box::pin(futures::stream::pending::<Result<Bytes>>().map(move |item| {
            let _held = &marker;
            item
        }))
    }

    #[tokio::test]
    async fn test_passes_chunks_through_in_order() {
        let stream = AudioStream::new(
            chunks(vec![ok(b"AAA"), ok(b"BBB"), ok(b"CCC")]),
            OutputFormat::Mp3_44100_128,
        );
        let got: Vec<Bytes> = stream.map(|r| r.unwrap()).collect().await;
        assert_eq!(got, vec!["AAA", "BBB", "CCC"]);
    }

    #[tokio::test]
    async fn test_stops_after_error() {
        let stream = AudioStream::new(
            chunks(vec![
                ok(b"AAA"),
                Err(Error::Transport(TransportError::Other("reset".into()))),
                ok(b"never"),
            ]),
            OutputFormat::Mp3_44100_128,
        );
        let got: Vec<Result<Bytes>> = stream.collect().await;
        assert_eq!(got.len(), 2);
        assert!(got[0].is_ok());
        assert!(matches!(got[1], Err(Error::Transport(_))));
    }

    #[tokio::test]
    async fn test_cancel_before_poll_yields_nothing() {
        let (mut stream, handle) =
            AudioStream::cancellable(chunks(vec![ok(b"AAA")]), OutputFormat::Mp3_44100_128);
        handle.cancel();
        assert!(handle.is_cancelled());
        assert!(stream.next().await.is_none());
    }

    #[test]
    fn test_cancel_drops_body_without_poll() {
        let marker = Arc::new(());
        let (_stream, handle) =
            AudioStream::cancellable(held_body(Arc::clone(&marker)), OutputFormat::Mp3_44100_128);
        assert_eq!(Arc::strong_count(&marker), 2);
        handle.cancel();
        assert_eq!(Arc::strong_count(&marker), 1);
    }

    #[test]
    fn test_drop_releases_body_while_handle_lives() {
        let marker = Arc::new(());
        let (stream, handle) =
            AudioStream::cancellable(held_body(Arc::clone(&marker)), OutputFormat::Mp3_44100_128);
        drop(stream);
        assert_eq!(Arc::strong_count(&marker), 1);
        assert!(!handle.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancel_wakes_pending_stream() {
        let (mut stream, handle) = AudioStream::cancellable(
            Box::pin(futures::stream::pending()),
            OutputFormat::Mp3_44100_128,
        );
        let waiter = tokio::spawn(async move { stream.next().await.is_none() });
        tokio::task::yield_now().await;
        handle.cancel();
        assert!(waiter.await.unwrap());
    }

    #[tokio::test]
    async fn test_collect_bytes_concatenates() {
        let stream = AudioStream::new(
            chunks(vec![ok(b"ID3"), ok(b"\x00\x01"), ok(b"tail")]),
            OutputFormat::Mp3_44100_128,
        );
        let bytes = stream.collect_bytes().await.unwrap();
        assert_eq!(&bytes[..], b"ID3\x00\x01tail");
    }
}
