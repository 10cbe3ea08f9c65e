//! Text-to-speech endpoints, buffered and streamed.

use super::core::{path_segment, require_non_empty, VoiceClient};
use super::types::{AudioStream, CancelHandle};
use crate::transport::HttpTransport;
use crate::types::{StreamStats, SynthesisRequest, TtsOptions};
use crate::Result;
use bytes::Bytes;
use futures::StreamExt;
use reqwest::Method;
use tracing::{debug, error, info};

impl VoiceClient {
    /// `POST /v1/text-to-speech/{voice_id}`: the whole audio body at once.
    pub async fn text_to_speech(
        &self,
        voice_id: &str,
        text: &str,
        options: &TtsOptions,
    ) -> Result<Bytes> {
        require_non_empty(voice_id, "voice_id", "text_to_speech")?;
        require_non_empty(text, "text", "text_to_speech")?;

        let path = format!("/v1/text-to-speech/{}", path_segment(voice_id));
        let body = SynthesisRequest::buffered(text, options);
        debug!(voice_id, text_len = text.len(), model = ?body.model_id, "synthesizing");

        let request = HttpTransport::json_body(self.request(Method::POST, &path)?, &body);
        let audio = self.transport.execute_bytes(request).await?;
        info!(voice_id, bytes = audio.len(), "synthesis complete");
        Ok(audio)
    }

    /// `POST /v1/text-to-speech/{voice_id}/stream`: audio chunks as they arrive.
    ///
    /// Fails before yielding anything when the service answers with a
    /// non-success status. A connection lost mid-body surfaces as one
    /// transport error after the chunks already received.
    pub async fn text_to_speech_stream(
        &self,
        voice_id: &str,
        text: &str,
        options: &TtsOptions,
    ) -> Result<AudioStream> {
        let (stream, _cancel) = self
            .text_to_speech_stream_with_cancel(voice_id, text, options)
            .await?;
        Ok(stream)
    }

    /// Like [`VoiceClient::text_to_speech_stream`], plus a handle that stops
    /// delivery and closes the connection.
    pub async fn text_to_speech_stream_with_cancel(
        &self,
        voice_id: &str,
        text: &str,
        options: &TtsOptions,
    ) -> Result<(AudioStream, CancelHandle)> {
        require_non_empty(voice_id, "voice_id", "text_to_speech_stream")?;
        require_non_empty(text, "text", "text_to_speech_stream")?;

        let format = options.output_format.unwrap_or(self.output_format);
        let path = format!("/v1/text-to-speech/{}/stream", path_segment(voice_id));
        let body = SynthesisRequest::streaming(text, options);
        debug!(
            voice_id,
            text_len = text.len(),
            model = ?body.model_id,
            output_format = %format,
            "opening synthesis stream"
        );

        let request = HttpTransport::json_body(
            self.request(Method::POST, &path)?
                .query(&[("output_format", format.as_str())]),
            &body,
        );
        let body_stream = self.transport.execute_stream(request).await?;

        Ok(AudioStream::cancellable(body_stream, format))
    }

    /// Streaming synthesis with a per-chunk callback.
    ///
    /// `on_chunk` runs once per received chunk, in arrival order, and each
    /// invocation returns before the next chunk is read. Returns when the
    /// stream closes cleanly.
    pub async fn text_to_speech_stream_with<F>(
        &self,
        voice_id: &str,
        text: &str,
        options: &TtsOptions,
        mut on_chunk: F,
    ) -> Result<StreamStats>
    where
        F: FnMut(Bytes),
    {
        let mut stream = self.text_to_speech_stream(voice_id, text, options).await?;
        let mut stats = StreamStats::default();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| {
                error!(
                    voice_id,
                    chunks = stats.chunks,
                    bytes = stats.bytes,
                    "synthesis stream interrupted: {}",
                    e
                );
                e
            })?;
            stats.chunks += 1;
            stats.bytes += chunk.len();
            on_chunk(chunk);
        }

        info!(
            voice_id,
            chunks = stats.chunks,
            bytes = stats.bytes,
            "synthesis stream complete"
        );
        Ok(stats)
    }
}
