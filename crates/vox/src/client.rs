//! HTTP client for the ElevenLabs API.
//!
//! Three remote operations: list voices, streaming synthesis, and buffered
//! synthesis. Every call carries the `xi-api-key` header; the base URL is
//! configurable and defaults to the production endpoint.

use std::collections::HashMap;
use std::pin::Pin;

use bytes::Bytes;
use futures::{Stream, StreamExt};
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::Config;
use crate::error::{Result, VoxError};
use crate::request::SynthesisRequest;

/// A named synthesis persona exposed by the remote provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Voice {
    pub voice_id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListVoicesResponse {
    voices: Vec<Voice>,
}

/// Finite, single-pass sequence of audio chunks. Not restartable.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>;

pub struct ElevenLabsClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl ElevenLabsClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: Url::parse(&config.base_url)?,
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Turn a non-success response into `VoxError::Remote`, carrying the
    /// status and body text verbatim.
    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(VoxError::Remote {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp)
    }

    /// List available voices, optionally filtered server-side by `search`.
    pub async fn list_voices(&self, search: Option<&str>) -> Result<Vec<Voice>> {
        let mut url = self.endpoint("/v1/voices")?;
        if let Some(term) = search {
            url.query_pairs_mut().append_pair("search", term);
        }

        log::debug!("GET {}", url);
        let resp = self
            .http
            .get(url)
            .header("xi-api-key", &self.api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let resp = Self::check_status(resp).await?;

        let body: ListVoicesResponse = resp.json().await?;
        Ok(body.voices)
    }

    /// Submit a synthesis request and stream the audio body back chunk by
    /// chunk. `optimize_streaming_latency` is appended only for tiers > 0.
    pub async fn stream_synthesis(
        &self,
        voice_id: &str,
        request: &SynthesisRequest,
        latency_tier: u8,
    ) -> Result<ByteStream> {
        let mut url = self.endpoint(&format!("/v1/text-to-speech/{voice_id}/stream"))?;
        if latency_tier > 0 {
            url.query_pairs_mut()
                .append_pair("optimize_streaming_latency", &latency_tier.to_string());
        }

        log::debug!("POST {} ({} chars)", url, request.text.len());
        let resp = self
            .http
            .post(url)
            .header("xi-api-key", &self.api_key)
            .header(ACCEPT, "audio/mpeg")
            .json(request)
            .send()
            .await?;
        let resp = Self::check_status(resp).await?;

        Ok(Box::pin(
            resp.bytes_stream().map(|chunk| chunk.map_err(VoxError::from)),
        ))
    }

    /// Submit a synthesis request and buffer the complete audio body.
    pub async fn convert_synthesis(
        &self,
        voice_id: &str,
        request: &SynthesisRequest,
    ) -> Result<Bytes> {
        let url = self.endpoint(&format!("/v1/text-to-speech/{voice_id}"))?;

        log::debug!("POST {} ({} chars)", url, request.text.len());
        let resp = self
            .http
            .post(url)
            .header("xi-api-key", &self.api_key)
            .header(ACCEPT, "audio/mpeg")
            .json(request)
            .send()
            .await?;
        let resp = Self::check_status(resp).await?;

        let audio = resp.bytes().await?;
        if audio.is_empty() {
            return Err(VoxError::Protocol(
                "success status but empty audio body".into(),
            ));
        }
        Ok(audio)
    }
}
