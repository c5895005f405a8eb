//! Startup configuration resolved once and threaded into the client and
//! resolvers. No ambient environment lookups happen past this point.

use crate::error::{Result, VoxError};

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

pub const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";
pub const API_KEY_ENV_FALLBACK: &str = "VOX_API_KEY";
pub const VOICE_ID_ENV: &str = "ELEVENLABS_VOICE_ID";
pub const VOICE_ID_ENV_FALLBACK: &str = "VOX_VOICE_ID";

/// Resolved invocation configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    /// User-supplied voice token, if any: an ID, a name query, or `?`.
    pub voice: Option<String>,
}

impl Config {
    /// Resolve configuration from explicit flags and the environment.
    ///
    /// Priority order for the credential:
    /// 1. `--api-key` flag
    /// 2. `ELEVENLABS_API_KEY`
    /// 3. `VOX_API_KEY`
    ///
    /// The default voice token follows the same flag-then-env chain and may
    /// legitimately be absent (the resolver then falls back to the first
    /// remotely listed voice).
    pub fn resolve(
        api_key: Option<&str>,
        base_url: &str,
        voice: Option<&str>,
    ) -> Result<Self> {
        let api_key = api_key
            .map(str::to_owned)
            .or_else(|| env_non_empty(API_KEY_ENV))
            .or_else(|| env_non_empty(API_KEY_ENV_FALLBACK))
            .ok_or(VoxError::MissingCredential)?;

        let voice = voice
            .map(str::to_owned)
            .or_else(|| env_non_empty(VOICE_ID_ENV))
            .or_else(|| env_non_empty(VOICE_ID_ENV_FALLBACK));

        Ok(Self {
            api_key,
            base_url: base_url.to_string(),
            voice,
        })
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
