//! ElevenLabs text-to-speech pipeline.
//!
//! The crate covers the request/response pipeline behind the `vox` CLI:
//! resolving the text payload, mapping a human voice token to a concrete
//! voice ID, validating flag values into a provider-shaped request, and
//! consuming the streamed (or buffered) audio body.
//!
//! One network exchange per invocation; no retries, no caching, no state
//! between runs.

pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod request;
pub mod text;
pub mod voice;

pub use client::{ByteStream, ElevenLabsClient, Voice};
pub use config::Config;
pub use error::{Result, VoxError};
pub use request::{NormalizationMode, SynthesisOptions, SynthesisRequest, VoiceSettings};
pub use voice::{Resolution, VoiceDirectory, VoiceRef, resolve_voice};
