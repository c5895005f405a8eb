use thiserror::Error;

/// Error types that can occur while resolving input, building a synthesis
/// request, or talking to the ElevenLabs API.
#[derive(Error, Debug)]
pub enum VoxError {
    /// A flag value was out of range or inconsistent with another flag.
    /// Reported before any network call is attempted.
    #[error("{0}")]
    Validation(String),

    /// No API key could be resolved from flags or the environment.
    #[error("Missing ElevenLabs API key. Set --api-key or ELEVENLABS_API_KEY")]
    MissingCredential,

    /// The resolved text was empty after trimming.
    #[error("Input was empty")]
    EmptyInput,

    /// Stdin is an interactive terminal and no other text source was given.
    #[error("No text provided; pass text args, --input-file, or pipe input")]
    NoInputProvided,

    /// A voice name query matched nothing, even as a partial result.
    #[error("Voice \"{0}\" not found; try 'vox voices' or -v '?'")]
    VoiceNotFound(String),

    /// The remote listing came back empty when picking a default voice.
    #[error("No voices available; specify --voice or set ELEVENLABS_VOICE_ID")]
    NoVoicesAvailable,

    /// Non-success HTTP status from the API, body text carried verbatim.
    #[error("ElevenLabs API error: {status}: {body}")]
    Remote { status: u16, body: String },

    /// Success status but the response body was not what the API promises.
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("HTTP Error: {0}")]
    Http(String),

    /// Handles JSON serialization and deserialization errors.
    #[error("JSON Error")]
    Json(#[from] serde_json::Error),

    /// Handles errors from parsing URLs.
    #[error("Invalid URL")]
    InvalidUrl(#[from] url::ParseError),

    /// Handles standard I/O errors.
    #[error("I/O Error")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for VoxError {
    fn from(err: reqwest::Error) -> Self {
        VoxError::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, VoxError>;
