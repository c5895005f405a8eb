use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Command line arguments for the vox CLI.
///
/// Bare `vox "some text"` speaks; `speak` is also available as an explicit
/// subcommand alongside `voices` and `prompting`.
#[derive(Parser, Debug)]
#[clap(
    name = "vox",
    version,
    about = "Text to speech from the command line",
    args_conflicts_with_subcommands = true
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub speak: SpeakArgs,

    /// ElevenLabs API key (or ELEVENLABS_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Override the ElevenLabs API base URL
    #[arg(long, global = true, default_value = vox::config::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Load an env file from path before resolving credentials
    #[arg(long, global = true, value_name = "PATH")]
    pub env: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct SpeakArgs {
    /// Text to speak
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Voice ID
    #[arg(long, value_name = "ID")]
    pub voice_id: Option<String>,

    /// Voice name or ID (use "?" to list)
    #[arg(short = 'v', long, value_name = "NAME")]
    pub voice: Option<String>,

    /// ElevenLabs model (eleven_v3, eleven_multilingual_v2, etc.)
    #[arg(long, default_value = vox::request::DEFAULT_MODEL)]
    pub model_id: String,

    /// Save audio to file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Audio format
    #[arg(long, default_value = vox::request::DEFAULT_FORMAT)]
    pub format: String,

    /// Stream audio as it generates (default)
    #[arg(long, overrides_with = "no_stream")]
    pub stream: bool,

    /// Disable streaming (single buffered request instead)
    #[arg(long, overrides_with = "stream")]
    pub no_stream: bool,

    /// Lower = faster first byte (0-4)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=4))]
    pub latency_tier: u8,

    /// Speed multiplier (0.5-2.0)
    #[arg(long, default_value_t = 1.0)]
    pub speed: f64,

    /// Words per minute (default 175)
    #[arg(short = 'r', long, value_name = "WPM")]
    pub rate: Option<u32>,

    /// Read text from file (use "-" for stdin)
    #[arg(short = 'f', long, value_name = "PATH")]
    pub input_file: Option<PathBuf>,

    /// Voice consistency (0-1)
    #[arg(long)]
    pub stability: Option<f64>,

    /// Match to original voice (0-1)
    #[arg(long)]
    pub similarity: Option<f64>,

    /// Same as --similarity
    #[arg(long)]
    pub similarity_boost: Option<f64>,

    /// Expressiveness (0-1)
    #[arg(long)]
    pub style: Option<f64>,

    /// Add clarity
    #[arg(long)]
    pub speaker_boost: bool,

    /// No clarity boost
    #[arg(long)]
    pub no_speaker_boost: bool,

    /// For reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Handle numbers/URLs: auto|on|off
    #[arg(long, value_name = "MODE")]
    pub normalize: Option<String>,

    /// Language (en, de, fr, etc.)
    #[arg(long, value_name = "CODE")]
    pub lang: Option<String>,

    /// Show timing stats
    #[arg(long)]
    pub metrics: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Speak text (streams by default)
    Speak(SpeakArgs),

    /// List voices
    Voices {
        /// Filter by name
        #[arg(long)]
        search: Option<String>,

        /// Max results (0 = all)
        #[arg(long, default_value_t = 100)]
        limit: usize,
    },

    /// Tips for better output
    #[command(aliases = ["guide", "tips"])]
    Prompting,
}
