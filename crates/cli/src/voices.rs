//! The voices listing command.

use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use vox::{Config, ElevenLabsClient, Voice};

use crate::cli_args::CliArgs;
use crate::status;

pub async fn run(global: &CliArgs, search: Option<&str>, limit: usize) -> Result<()> {
    let config = Config::resolve(global.api_key.as_deref(), &global.base_url, None)?;
    let client = ElevenLabsClient::new(&config)?;

    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    bar.set_message("Fetching voices...");
    bar.enable_steady_tick(Duration::from_millis(80));

    let result = client.list_voices(search).await;
    bar.finish_and_clear();
    let mut voices = result?;

    if limit > 0 && voices.len() > limit {
        voices.truncate(limit);
    }

    print_voice_table(&voices);

    if voices.is_empty() {
        status::info("No voices found");
    }
    Ok(())
}

pub fn print_voice_table(voices: &[Voice]) {
    println!(
        "{}  {}  CATEGORY",
        pad_right("VOICE ID", 24),
        pad_right("NAME", 24)
    );
    for v in voices {
        println!(
            "{}  {}  {}",
            pad_right(&v.voice_id, 24),
            pad_right(&v.name, 24),
            v.category
        );
    }
}

/// Pad or truncate to a fixed column width, counting chars so multi-byte
/// names do not panic.
fn pad_right(s: &str, len: usize) -> String {
    let truncated: String = s.chars().take(len).collect();
    format!("{truncated:<len$}")
}
