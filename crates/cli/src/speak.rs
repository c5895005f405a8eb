//! The speak pipeline: resolve text and voice, build the request, then
//! stream (or buffer) the audio and optionally save it.

use std::time::{Duration, Instant};

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use vox::output::{consume_stream, effective_format, save_audio};
use vox::text::resolve_text;
use vox::{Config, ElevenLabsClient, Resolution, SynthesisOptions, resolve_voice};

use crate::cli_args::{CliArgs, SpeakArgs};
use crate::status;
use crate::voices::print_voice_table;

fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

pub async fn run(global: &CliArgs, opts: &SpeakArgs) -> Result<()> {
    let voice_token = opts.voice.as_deref().or(opts.voice_id.as_deref());
    let config = Config::resolve(global.api_key.as_deref(), &global.base_url, voice_token)?;
    let client = ElevenLabsClient::new(&config)?;

    // `-v '?'` lists voices and exits.
    if config.voice.as_deref() == Some("?") {
        let voices = client.list_voices(None).await?;
        print_voice_table(&voices);
        return Ok(());
    }

    let text = resolve_text(&opts.text, opts.input_file.as_deref())?;

    // Validate every knob and assemble the request before any network call;
    // a bad flag value must never be masked by a remote failure.
    let options = SynthesisOptions {
        model_id: opts.model_id.clone(),
        output_format: effective_format(&opts.format, opts.output.as_deref()),
        speed: opts.speed,
        rate_wpm: opts.rate,
        stability: opts.stability,
        similarity: opts.similarity,
        similarity_boost: opts.similarity_boost,
        style: opts.style,
        speaker_boost: opts.speaker_boost,
        no_speaker_boost: opts.no_speaker_boost,
        seed: opts.seed,
        normalize: opts.normalize.clone(),
        lang: opts.lang.clone(),
    };
    let request = options.build(text)?;

    let resolution = resolve_voice(&client, config.voice.as_deref()).await?;
    match &resolution {
        Resolution::Default(v) => {
            status::info(&format!("Defaulting to voice {} ({})", v.name, v.voice_id));
        }
        Resolution::Exact(v) => {
            status::info(&format!("Using voice {} ({})", v.name, v.voice_id));
        }
        Resolution::Closest(v) => {
            status::info(&format!(
                "Using closest voice match {} ({})",
                v.name, v.voice_id
            ));
        }
        Resolution::Explicit(_) => {}
    }

    let streaming = opts.stream || !opts.no_stream;

    let bar = spinner("Generating speech...");
    let start = Instant::now();

    let audio = if streaming {
        let stream = client
            .stream_synthesis(resolution.voice_id(), &request, opts.latency_tier)
            .await?;
        consume_stream(stream, |total| {
            let kb = (total as f64 / 1024.0).round() as u64;
            bar.set_message(format!("Generating speech... {kb}KB"));
        })
        .await?
    } else {
        bar.set_message("Converting text to speech...");
        client
            .convert_synthesis(resolution.voice_id(), &request)
            .await?
            .to_vec()
    };

    if let Some(path) = &opts.output {
        save_audio(path, &audio)?;
        status::info(&format!("Audio saved to {}", path.display()));
    }

    bar.finish_with_message("Done");

    if opts.metrics {
        eprintln!(
            "metrics: chars={} bytes={} model={} voice={} stream={} latencyTier={} dur={}ms",
            request.text.len(),
            audio.len(),
            request.model_id,
            resolution.voice_id(),
            streaming,
            opts.latency_tier,
            start.elapsed().as_millis()
        );
    }

    Ok(())
}
