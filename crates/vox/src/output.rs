//! Response consumption and audio persistence.
//!
//! Streaming mode pulls chunks and reports the running byte total through a
//! callback; both modes end in the same whole-buffer save path.

use std::io::Write;
use std::path::Path;

use futures::StreamExt;

use crate::client::ByteStream;
use crate::error::{Result, VoxError};

/// Drain a streamed audio body, invoking `progress` with the running total
/// byte count after every chunk. The stream is single-pass; on success the
/// chunks are returned concatenated.
pub async fn consume_stream<F>(mut stream: ByteStream, mut progress: F) -> Result<Vec<u8>>
where
    F: FnMut(usize),
{
    let mut audio = Vec::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        audio.extend_from_slice(&chunk);
        progress(audio.len());
    }
    if audio.is_empty() {
        return Err(VoxError::Protocol(
            "success status but empty audio body".into(),
        ));
    }
    Ok(audio)
}

/// Write the audio buffer to `path`, creating missing parent directories.
/// The write goes through a temp file in the target directory and a rename,
/// so a failed invocation never leaves a truncated artifact.
pub fn save_audio(path: &Path, audio: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            std::fs::create_dir_all(dir)?;
            dir
        }
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(audio)?;
    tmp.persist(path).map_err(|e| VoxError::Io(e.error))?;
    Ok(())
}

/// Map an output file extension to the provider encoding it implies. This
/// silently overrides the nominal `--format` flag when it matches.
pub fn infer_format_from_ext(path: &Path) -> Option<&'static str> {
    match path.extension()?.to_str()?.to_lowercase().as_str() {
        "mp3" => Some("mp3_44100_128"),
        "wav" | "wave" => Some("pcm_44100"),
        _ => None,
    }
}

/// The format actually requested: when the output path's extension implies
/// an encoding, it wins over the nominal flag value.
pub fn effective_format(nominal: &str, output: Option<&Path>) -> String {
    output
        .and_then(infer_format_from_ext)
        .map_or_else(|| nominal.to_string(), str::to_string)
}
