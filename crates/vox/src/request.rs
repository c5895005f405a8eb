//! Synthesis request wire types and flag validation.
//!
//! `SynthesisOptions` carries the raw CLI-level knobs; `build` validates them
//! and assembles the provider-shaped `SynthesisRequest`. Pure transformation,
//! no I/O.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VoxError};

pub const DEFAULT_MODEL: &str = "eleven_v3";
pub const DEFAULT_FORMAT: &str = "mp3_44100_128";

/// The expressive v3 model; the default, but checked by name since stability
/// presets apply to it regardless of how it was selected.
pub const V3_MODEL: &str = "eleven_v3";

/// Baseline speaking rate used to map `--rate` (words per minute) onto the
/// provider's speed multiplier.
pub const DEFAULT_WPM: f64 = 175.0;

/// The expressive model only accepts stability presets, not a continuum.
const V3_STABILITY_PRESETS: [f64; 3] = [0.0, 0.5, 1.0];
const PRESET_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizationMode {
    Auto,
    On,
    Off,
}

impl NormalizationMode {
    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            _ => Err(VoxError::Validation(
                "Normalize must be one of: auto, on, off".into(),
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VoiceSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stability: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_boost: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_speaker_boost: Option<bool>,

    pub speed: f64,
}

/// Request payload for the text-to-speech endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SynthesisRequest {
    pub text: String,
    pub model_id: String,
    pub voice_settings: VoiceSettings,
    pub output_format: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_text_normalization: Option<NormalizationMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

/// Raw option values as parsed from flags, one field per knob.
#[derive(Debug, Clone)]
pub struct SynthesisOptions {
    pub model_id: String,
    pub output_format: String,
    /// Speed multiplier; ignored when `rate_wpm` is supplied.
    pub speed: f64,
    /// Words per minute; takes precedence over `speed`.
    pub rate_wpm: Option<u32>,
    pub stability: Option<f64>,
    pub similarity: Option<f64>,
    /// Alias flag for `similarity`; the primary wins when both are given.
    pub similarity_boost: Option<f64>,
    pub style: Option<f64>,
    pub speaker_boost: bool,
    pub no_speaker_boost: bool,
    pub seed: Option<u64>,
    pub normalize: Option<String>,
    pub lang: Option<String>,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL.to_string(),
            output_format: DEFAULT_FORMAT.to_string(),
            speed: 1.0,
            rate_wpm: None,
            stability: None,
            similarity: None,
            similarity_boost: None,
            style: None,
            speaker_boost: false,
            no_speaker_boost: false,
            seed: None,
            normalize: None,
            lang: None,
        }
    }
}

impl SynthesisOptions {
    /// Compute the effective speed multiplier, in the strict open interval
    /// (0.5, 2.0). A supplied `--rate` maps through `rate / 175`.
    pub fn final_speed(&self) -> Result<f64> {
        if let Some(rate) = self.rate_wpm {
            let speed = rate as f64 / DEFAULT_WPM;
            if speed <= 0.5 || speed >= 2.0 {
                return Err(VoxError::Validation(format!(
                    "Rate {} wpm maps to speed {:.2}, which is outside the allowed 0.5-2.0 range",
                    rate, speed
                )));
            }
            return Ok(speed);
        }
        if self.speed <= 0.5 || self.speed >= 2.0 {
            return Err(VoxError::Validation(
                "Speed must be between 0.5 and 2.0 (e.g. 1.1 for 10% faster)".into(),
            ));
        }
        Ok(self.speed)
    }

    /// Validate every knob and assemble the wire request.
    pub fn build(&self, text: impl Into<String>) -> Result<SynthesisRequest> {
        let speed = self.final_speed()?;

        let mut voice_settings = VoiceSettings {
            stability: None,
            similarity_boost: None,
            style: None,
            use_speaker_boost: None,
            speed,
        };

        if let Some(stability) = self.stability {
            if !(0.0..=1.0).contains(&stability) {
                return Err(VoxError::Validation(
                    "Stability must be between 0 and 1".into(),
                ));
            }
            if self.model_id == V3_MODEL
                && !V3_STABILITY_PRESETS
                    .iter()
                    .any(|preset| (stability - preset).abs() < PRESET_TOLERANCE)
            {
                return Err(VoxError::Validation(format!(
                    "For {}, stability must be one of 0.0, 0.5, 1.0 (Creative/Natural/Robust)",
                    V3_MODEL
                )));
            }
            voice_settings.stability = Some(stability);
        }

        if let Some(similarity) = self.similarity.or(self.similarity_boost) {
            if !(0.0..=1.0).contains(&similarity) {
                return Err(VoxError::Validation(
                    "Similarity must be between 0 and 1".into(),
                ));
            }
            voice_settings.similarity_boost = Some(similarity);
        }

        if let Some(style) = self.style {
            if !(0.0..=1.0).contains(&style) {
                return Err(VoxError::Validation("Style must be between 0 and 1".into()));
            }
            voice_settings.style = Some(style);
        }

        if self.speaker_boost && self.no_speaker_boost {
            return Err(VoxError::Validation(
                "Choose only one of --speaker-boost or --no-speaker-boost".into(),
            ));
        }
        if self.speaker_boost {
            voice_settings.use_speaker_boost = Some(true);
        } else if self.no_speaker_boost {
            voice_settings.use_speaker_boost = Some(false);
        }

        let seed = match self.seed {
            Some(seed) => Some(u32::try_from(seed).map_err(|_| {
                VoxError::Validation("Seed must be between 0 and 4294967295".into())
            })?),
            None => None,
        };

        let apply_text_normalization = self
            .normalize
            .as_deref()
            .map(NormalizationMode::parse)
            .transpose()?;

        let language_code = match self.lang.as_deref() {
            Some(lang) => {
                let lang = lang.trim().to_lowercase();
                if lang.len() != 2 || !lang.bytes().all(|b| b.is_ascii_lowercase()) {
                    return Err(VoxError::Validation(
                        "Lang must be a 2-letter ISO 639-1 code (e.g. en, de, fr)".into(),
                    ));
                }
                Some(lang)
            }
            None => None,
        };

        Ok(SynthesisRequest {
            text: text.into(),
            model_id: self.model_id.clone(),
            voice_settings,
            output_format: self.output_format.clone(),
            seed,
            apply_text_normalization,
            language_code,
        })
    }
}
