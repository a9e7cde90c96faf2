//! Voice profile definitions.
//!
//! A `VoiceProfile` names the TTS voice an agent speaks with and the
//! sentence pacing applied before synthesis. The synthesis itself happens in
//! an external provider.

use serde::{Deserialize, Serialize};

/// Delivery style requested from the TTS provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeechStyle {
    /// Relaxed conversational delivery.
    #[default]
    Conversation,
    /// Narration, used for longer descriptive passages.
    Narration,
    /// Promotional, upbeat delivery.
    Promo,
}

impl SpeechStyle {
    /// Returns the provider-facing style label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Conversation => "Conversation",
            Self::Narration => "Narration",
            Self::Promo => "Promo",
        }
    }
}

/// A voice profile configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceProfile {
    /// Provider voice identifier, e.g. `en-US-ken`.
    pub voice_id: String,
    /// Delivery style.
    #[serde(default)]
    pub style: SpeechStyle,
    /// Sentences shorter than this many characters are merged with the next
    /// one before being sent for synthesis.
    #[serde(default = "default_min_sentence_len")]
    pub min_sentence_len: usize,
    /// Whether the provider should pace text output to audio playback.
    #[serde(default = "default_text_pacing")]
    pub text_pacing: bool,
}

fn default_min_sentence_len() -> usize {
    2
}

fn default_text_pacing() -> bool {
    true
}

impl VoiceProfile {
    /// Creates a conversational profile for the given voice id.
    pub fn new(voice_id: impl Into<String>) -> Self {
        Self {
            voice_id: voice_id.into(),
            style: SpeechStyle::Conversation,
            min_sentence_len: default_min_sentence_len(),
            text_pacing: default_text_pacing(),
        }
    }
}

impl Default for VoiceProfile {
    fn default() -> Self {
        Self::new("en-US-ken")
    }
}
