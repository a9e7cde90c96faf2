//! Tutor agent modes.
//!
//! The tutor agent runs in one of four modes. Each mode fixes the voice the
//! agent speaks with and the role it plays, so switching mode is a matter of
//! parsing the requested mode and rebuilding the agent from its
//! [`ModeConfig`]. Mode strings that are not listed here cannot be
//! represented.

use crate::voice::VoiceProfile;
use serde::{Deserialize, Serialize};

/// The mode the tutor agent is currently operating in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TutorMode {
    /// Coordinator: asks which mode and concept the learner wants.
    #[default]
    Select,
    /// Explains a concept.
    Learn,
    /// Asks the concept's sample question.
    Quiz,
    /// Asks the learner to explain the concept back.
    TeachBack,
}

/// Voice and role associated with a [`TutorMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeConfig {
    /// Voice used while in this mode.
    pub voice: VoiceProfile,
    /// One-line role given to the LLM.
    pub role: &'static str,
}

/// A unit of tutor content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub sample_question: String,
}

impl TutorMode {
    /// Modes a learner may switch into. `Select` is only the starting mode.
    pub const SWITCHABLE: [TutorMode; 3] = [Self::Learn, Self::Quiz, Self::TeachBack];

    /// Returns the canonical string label for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Learn => "learn",
            Self::Quiz => "quiz",
            Self::TeachBack => "teach_back",
        }
    }

    /// Returns the voice and role for this mode.
    pub fn config(self) -> ModeConfig {
        let (voice, role) = match self {
            Self::Select => ("en-US-matthew", "You are a tutor coordinator."),
            Self::Learn => ("en-US-matthew", "You are an explainer."),
            Self::Quiz => ("en-US-alicia", "You are a quiz master."),
            Self::TeachBack => ("en-US-ken", "You are a reviewer."),
        };
        ModeConfig {
            voice: VoiceProfile::new(voice),
            role,
        }
    }

    /// Whether this mode operates on a concept.
    pub fn needs_concept(self) -> bool {
        !matches!(self, Self::Select)
    }

    /// Builds the agent instructions for this mode.
    ///
    /// Returns `None` when the mode needs a concept and none was given.
    pub fn instructions(self, concept: Option<&Concept>) -> Option<String> {
        let role = self.config().role;
        match (self, concept) {
            (Self::Select, _) => Some(format!(
                "{role} Ask the learner which mode they want (learn, quiz or teach_back) \
                 and which concept, then call switch_mode(new_mode, concept_id)."
            )),
            (Self::Learn, Some(c)) => Some(format!(
                "{role} Teach: {}. Summary: {}",
                c.title, c.summary
            )),
            (Self::Quiz, Some(c)) => Some(format!("{role} Ask: {}", c.sample_question)),
            (Self::TeachBack, Some(c)) => Some(format!(
                "{role} Ask the learner to explain {}",
                c.title
            )),
            (_, None) => None,
        }
    }
}

impl std::fmt::Display for TutorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TutorMode {
    type Err = ParseTutorModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "select" => Ok(Self::Select),
            "learn" => Ok(Self::Learn),
            "quiz" => Ok(Self::Quiz),
            "teach_back" => Ok(Self::TeachBack),
            _ => Err(ParseTutorModeError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown tutor mode string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tutor mode: {0}")]
pub struct ParseTutorModeError(pub String);

/// Finds a concept by id, ignoring case and surrounding whitespace.
pub fn find_concept<'a>(concepts: &'a [Concept], id: &str) -> Option<&'a Concept> {
    let wanted = id.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    concepts.iter().find(|c| c.id.to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variables() -> Concept {
        Concept {
            id: "variables".to_string(),
            title: "Variables".to_string(),
            summary: "Named storage for values.".to_string(),
            sample_question: "What is a variable?".to_string(),
        }
    }

    #[test]
    fn parses_every_mode_label() {
        for mode in [
            TutorMode::Select,
            TutorMode::Learn,
            TutorMode::Quiz,
            TutorMode::TeachBack,
        ] {
            assert_eq!(mode.as_str().parse::<TutorMode>(), Ok(mode));
        }
        assert_eq!(" Quiz ".parse::<TutorMode>(), Ok(TutorMode::Quiz));
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = "lecture".parse::<TutorMode>().unwrap_err();
        assert_eq!(err.to_string(), "unknown tutor mode: lecture");
    }

    #[test]
    fn each_mode_has_its_voice() {
        assert_eq!(TutorMode::Learn.config().voice.voice_id, "en-US-matthew");
        assert_eq!(TutorMode::Quiz.config().voice.voice_id, "en-US-alicia");
        assert_eq!(TutorMode::TeachBack.config().voice.voice_id, "en-US-ken");
        assert!(!TutorMode::SWITCHABLE.contains(&TutorMode::Select));
    }

    #[test]
    fn concept_modes_need_a_concept() {
        assert!(TutorMode::Select.instructions(None).is_some());
        assert!(TutorMode::Quiz.instructions(None).is_none());

        let concept = variables();
        let quiz = TutorMode::Quiz
            .instructions(Some(&concept))
            .expect("quiz has a concept");
        assert!(quiz.contains("What is a variable?"));
    }

    #[test]
    fn concept_lookup_ignores_case() {
        let concepts = vec![variables()];
        assert!(find_concept(&concepts, "  VARIABLES ").is_some());
        assert!(find_concept(&concepts, "loops").is_none());
        assert!(find_concept(&concepts, "").is_none());
    }
}
