use serde::{Deserialize, Serialize};

/// Remote capabilities an agent can be given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    SpeechSynthesis,
    Translation,
}

impl ToolKind {
    /// Description sent to the platform alongside the model id
    pub fn description(&self) -> &'static str {
        match self {
            ToolKind::SpeechSynthesis => {
                "Converts text to speech for creating audio learning materials"
            }
            ToolKind::Translation => {
                "Translates content between languages to support multilingual education"
            }
        }
    }
}
