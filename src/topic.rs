use std::fmt;
use std::fmt::{Display, Formatter};

use serde::Serialize;

/// Closed set of blog categories. `All` is the filter sentinel meaning
/// "no filter" and is not a valid topic for an authored post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Topic {
    #[serde(rename = "All")]
    All,
    #[serde(rename = "GPT-2 CUDA")]
    Gpt2Cuda,
    #[serde(rename = "MeOoOw Processor")]
    MeoowProcessor,
    #[serde(rename = "CosmOS")]
    CosmOs,
    #[serde(rename = "Personal")]
    Personal,
    #[serde(rename = "Music Synthesizer")]
    MusicSynthesizer,
}

impl Topic {
    /// Every topic in display order, `All` first. Filter bars enumerate this.
    pub const ALL: [Topic; 6] = [
        Topic::All,
        Topic::Gpt2Cuda,
        Topic::MeoowProcessor,
        Topic::CosmOs,
        Topic::Personal,
        Topic::MusicSynthesizer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Topic::All => "All",
            Topic::Gpt2Cuda => "GPT-2 CUDA",
            Topic::MeoowProcessor => "MeOoOw Processor",
            Topic::CosmOs => "CosmOS",
            Topic::Personal => "Personal",
            Topic::MusicSynthesizer => "Music Synthesizer",
        }
    }

    /// Exact-match lookup from a display label. Unknown labels are `None`,
    /// never an error.
    pub fn from_label(label: &str) -> Option<Topic> {
        Topic::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl Display for Topic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_round_trip() {
        for topic in Topic::ALL {
            assert_eq!(Topic::from_label(topic.label()), Some(topic));
        }
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(Topic::from_label("Quantum Basket Weaving"), None);
        // Matching is case-sensitive and exact
        assert_eq!(Topic::from_label("gpt-2 cuda"), None);
        assert_eq!(Topic::from_label(""), None);
    }

    #[test]
    fn test_all_is_first() {
        assert_eq!(Topic::ALL[0], Topic::All);
    }
}
