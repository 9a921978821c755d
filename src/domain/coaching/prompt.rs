//! System prompt built from a scored profile.

use crate::domain::questionnaire::Axis;
use crate::domain::scoring::{classify_dominant, ColorProfile, Scores, StyleNarrative};

/// Everything the coach needs to know about the person asking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachingPrompt {
    pub scores: Scores,
    pub dominant: ColorProfile,
    pub narrative: StyleNarrative,
}

impl CoachingPrompt {
    pub fn from_scores(scores: Scores) -> Self {
        Self {
            dominant: classify_dominant(&scores),
            narrative: StyleNarrative::from_scores(&scores),
            scores,
        }
    }

    /// Renders the system prompt sent ahead of the conversation.
    pub fn system_prompt(&self) -> String {
        let mut prompt = String::from(
            "You are a workplace communication coach. The person you are talking to \
             completed a four-color communication style questionnaire.\n\n",
        );

        prompt.push_str("Axis scores (each pair sums to the same total):\n");
        for (axis, meaning) in [
            (Axis::A, "outgoing"),
            (Axis::B, "reserved"),
            (Axis::C, "task-focused"),
            (Axis::D, "people-focused"),
        ] {
            prompt.push_str(&format!("- {} ({}): {}\n", axis, meaning, self.scores[axis]));
        }

        prompt.push_str(&format!(
            "\nDominant style: {} ({}). {}\n",
            self.dominant,
            self.dominant.title(),
            self.dominant.description()
        ));
        prompt.push_str(&format!("Style blend: {}\n", self.narrative.summary()));

        prompt.push_str(
            "\nGive practical, specific advice grounded in this profile. \
             Answer in markdown. Keep it under 300 words unless asked for more.",
        );
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_includes_scores_and_dominant_style() {
        let prompt = CoachingPrompt::from_scores(Scores::new(60, 15, 50, 25));
        assert_eq!(prompt.dominant, ColorProfile::Red);

        let text = prompt.system_prompt();
        assert!(text.contains("- A (outgoing): 60"));
        assert!(text.contains("- D (people-focused): 25"));
        assert!(text.contains("Dominant style: Red (The Director)"));
        assert!(text.contains("Primarily Red"));
    }
}
