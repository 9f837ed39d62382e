//! The principle record and its nested sections.
//!
//! A [`Principle`] drives one detail page plus cross-links from the library.
//! Sections that may be unwritten (`narrative`, `key_insight`,
//! `ai_rationale`) are `Option<String>` — the placeholder sentinel is
//! collapsed at construction time, never stored.

use serde::{Deserialize, Serialize};

/// One of the seven strategic principles.
///
/// Records are ordered by `number` (1-based, dense), and storage order
/// matches that ordering, so previous/next navigation is positional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principle {
    /// Stable external reference key (lowercase kebab-case, unique).
    pub slug: String,
    /// 1-based ordinal position; defines display and navigation order.
    pub number: u32,
    /// Display title.
    pub title: String,
    /// Display subtitle (uppercase tagline).
    pub subtitle: String,
    /// Signature quote.
    pub quote: String,
    /// One-sentence statement of the principle.
    pub core_principle: String,
    /// Long-form narrative. `None` when the copy is not yet written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    /// The key insight pull-out. `None` when not yet written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_insight: Option<String>,
    /// Illustrative stories; may be empty.
    pub stories: Vec<Story>,
    /// Self-reflection checks; may be empty.
    pub reflection_prompts: Vec<ReflectionPrompt>,
    /// How the principle maps onto AI-assisted work. `None` when not yet written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_rationale: Option<String>,
    /// The copyable prompt template attached to this principle.
    pub extraction_prompt: ExtractionPrompt,
}

/// A narrative case study attached to a principle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    /// Story title.
    pub title: String,
    /// One-line hook shown before the body.
    pub hook: String,
    /// Story body.
    pub narrative: String,
    /// The lesson drawn at the end.
    pub lesson: String,
}

/// A self-reflection check: one area of the reader's business, one question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReflectionPrompt {
    /// Area the question examines (e.g. "Your Calendar").
    pub area: String,
    /// The question itself.
    pub question: String,
}

/// The copyable AI prompt template attached to a principle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionPrompt {
    /// Template title.
    pub title: String,
    /// What the template does for the reader.
    pub description: String,
    /// The template text the user copies into an assistant.
    pub template: String,
    /// Marks premium/featured templates. Purely a display distinction.
    pub flagship: bool,
}

impl Principle {
    /// Uppercase display form of the title, as the library facets use it.
    pub fn display_name(&self) -> String {
        self.title.to_uppercase()
    }

    /// Returns `true` if any long-form section has written copy.
    ///
    /// Detail views use this to decide between the full layout and the
    /// quote-plus-prompt teaser layout.
    pub fn has_written_sections(&self) -> bool {
        self.narrative.is_some()
            || self.key_insight.is_some()
            || self.ai_rationale.is_some()
            || !self.stories.is_empty()
            || !self.reflection_prompts.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_principle() -> Principle {
        Principle {
            slug: "irreplaceability".to_string(),
            number: 2,
            title: "Irreplaceability".to_string(),
            subtitle: "BECOME THE ONLY LOGICAL CHOICE".to_string(),
            quote: "It's not about being louder.".to_string(),
            core_principle: "Position your business so they can only choose you.".to_string(),
            narrative: None,
            key_insight: None,
            stories: Vec::new(),
            reflection_prompts: Vec::new(),
            ai_rationale: None,
            extraction_prompt: ExtractionPrompt {
                title: "The Irreplaceability Audit".to_string(),
                description: "Evaluate your market position.".to_string(),
                template: "Evaluate and strengthen my market position.".to_string(),
                flagship: true,
            },
        }
    }

    #[test]
    fn test_display_name_is_uppercase_title() {
        assert_eq!(minimal_principle().display_name(), "IRREPLACEABILITY");
    }

    #[test]
    fn test_has_written_sections_false_for_unwritten() {
        assert!(!minimal_principle().has_written_sections());
    }

    #[test]
    fn test_has_written_sections_true_with_narrative() {
        let mut principle = minimal_principle();
        principle.narrative = Some("Written copy.".to_string());
        assert!(principle.has_written_sections());
    }

    #[test]
    fn test_has_written_sections_true_with_stories() {
        let mut principle = minimal_principle();
        principle.stories.push(Story {
            title: "The $1 Million Truck".to_string(),
            hook: "One truck.".to_string(),
            narrative: "A roofing company...".to_string(),
            lesson: "Look again.".to_string(),
        });
        assert!(principle.has_written_sections());
    }

    #[test]
    fn test_unwritten_sections_are_omitted_from_json() {
        let json = serde_json::to_string(&minimal_principle()).unwrap();
        assert!(!json.contains("narrative"));
        assert!(!json.contains("key_insight"));
        assert!(!json.contains("Coming soon"));
    }

    #[test]
    fn test_principle_roundtrip() {
        let principle = minimal_principle();
        let json = serde_json::to_string(&principle).unwrap();
        let back: Principle = serde_json::from_str(&json).unwrap();
        assert_eq!(back.slug, principle.slug);
        assert_eq!(back.number, principle.number);
        assert!(back.narrative.is_none());
    }
}
