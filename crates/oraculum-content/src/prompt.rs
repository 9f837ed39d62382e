//! The prompt library entry and its category facet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category of a library prompt.
///
/// A fixed enumerated set; the uppercase display forms double as the wire
/// representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Prompts that diagnose what the business actually has.
    Diagnosis,
    /// Prompts that shape strategy.
    Strategy,
    /// Prompts that produce concrete artifacts (scripts, proposals).
    Execution,
    /// Prompts that reframe a limitation.
    Reframe,
    /// Prompts that generate better questions.
    Thinking,
    /// Prompts about market positioning.
    Positioning,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Category::Diagnosis,
        Category::Strategy,
        Category::Execution,
        Category::Reframe,
        Category::Thinking,
        Category::Positioning,
    ];

    /// Uppercase display form (also the wire form).
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Diagnosis => "DIAGNOSIS",
            Category::Strategy => "STRATEGY",
            Category::Execution => "EXECUTION",
            Category::Reframe => "REFRAME",
            Category::Thinking => "THINKING",
            Category::Positioning => "POSITIONING",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Parses a category case-insensitively from its display form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DIAGNOSIS" => Ok(Category::Diagnosis),
            "STRATEGY" => Ok(Category::Strategy),
            "EXECUTION" => Ok(Category::Execution),
            "REFRAME" => Ok(Category::Reframe),
            "THINKING" => Ok(Category::Thinking),
            "POSITIONING" => Ok(Category::Positioning),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognized category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

/// A library prompt template.
///
/// Lives in its own fixed list, separate from the principles; the
/// `principle` field is a loose association by uppercase display name (some
/// entries reference principle combinations that have no slug).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptEntry {
    /// Stable numeric identifier within the library.
    pub id: u32,
    /// Entry title.
    pub title: String,
    /// Category facet.
    pub category: Category,
    /// Associated principle, uppercase display form.
    pub principle: String,
    /// The template text the user copies into an assistant.
    pub template: String,
    /// What the template does for the reader.
    pub description: String,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Marks premium/featured templates ("Genius Extraction").
    #[serde(default)]
    pub flagship: bool,
    /// Outbound link to a preconfigured external tool, when one exists.
    ///
    /// Navigation only — the prompt text is never transmitted anywhere by
    /// this system; the user pastes clipboard content manually.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_tool_url: Option<String>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display_forms() {
        assert_eq!(Category::Diagnosis.to_string(), "DIAGNOSIS");
        assert_eq!(Category::Positioning.to_string(), "POSITIONING");
    }

    #[test]
    fn test_category_serialization_uses_display_form() {
        let json = serde_json::to_string(&Category::Reframe).unwrap();
        assert_eq!(json, "\"REFRAME\"");
    }

    #[test]
    fn test_category_deserialization() {
        let category: Category = serde_json::from_str("\"THINKING\"").unwrap();
        assert_eq!(category, Category::Thinking);
    }

    #[test]
    fn test_category_from_str_case_insensitive() {
        assert_eq!("strategy".parse::<Category>().unwrap(), Category::Strategy);
        assert_eq!("  Execution ".parse::<Category>().unwrap(), Category::Execution);
    }

    #[test]
    fn test_category_from_str_unknown() {
        let err = "MARKETING".parse::<Category>().unwrap_err();
        assert_eq!(err.to_string(), "unknown category: MARKETING");
    }

    #[test]
    fn test_category_all_is_exhaustive() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_prompt_entry_roundtrip() {
        let entry = PromptEntry {
            id: 2,
            title: "Three Ways Growth Calculator".to_string(),
            category: Category::Strategy,
            principle: "VALUE MULTIPLICATION".to_string(),
            template: "Using the Three Ways framework...".to_string(),
            description: "The compound math.".to_string(),
            tags: vec!["growth".to_string(), "math".to_string()],
            flagship: false,
            external_tool_url: None,
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"STRATEGY\""));
        assert!(!json.contains("external_tool_url"));

        let back: PromptEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, 2);
        assert_eq!(back.category, Category::Strategy);
        assert!(!back.flagship);
    }
}
