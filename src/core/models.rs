use std::collections::HashMap;

use serde::Deserialize;

/// Platform id a prompt works on regardless of vendor.
pub const UNIVERSAL_PLATFORM: &str = "universal";

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] =
        [Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Advanced];

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct PromptRecord {
    pub id: String,                  // Unique identifier
    pub title: String,
    pub category: String,            // Category slug
    pub platforms: Vec<String>,      // Platform ids, non-empty
    pub prompt: String,              // May contain {{TOKEN}} placeholders
    pub why_it_works: String,
    #[serde(default)]
    pub platform_notes: HashMap<String, String>, // platform id -> note
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub frameworks: Vec<String>,     // Framework ids, may be empty
}

impl PromptRecord {
    /// Lowercased haystack for substring search. Framework ids are scanned
    /// raw (so "cot" matches), not resolved to display names.
    pub fn searchable_text(&self) -> String {
        let mut parts: Vec<&str> = vec![&self.title, &self.prompt, &self.why_it_works];
        parts.extend(self.tags.iter().map(String::as_str));
        parts.extend(self.frameworks.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Platform {
    pub id: String,
    pub name: String,
    pub company: String,
    pub color: String,               // Hex, e.g. "#7C3AED"
}

#[derive(Deserialize, Debug, Clone)]
pub struct Category {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Framework {
    pub id: String,
    pub name: String,
    pub short_label: String,
    pub color: String,
    pub description: String,
}

/// The whole static catalog: records plus the lookup tables that decorate
/// rendering. Loaded once at startup, never mutated.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct Library {
    #[serde(default)]
    pub platforms: Vec<Platform>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub frameworks: Vec<Framework>,
    #[serde(default)]
    pub prompts: Vec<PromptRecord>,
}

impl Library {
    pub fn platform(&self, id: &str) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }

    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    pub fn framework(&self, id: &str) -> Option<&Framework> {
        self.frameworks.iter().find(|f| f.id == id)
    }
}
