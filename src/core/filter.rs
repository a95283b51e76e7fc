use super::models::{
    Difficulty,
    PromptRecord,
    UNIVERSAL_PLATFORM,
};

/// One immutable snapshot of the five filter axes. `None` on an axis means
/// "all": the predicate is vacuously true and never compared against data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub platform: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub framework: Option<String>,
    /// Lowercased, trimmed. Empty means no search.
    pub search: String,
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        self.platform.is_none()
            && self.category.is_none()
            && self.difficulty.is_none()
            && self.framework.is_none()
            && self.search.is_empty()
    }
}

/// Pure filter pass: returns the indices of records matching every axis,
/// in input order. No ranking, no reordering, no duplication.
pub fn matching_indices(records: &[PromptRecord], filters: &FilterState) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record_matches(record, filters))
        .map(|(idx, _)| idx)
        .collect()
}

pub fn record_matches(record: &PromptRecord, filters: &FilterState) -> bool {
    matches_platform(record, filters.platform.as_deref())
        && matches_category(record, filters.category.as_deref())
        && matches_difficulty(record, filters.difficulty)
        && matches_framework(record, filters.framework.as_deref())
        && matches_search(record, &filters.search)
}

fn matches_platform(record: &PromptRecord, platform: Option<&str>) -> bool {
    match platform {
        None => true,
        Some(id) => {
            record.platforms.iter().any(|p| p == id || p == UNIVERSAL_PLATFORM)
        }
    }
}

fn matches_category(record: &PromptRecord, category: Option<&str>) -> bool {
    match category {
        None => true,
        Some(slug) => record.category == slug,
    }
}

fn matches_difficulty(record: &PromptRecord, difficulty: Option<Difficulty>) -> bool {
    match difficulty {
        None => true,
        // A record without a difficulty fails any non-"all" difficulty filter.
        Some(wanted) => record.difficulty == Some(wanted),
    }
}

fn matches_framework(record: &PromptRecord, framework: Option<&str>) -> bool {
    match framework {
        None => true,
        Some(id) => record.frameworks.iter().any(|f| f == id),
    }
}

fn matches_search(record: &PromptRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    record.searchable_text().contains(query)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::core::fixture;

    fn record(id: &str, platforms: &[&str]) -> PromptRecord {
        PromptRecord {
            id: id.to_string(),
            title: format!("Title {}", id),
            category: "context".to_string(),
            platforms: platforms.iter().map(|s| s.to_string()).collect(),
            prompt: "Explain {{TOPIC}} briefly.".to_string(),
            why_it_works: "Because reasons.".to_string(),
            platform_notes: HashMap::new(),
            tags: vec!["explanation".to_string()],
            difficulty: Some(Difficulty::Beginner),
            frameworks: vec!["3c".to_string()],
        }
    }

    #[test]
    fn all_axes_default_is_identity() {
        let records = vec![record("a", &["claude"]), record("b", &["gemini"])];
        let indices = matching_indices(&records, &FilterState::default());
        assert_eq!(indices, vec![0, 1]);
    }

    #[test]
    fn result_is_an_ordered_subsequence() {
        let records =
            vec![record("a", &["claude"]), record("b", &["gemini"]), record("c", &["claude"])];
        let filters =
            FilterState { platform: Some("claude".to_string()), ..FilterState::default() };
        assert_eq!(matching_indices(&records, &filters), vec![0, 2]);
    }

    #[test]
    fn universal_records_match_any_platform() {
        let records = vec![record("a", &["universal"]), record("b", &["gemini"])];
        let filters =
            FilterState { platform: Some("claude".to_string()), ..FilterState::default() };
        assert_eq!(matching_indices(&records, &filters), vec![0]);
    }

    #[test]
    fn missing_difficulty_fails_a_set_difficulty_filter() {
        let mut no_difficulty = record("a", &["claude"]);
        no_difficulty.difficulty = None;
        let records = vec![no_difficulty, record("b", &["claude"])];
        let filters = FilterState {
            difficulty: Some(Difficulty::Beginner),
            ..FilterState::default()
        };
        assert_eq!(matching_indices(&records, &filters), vec![1]);
    }

    #[test]
    fn empty_frameworks_fail_a_set_framework_filter() {
        let mut bare = record("a", &["claude"]);
        bare.frameworks.clear();
        let records = vec![bare, record("b", &["claude"])];
        let filters =
            FilterState { framework: Some("3c".to_string()), ..FilterState::default() };
        assert_eq!(matching_indices(&records, &filters), vec![1]);
    }

    #[test]
    fn search_scans_framework_ids_not_names() {
        let records = vec![record("a", &["claude"])];
        let hit = FilterState { search: "3c".to_string(), ..FilterState::default() };
        let miss = FilterState {
            search: "context, content, constraints".to_string(),
            ..FilterState::default()
        };
        assert_eq!(matching_indices(&records, &hit), vec![0]);
        assert!(matching_indices(&records, &miss).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let records = vec![record("a", &["claude"])];
        let filters = FilterState { search: "explain {{topic".to_string(), ..Default::default() };
        assert_eq!(matching_indices(&records, &filters), vec![0]);
    }

    #[test]
    fn every_survivor_satisfies_each_predicate_independently() {
        let library = fixture::load().unwrap();
        let filters = FilterState {
            platform: Some("claude".to_string()),
            difficulty: Some(Difficulty::Intermediate),
            search: "context".to_string(),
            ..FilterState::default()
        };
        let indices = matching_indices(&library.prompts, &filters);
        assert!(!indices.is_empty());
        for idx in indices {
            let r = &library.prompts[idx];
            assert!(matches_platform(r, filters.platform.as_deref()));
            assert!(matches_difficulty(r, filters.difficulty));
            assert!(matches_search(r, &filters.search));
        }
    }

    #[test]
    fn scenario_chain_of_thought_search() {
        let library = fixture::load().unwrap();
        let filters =
            FilterState { search: "chain of thought".to_string(), ..FilterState::default() };
        let indices = matching_indices(&library.prompts, &filters);
        assert_eq!(indices.len(), 3);
        for idx in indices {
            assert_eq!(library.prompts[idx].category, "chain-of-thought");
        }
    }

    #[test]
    fn scenario_claude_platform_includes_universal_excludes_gemini_only() {
        let library = fixture::load().unwrap();
        let filters =
            FilterState { platform: Some("claude".to_string()), ..FilterState::default() };
        let indices = matching_indices(&library.prompts, &filters);
        for idx in &indices {
            let r = &library.prompts[*idx];
            assert!(
                r.platforms.iter().any(|p| p == "claude" || p == "universal"),
                "{} slipped through the platform filter",
                r.id
            );
        }
        // Gemini-only records exist in the fixture and must be excluded.
        let gemini_only =
            library.prompts.iter().filter(|r| r.platforms == ["gemini"]).count();
        assert!(gemini_only > 0);
        assert_eq!(indices.len(), library.prompts.len() - gemini_only
            - library.prompts.iter().filter(|r| r.platforms == ["chatgpt"]).count());
    }

    #[test]
    fn scenario_cot_framework_requires_membership() {
        let library = fixture::load().unwrap();
        let filters =
            FilterState { framework: Some("cot".to_string()), ..FilterState::default() };
        let indices = matching_indices(&library.prompts, &filters);
        assert!(!indices.is_empty());
        for idx in indices {
            assert!(library.prompts[idx].frameworks.iter().any(|f| f == "cot"));
        }
    }

    #[test]
    fn scenario_clearing_filters_restores_everything() {
        let library = fixture::load().unwrap();
        let narrowed = FilterState {
            platform: Some("chatgpt".to_string()),
            difficulty: Some(Difficulty::Advanced),
            search: "bug".to_string(),
            ..FilterState::default()
        };
        let narrow = matching_indices(&library.prompts, &narrowed);
        assert!(narrow.len() < library.prompts.len());

        let cleared = FilterState::default();
        assert!(cleared.is_default());
        let all = matching_indices(&library.prompts, &cleared);
        assert_eq!(all.len(), library.prompts.len());
        assert_eq!(all, (0..library.prompts.len()).collect::<Vec<_>>());
    }
}
