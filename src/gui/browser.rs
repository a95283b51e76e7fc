use std::{
    collections::HashMap,
    time::{
        Duration,
        Instant,
    },
};

use super::countdown::Countdown;
use crate::core::{
    filter::{
        matching_indices,
        FilterState,
    },
    models::{
        Difficulty,
        PromptRecord,
    },
    template,
};

const SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

/// Transient per-card UI state. Created when a record enters the visible
/// set, dropped wholesale on the next filter pass — cards are rebuilt from
/// scratch, so variable bindings and the notes toggle do not persist
/// across filter changes.
pub struct CardState {
    /// token name -> current value, in first-occurrence order.
    pub bindings: Vec<(String, String)>,
    pub notes_expanded: bool,
    pub copied: Countdown,
}

impl CardState {
    fn for_record(record: &PromptRecord) -> Self {
        Self {
            bindings: template::extract_variables(&record.prompt)
                .into_iter()
                .map(|token| (token, String::new()))
                .collect(),
            notes_expanded: false,
            copied: Countdown::default(),
        }
    }
}

/// Owns the only mutable filter state and the recompute bookkeeping.
/// UI controls mutate it through the setters; the frame loop calls
/// [`BrowserState::tick`] and [`BrowserState::ensure_indices`].
pub struct BrowserState {
    filters: FilterState,
    /// Raw search box content; folded into `filters.search` only after the
    /// debounce window closes.
    pub search_input: String,
    search_debounce: Countdown,
    visible_indices: Vec<usize>,
    dirty: bool,
    cards: HashMap<String, CardState>,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self {
            filters: FilterState::default(),
            search_input: String::new(),
            search_debounce: Countdown::default(),
            visible_indices: Vec::new(),
            dirty: true,
            cards: HashMap::new(),
        }
    }
}

impl BrowserState {
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn has_active_filters(&self) -> bool {
        !self.filters.is_default() || !self.search_input.is_empty()
    }

    pub fn set_platform(&mut self, platform: Option<String>) {
        if self.filters.platform != platform {
            self.filters.platform = platform;
            self.dirty = true;
        }
    }

    pub fn set_category(&mut self, category: Option<String>) {
        if self.filters.category != category {
            self.filters.category = category;
            self.dirty = true;
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Option<Difficulty>) {
        if self.filters.difficulty != difficulty {
            self.filters.difficulty = difficulty;
            self.dirty = true;
        }
    }

    pub fn set_framework(&mut self, framework: Option<String>) {
        if self.filters.framework != framework {
            self.filters.framework = framework;
            self.dirty = true;
        }
    }

    /// Call whenever the search box content changes; the filter pass runs
    /// only after input pauses for the debounce window.
    pub fn search_edited(&mut self) {
        self.search_edited_at(Instant::now());
    }

    pub fn search_edited_at(&mut self, now: Instant) {
        self.search_debounce.arm_at(now, SEARCH_DEBOUNCE);
    }

    /// Escape: drop the search text without waiting out the debounce.
    pub fn clear_search(&mut self) {
        self.search_input.clear();
        self.search_debounce.cancel();
        self.commit_search();
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        self.search_input.clear();
        self.search_debounce.cancel();
        self.dirty = true;
    }

    /// Per-frame timer pump.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        if self.search_debounce.fire_at(now) {
            self.commit_search();
        }
    }

    fn commit_search(&mut self) {
        let normalized = self.search_input.trim().to_lowercase();
        if self.filters.search != normalized {
            self.filters.search = normalized;
            self.dirty = true;
        }
    }

    pub fn ensure_indices(&mut self, records: &[PromptRecord]) {
        let needs_rebuild = self.dirty
            || self.visible_indices.len() > records.len()
            || self.visible_indices.iter().any(|&idx| idx >= records.len());

        if needs_rebuild {
            self.visible_indices = matching_indices(records, &self.filters);
            // Cards are reconstructed from scratch on every pass; excluded
            // cards drop their bindings with them.
            self.cards.clear();
            self.dirty = false;
        }
    }

    pub fn visible_indices(&self) -> &[usize] {
        &self.visible_indices
    }

    pub fn visible_count(&self) -> usize {
        self.visible_indices.len()
    }

    pub fn card_state(&mut self, record: &PromptRecord) -> &mut CardState {
        self.cards
            .entry(record.id.clone())
            .or_insert_with(|| CardState::for_record(record))
    }

    /// Smallest pending deadline, for `request_repaint_after`.
    pub fn next_deadline(&self) -> Option<Duration> {
        let mut next = self.search_debounce.remaining();
        for card in self.cards.values() {
            next = match (next, card.copied.remaining()) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            };
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixture;

    #[test]
    fn recompute_runs_once_per_filter_change() {
        let library = fixture::load().unwrap();
        let mut browser = BrowserState::default();
        browser.ensure_indices(&library.prompts);
        assert_eq!(browser.visible_count(), library.prompts.len());

        browser.set_platform(Some("claude".to_string()));
        browser.ensure_indices(&library.prompts);
        let narrowed = browser.visible_count();
        assert!(narrowed < library.prompts.len());

        // Re-setting the same value does not mark dirty or change results.
        browser.set_platform(Some("claude".to_string()));
        browser.ensure_indices(&library.prompts);
        assert_eq!(browser.visible_count(), narrowed);
    }

    #[test]
    fn search_applies_only_after_the_debounce_window() {
        let library = fixture::load().unwrap();
        let mut browser = BrowserState::default();
        browser.ensure_indices(&library.prompts);

        let start = Instant::now();
        browser.search_input = "  Chain OF thought ".to_string();
        browser.search_edited_at(start);

        browser.tick_at(start + Duration::from_millis(100));
        browser.ensure_indices(&library.prompts);
        assert_eq!(browser.visible_count(), library.prompts.len());

        browser.tick_at(start + Duration::from_millis(200));
        browser.ensure_indices(&library.prompts);
        assert_eq!(browser.filters().search, "chain of thought");
        assert_eq!(browser.visible_count(), 3);
    }

    #[test]
    fn each_keystroke_restarts_the_debounce() {
        let mut browser = BrowserState::default();
        let start = Instant::now();

        browser.search_input = "bu".to_string();
        browser.search_edited_at(start);
        browser.search_input = "bug".to_string();
        browser.search_edited_at(start + Duration::from_millis(150));

        browser.tick_at(start + Duration::from_millis(200));
        assert_eq!(browser.filters().search, "");

        browser.tick_at(start + Duration::from_millis(350));
        assert_eq!(browser.filters().search, "bug");
    }

    #[test]
    fn clear_filters_restores_the_full_set_and_empties_the_search_box() {
        let library = fixture::load().unwrap();
        let mut browser = BrowserState::default();

        browser.set_platform(Some("chatgpt".to_string()));
        browser.set_difficulty(Some(crate::core::Difficulty::Advanced));
        browser.search_input = "bug".to_string();
        let start = Instant::now();
        browser.search_edited_at(start);
        browser.tick_at(start + Duration::from_millis(200));
        browser.ensure_indices(&library.prompts);
        assert!(browser.visible_count() < library.prompts.len());
        assert!(browser.has_active_filters());

        browser.clear_filters();
        browser.ensure_indices(&library.prompts);
        assert!(!browser.has_active_filters());
        assert!(browser.search_input.is_empty());
        assert_eq!(browser.visible_count(), library.prompts.len());
    }

    #[test]
    fn card_states_are_rebuilt_on_every_filter_pass() {
        let library = fixture::load().unwrap();
        let mut browser = BrowserState::default();
        browser.ensure_indices(&library.prompts);

        let record = library
            .prompts
            .iter()
            .find(|r| !crate::core::template::extract_variables(&r.prompt).is_empty())
            .unwrap();
        let state = browser.card_state(record);
        state.bindings[0].1 = "filled in".to_string();
        state.notes_expanded = true;

        browser.set_category(Some(record.category.clone()));
        browser.ensure_indices(&library.prompts);

        let state = browser.card_state(record);
        assert_eq!(state.bindings[0].1, "");
        assert!(!state.notes_expanded);
    }

    #[test]
    fn bindings_follow_token_order() {
        let library = fixture::load().unwrap();
        let mut browser = BrowserState::default();
        browser.ensure_indices(&library.prompts);

        for idx in browser.visible_indices().to_vec() {
            let record = &library.prompts[idx];
            let tokens = crate::core::template::extract_variables(&record.prompt);
            let state = browser.card_state(record);
            let names: Vec<&str> = state.bindings.iter().map(|(n, _)| n.as_str()).collect();
            assert_eq!(names, tokens.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}
