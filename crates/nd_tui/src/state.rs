use tracing::debug;

use nd_core::{Article, Category, CategorySelection};

/// Result of one fetch cycle as reported back to the view.
#[derive(Debug)]
pub enum FetchOutcome {
    Success(Vec<Article>),
    Failure,
}

/// Per-cycle fetch state. Success and Failure return to Loading only on
/// the next selection.
#[derive(Debug)]
pub enum FetchState {
    Idle,
    Loading,
    Success(Vec<Article>),
    Failure,
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The list to render. Failure renders like an empty success.
    pub fn articles(&self) -> &[Article] {
        match self {
            FetchState::Success(articles) => articles,
            _ => &[],
        }
    }
}

/// A fetch the runtime must spawn. The generation tags the result so a
/// completion for a superseded selection can be recognized and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub selection: CategorySelection,
}

/// Interactive state owned by the shell. All mutation happens on the
/// event-loop task; fetch and timer tasks report back through events.
#[derive(Debug)]
pub struct ViewState {
    pub selection: CategorySelection,
    pub dropdown_open: bool,
    pub categories_loading: bool,
    pub fetch: FetchState,
    pub highlighted: usize,
    generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            selection: CategorySelection::Unselected,
            dropdown_open: false,
            categories_loading: true,
            fetch: FetchState::Idle,
            highlighted: 0,
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The selector renders only once the warmup is over and no fetch is
    /// outstanding; the placeholder or the loading indicator owns the
    /// screen until then.
    pub fn selector_visible(&self) -> bool {
        !self.categories_loading && !self.fetch.is_loading()
    }

    /// Mount-time fetch of the initial feed.
    pub fn start_initial_fetch(&mut self) -> FetchRequest {
        self.fetch = FetchState::Loading;
        FetchRequest {
            generation: self.generation,
            selection: self.selection,
        }
    }

    /// Picks a category: closes the dropdown and starts a new fetch
    /// cycle under a fresh generation.
    pub fn select_category(&mut self, category: Category) -> FetchRequest {
        self.selection = CategorySelection::Chosen(category);
        self.dropdown_open = false;
        self.generation += 1;
        self.fetch = FetchState::Loading;
        FetchRequest {
            generation: self.generation,
            selection: self.selection,
        }
    }

    /// Picks the dropdown entry at `index`, if there is one.
    pub fn select_index(&mut self, index: usize) -> Option<FetchRequest> {
        Category::ALL
            .get(index)
            .copied()
            .map(|category| self.select_category(category))
    }

    /// Picks the highlighted dropdown entry.
    pub fn choose_highlighted(&mut self) -> Option<FetchRequest> {
        if !self.dropdown_open {
            return None;
        }
        self.select_index(self.highlighted)
    }

    /// Flips dropdown visibility. Fetch state is untouched. Opening is a
    /// no-op while the selector is suppressed.
    pub fn toggle_dropdown(&mut self) {
        if !self.dropdown_open && !self.selector_visible() {
            return;
        }
        self.dropdown_open = !self.dropdown_open;
        if self.dropdown_open {
            self.highlighted = match self.selection {
                CategorySelection::Chosen(current) => Category::ALL
                    .iter()
                    .position(|&c| c == current)
                    .unwrap_or(0),
                CategorySelection::Unselected => 0,
            };
        }
    }

    /// Any interaction outside the dropdown region while it is open.
    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    pub fn highlight_next(&mut self) {
        if self.dropdown_open {
            self.highlighted = (self.highlighted + 1) % Category::ALL.len();
        }
    }

    pub fn highlight_prev(&mut self) {
        if self.dropdown_open {
            self.highlighted =
                (self.highlighted + Category::ALL.len() - 1) % Category::ALL.len();
        }
    }

    /// Ends the one-time warmup that keeps the placeholder in the
    /// selector slot after mount.
    pub fn categories_ready(&mut self) {
        self.categories_loading = false;
    }

    /// Applies a completed fetch. Results whose generation is no longer
    /// current are dropped so completions land in selection order, not
    /// arrival order.
    pub fn apply_fetch(&mut self, generation: u64, outcome: FetchOutcome) {
        if generation != self.generation {
            debug!(
                generation,
                current = self.generation,
                "dropping stale fetch result"
            );
            return;
        }
        self.fetch = match outcome {
            FetchOutcome::Success(articles) => FetchState::Success(articles),
            FetchOutcome::Failure => FetchState::Failure,
        };
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nd_core::{ArticleSource, PLACEHOLDER_IMAGE};

    fn article(id: usize, title: &str) -> Article {
        Article {
            id,
            title: title.to_string(),
            description: String::new(),
            content: String::new(),
            url: String::new(),
            image: PLACEHOLDER_IMAGE.to_string(),
            published_at: String::new(),
            source: ArticleSource::unknown(),
        }
    }

    fn ready_state() -> ViewState {
        let mut state = ViewState::new();
        state.categories_ready();
        state.apply_fetch(0, FetchOutcome::Success(Vec::new()));
        state
    }

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert_eq!(state.selection, CategorySelection::Unselected);
        assert!(!state.dropdown_open);
        assert!(state.categories_loading);
        assert!(!state.selector_visible());
        assert!(matches!(state.fetch, FetchState::Idle));
    }

    #[test]
    fn test_select_category_closes_dropdown_and_enters_loading() {
        let mut state = ready_state();
        state.toggle_dropdown();
        assert!(state.dropdown_open);

        let request = state.select_category(Category::Technology);
        assert!(!state.dropdown_open);
        assert!(state.fetch.is_loading());
        assert_eq!(state.selection, CategorySelection::Chosen(Category::Technology));
        assert_eq!(request.generation, 1);
        assert_eq!(request.selection.query(), "technology");
    }

    #[test]
    fn test_loading_clears_prior_articles() {
        let mut state = ready_state();
        state.apply_fetch(0, FetchOutcome::Success(vec![article(0, "A")]));
        assert_eq!(state.fetch.articles().len(), 1);

        state.select_category(Category::Sports);
        assert!(state.fetch.articles().is_empty());
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut state = ready_state();
        let first = state.select_category(Category::Science);
        let second = state.select_category(Category::Health);

        // The older request resolves after the newer one.
        state.apply_fetch(second.generation, FetchOutcome::Success(vec![article(0, "new")]));
        state.apply_fetch(first.generation, FetchOutcome::Success(vec![article(0, "old")]));

        assert_eq!(state.fetch.articles()[0].title, "new");
    }

    #[test]
    fn test_failure_applies_only_for_current_generation() {
        let mut state = ready_state();
        let first = state.select_category(Category::Business);
        let second = state.select_category(Category::General);

        state.apply_fetch(first.generation, FetchOutcome::Failure);
        assert!(state.fetch.is_loading(), "stale failure must not land");

        state.apply_fetch(second.generation, FetchOutcome::Failure);
        assert!(matches!(state.fetch, FetchState::Failure));
        assert!(state.fetch.articles().is_empty());
        assert!(!state.fetch.is_loading());
    }

    #[test]
    fn test_toggle_dropdown_ignored_until_selector_visible() {
        let mut state = ViewState::new();
        state.toggle_dropdown();
        assert!(!state.dropdown_open, "warmup still active");

        state.categories_ready();
        state.start_initial_fetch();
        state.toggle_dropdown();
        assert!(!state.dropdown_open, "fetch outstanding");

        state.apply_fetch(0, FetchOutcome::Success(Vec::new()));
        state.toggle_dropdown();
        assert!(state.dropdown_open);
        state.close_dropdown();
        assert!(!state.dropdown_open);
    }

    #[test]
    fn test_toggle_does_not_touch_fetch_state() {
        let mut state = ready_state();
        state.apply_fetch(0, FetchOutcome::Success(vec![article(0, "A")]));
        state.toggle_dropdown();
        state.toggle_dropdown();
        assert_eq!(state.fetch.articles().len(), 1);
    }

    #[test]
    fn test_highlight_wraps_and_follows_selection() {
        let mut state = ready_state();
        state.select_category(Category::Science);
        state.apply_fetch(state.generation(), FetchOutcome::Success(Vec::new()));

        state.toggle_dropdown();
        assert_eq!(Category::ALL[state.highlighted], Category::Science);

        state.highlight_prev();
        state.highlight_prev();
        state.highlight_prev();
        assert_eq!(Category::ALL[state.highlighted], Category::Health);

        state.highlight_next();
        assert_eq!(Category::ALL[state.highlighted], Category::General);
    }

    #[test]
    fn test_choose_highlighted_requires_open_dropdown() {
        let mut state = ready_state();
        assert!(state.choose_highlighted().is_none());

        state.toggle_dropdown();
        state.highlight_next();
        let request = state.choose_highlighted().unwrap();
        assert_eq!(request.selection, CategorySelection::Chosen(Category::Entertainment));
        assert!(!state.dropdown_open);
    }

    #[test]
    fn test_select_index_out_of_range() {
        let mut state = ready_state();
        assert!(state.select_index(Category::ALL.len()).is_none());
    }
}
