//! Generic paginated entity list controller.
//!
//! One state machine shared by every CRUD page: `Idle -> Loading ->
//! {Loaded, Degraded}`. A failed load substitutes the entity's fixed sample
//! data set (degraded mode is an observable state, rendered as a banner, not
//! a silent swap). Responses are matched to the load that issued them by an
//! epoch counter, so an overlapping or torn-down load can never clobber newer
//! state.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use contracts::shared::envelope::EntityPage;

use crate::shared::gateway::EntityGateway;

pub const PAGE_SIZE: u32 = 10;
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;
/// Manual retries allowed out of degraded mode before the retry affordance
/// goes inert. A page change starts a fresh budget.
pub const MAX_RETRIES: u32 = 3;

/// Converts the one-based UI page to the zero-based upstream index.
pub fn upstream_page(ui_page: u32) -> u32 {
    ui_page.saturating_sub(1)
}

/// Implemented by list rows that support the local search filter. `needle`
/// is already lowercased and non-empty.
pub trait Searchable {
    fn matches(&self, needle: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Idle,
    Loading,
    Loaded,
    /// A load failed and the list is showing fallback sample data.
    Degraded,
}

#[derive(Debug, Clone)]
pub struct ListState<T> {
    pub items: Vec<T>,
    /// One-based; the upstream page parameter is zero-based.
    pub current_page: u32,
    pub total_pages: u32,
    pub search_term: String,
    pub phase: ListPhase,
    epoch: u64,
    attempts: u32,
}

impl<T: Clone> ListState<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            total_pages: 1,
            search_term: String::new(),
            phase: ListPhase::Idle,
            epoch: 0,
            attempts: 0,
        }
    }

    /// Enters `Loading` for the given UI page and returns the epoch the
    /// response must present to be applied. Moving to a different page
    /// resets the retry budget.
    pub fn begin_load(&mut self, page: u32) -> u64 {
        if page != self.current_page {
            self.attempts = 0;
        }
        self.current_page = page;
        self.phase = ListPhase::Loading;
        self.epoch += 1;
        self.epoch
    }

    /// Applies a load outcome. Stale responses (older epoch, or anything
    /// arriving once the load already settled) are discarded.
    pub fn apply_load(
        &mut self,
        epoch: u64,
        result: Result<EntityPage<T>, String>,
        fallback: &[T],
    ) {
        if epoch != self.epoch || self.phase != ListPhase::Loading {
            return;
        }
        match result {
            Ok(page) => {
                self.items = page.items;
                self.total_pages = page.total_pages.max(1);
                self.phase = ListPhase::Loaded;
                self.attempts = 0;
            }
            Err(_) => {
                self.items = fallback.to_vec();
                self.total_pages = 1;
                self.phase = ListPhase::Degraded;
                self.attempts += 1;
            }
        }
    }

    /// Invalidates any in-flight load; used when the owning page is torn
    /// down so a late response cannot resurrect its state.
    pub fn invalidate(&mut self) {
        self.epoch += 1;
    }

    /// Local only: never triggers a fetch.
    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
    }

    pub fn can_retry(&self) -> bool {
        self.phase == ListPhase::Degraded && self.attempts < MAX_RETRIES
    }

    pub fn is_loading(&self) -> bool {
        self.phase == ListPhase::Loading
    }

    pub fn is_degraded(&self) -> bool {
        self.phase == ListPhase::Degraded
    }
}

impl<T: Clone + Searchable> ListState<T> {
    /// The displayed list: `items` filtered by the case-insensitive search
    /// term. An effectively empty term shows everything.
    pub fn filtered(&self) -> Vec<T> {
        let needle = self.search_term.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.clone();
        }
        self.items
            .iter()
            .filter(|item| item.matches(&needle))
            .cloned()
            .collect()
    }
}

/// Reactive wrapper tying [`ListState`] to a gateway and a fallback set.
/// Cheap to copy into event handlers, like any signal.
pub struct ListController<G: EntityGateway> {
    pub state: RwSignal<ListState<G::Entity>>,
    gateway: G,
    fallback: StoredValue<Vec<G::Entity>>,
}

impl<G: EntityGateway> Clone for ListController<G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: EntityGateway> Copy for ListController<G> {}

impl<G: EntityGateway> ListController<G> {
    pub fn new(gateway: G, fallback: Vec<G::Entity>) -> Self {
        Self {
            state: RwSignal::new(ListState::new()),
            gateway,
            fallback: StoredValue::new(fallback),
        }
    }

    /// Loads the given UI page. The request races a fixed deadline; whichever
    /// settles first wins the epoch, the loser becomes a stale no-op.
    pub fn load(&self, page: u32) {
        let epoch = self
            .state
            .try_update(|s| s.begin_load(page))
            .unwrap_or_default();
        let this = *self;
        spawn_local(async move {
            let result = this.gateway.list(upstream_page(page), PAGE_SIZE).await;
            if let Err(e) = &result {
                log::warn!(
                    "{} list load failed, falling back to sample data: {}",
                    G::resource(),
                    e
                );
            }
            this.apply(epoch, result);
        });
        spawn_local(async move {
            TimeoutFuture::new(REQUEST_TIMEOUT_MS).await;
            this.apply(epoch, Err("request timed out".to_string()));
        });
    }

    fn apply(&self, epoch: u64, result: Result<EntityPage<G::Entity>, String>) {
        let fallback = self.fallback.get_value();
        self.state
            .update(|s| s.apply_load(epoch, result, &fallback));
    }

    /// In-range pages only; pagination affordances outside
    /// `[1, total_pages]` are disabled rather than clamped here.
    pub fn change_page(&self, page: u32) {
        self.load(page);
    }

    pub fn refresh(&self) {
        let page = self.state.with_untracked(|s| s.current_page);
        self.load(page);
    }

    pub fn retry(&self) {
        if self.state.with_untracked(|s| s.can_retry()) {
            self.refresh();
        }
    }

    pub fn set_search_term(&self, term: String) {
        self.state.update(|s| s.set_search_term(term));
    }

    /// Bound to the page lifetime via `on_cleanup`.
    pub fn cancel(&self) {
        self.state.update(|s| s.invalidate());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
        location: String,
    }

    impl Row {
        fn new(name: &str, location: &str) -> Self {
            Self {
                name: name.into(),
                location: location.into(),
            }
        }
    }

    impl Searchable for Row {
        fn matches(&self, needle: &str) -> bool {
            self.name.to_lowercase().contains(needle)
                || self.location.to_lowercase().contains(needle)
        }
    }

    fn page(items: Vec<Row>, total_pages: u32) -> EntityPage<Row> {
        EntityPage {
            items,
            total_pages,
            total_elements: None,
        }
    }

    fn fallback() -> Vec<Row> {
        vec![Row::new("Main warehouse", "Building A")]
    }

    #[test]
    fn ui_pages_are_one_based_upstream_zero_based() {
        assert_eq!(upstream_page(1), 0);
        assert_eq!(upstream_page(2), 1);
    }

    #[test]
    fn successful_load_sets_page_and_totals() {
        let mut state = ListState::<Row>::new();
        let epoch = state.begin_load(2);
        assert_eq!(state.phase, ListPhase::Loading);
        state.apply_load(epoch, Ok(page(vec![Row::new("a", "b")], 5)), &fallback());
        assert_eq!(state.phase, ListPhase::Loaded);
        assert_eq!(state.current_page, 2);
        assert_eq!(state.total_pages, 5);
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn failed_load_degrades_to_fallback() {
        let mut state = ListState::<Row>::new();
        let epoch = state.begin_load(1);
        state.apply_load(epoch, Err("boom".into()), &fallback());
        assert_eq!(state.phase, ListPhase::Degraded);
        assert_eq!(state.items, fallback());
        assert_eq!(state.total_pages, 1);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = ListState::<Row>::new();
        let first = state.begin_load(1);
        let second = state.begin_load(2);
        state.apply_load(first, Ok(page(vec![Row::new("old", "")], 9)), &fallback());
        assert_eq!(state.phase, ListPhase::Loading);
        assert!(state.items.is_empty());
        state.apply_load(second, Ok(page(vec![Row::new("new", "")], 3)), &fallback());
        assert_eq!(state.items[0].name, "new");
        assert_eq!(state.total_pages, 3);
    }

    #[test]
    fn late_timeout_after_settled_load_is_a_no_op() {
        let mut state = ListState::<Row>::new();
        let epoch = state.begin_load(1);
        state.apply_load(epoch, Ok(page(vec![Row::new("a", "")], 2)), &fallback());
        state.apply_load(epoch, Err("request timed out".into()), &fallback());
        assert_eq!(state.phase, ListPhase::Loaded);
        assert_eq!(state.items[0].name, "a");
    }

    #[test]
    fn invalidate_cancels_in_flight_load() {
        let mut state = ListState::<Row>::new();
        let epoch = state.begin_load(1);
        state.invalidate();
        state.apply_load(epoch, Ok(page(vec![Row::new("late", "")], 1)), &fallback());
        assert!(state.items.is_empty());
        assert_eq!(state.phase, ListPhase::Loading);
    }

    #[test]
    fn search_filters_locally_and_case_insensitively() {
        let mut state = ListState::<Row>::new();
        let epoch = state.begin_load(1);
        state.apply_load(
            epoch,
            Ok(page(
                vec![
                    Row::new("Main warehouse", "Building A"),
                    Row::new("South depot", "Industrial zone"),
                ],
                1,
            )),
            &fallback(),
        );

        state.set_search_term("MAIN".into());
        let shown = state.filtered();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].name, "Main warehouse");

        // Secondary field matches too.
        state.set_search_term("industrial".into());
        assert_eq!(state.filtered()[0].name, "South depot");

        state.set_search_term("   ".into());
        assert_eq!(state.filtered().len(), 2);
    }

    #[test]
    fn retry_budget_is_bounded_and_reset_by_page_change() {
        let mut state = ListState::<Row>::new();
        for _ in 0..MAX_RETRIES {
            let epoch = state.begin_load(1);
            state.apply_load(epoch, Err("down".into()), &fallback());
        }
        assert!(!state.can_retry());

        let epoch = state.begin_load(2);
        state.apply_load(epoch, Err("down".into()), &fallback());
        assert!(state.can_retry());
    }

    #[test]
    fn success_resets_retry_budget() {
        let mut state = ListState::<Row>::new();
        let epoch = state.begin_load(1);
        state.apply_load(epoch, Err("down".into()), &fallback());
        let epoch = state.begin_load(1);
        state.apply_load(epoch, Ok(page(Vec::new(), 1)), &fallback());
        let epoch = state.begin_load(1);
        state.apply_load(epoch, Err("down".into()), &fallback());
        assert!(state.can_retry());
    }
}
