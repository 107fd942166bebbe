use leptos::prelude::*;

/// Top-level views reachable from the sidebar.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AppView {
    Dashboard,
    Products,
    Categories,
    Inventories,
    Users,
    Profile,
}

impl AppView {
    pub fn title(&self) -> &'static str {
        match self {
            AppView::Dashboard => "Dashboard",
            AppView::Products => "Products",
            AppView::Categories => "Categories",
            AppView::Inventories => "Inventories",
            AppView::Users => "Users",
            AppView::Profile => "Profile",
        }
    }
}

/// App-wide UI state provided at the root. Each navigation swaps the active
/// view; the outgoing page is torn down, which cancels its in-flight loads.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_view: RwSignal<AppView>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_view: RwSignal::new(AppView::Dashboard),
        }
    }

    pub fn navigate(&self, view: AppView) {
        self.active_view.set(view);
    }
}
