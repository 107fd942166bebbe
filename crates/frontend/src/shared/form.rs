//! Generic create/edit form controller.
//!
//! Lifecycle: `Closed -> Open -> Submitting -> Closed` on success, or back to
//! `Open` with the draft intact on failure so the user can retry without
//! re-entering data. Validation runs only at submit; field errors clear
//! eagerly as soon as the field is edited again.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use contracts::domain::EntityDraft;
use contracts::shared::validation::{FieldErrors, Validate};

use crate::shared::gateway::EntityGateway;
use crate::shared::list::{ListController, REQUEST_TIMEOUT_MS};
use crate::shared::toast::ToastService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Closed,
    Open,
    Submitting,
}

#[derive(Debug, Clone)]
pub struct FormState<D> {
    pub phase: FormPhase,
    pub editing: bool,
    pub draft: D,
    pub errors: FieldErrors,
    epoch: u64,
}

impl<D: EntityDraft> FormState<D> {
    pub fn new() -> Self {
        Self {
            phase: FormPhase::Closed,
            editing: false,
            draft: D::default(),
            errors: FieldErrors::new(),
            epoch: 0,
        }
    }

    pub fn open_create(&mut self, draft: D) {
        self.draft = draft;
        self.editing = false;
        self.errors.clear();
        self.phase = FormPhase::Open;
    }

    pub fn open_edit(&mut self, draft: D) {
        self.draft = draft;
        self.editing = true;
        self.errors.clear();
        self.phase = FormPhase::Open;
    }

    /// Discards the draft. Also invalidates any in-flight submit.
    pub fn close(&mut self) {
        self.phase = FormPhase::Closed;
        self.epoch += 1;
    }

    /// Merges an edit into the draft and eagerly clears that field's error.
    pub fn edit_field(&mut self, field: &str, apply: impl FnOnce(&mut D)) {
        if self.phase != FormPhase::Open {
            return;
        }
        apply(&mut self.draft);
        self.errors.remove(field);
    }

    /// Validates and, if clean, enters `Submitting`. Returns the draft, the
    /// editing flag and the epoch the completion must present; `None` means
    /// either validation failed (errors stored, form stays open) or the form
    /// was not open.
    pub fn begin_submit(&mut self) -> Option<(D, bool, u64)> {
        if self.phase != FormPhase::Open {
            return None;
        }
        let errors = self.draft.validate();
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }
        self.phase = FormPhase::Submitting;
        self.epoch += 1;
        Some((self.draft.clone(), self.editing, self.epoch))
    }

    /// Settles a submit. Returns the outcome exactly once; a stale epoch
    /// (late timeout, form reopened meanwhile) yields `None`.
    pub fn finish_submit(
        &mut self,
        epoch: u64,
        result: Result<(), String>,
    ) -> Option<Result<(), String>> {
        if self.phase != FormPhase::Submitting || epoch != self.epoch {
            return None;
        }
        match result {
            Ok(()) => {
                self.phase = FormPhase::Closed;
                Some(Ok(()))
            }
            Err(message) => {
                self.phase = FormPhase::Open;
                Some(Err(message))
            }
        }
    }
}

/// Reactive wrapper: one per CRUD page, bound to the page's list controller
/// so a successful save refreshes the visible page.
pub struct FormController<G: EntityGateway> {
    pub state: RwSignal<FormState<G::Draft>>,
    gateway: G,
    list: ListController<G>,
    toasts: ToastService,
    entity_label: &'static str,
}

impl<G: EntityGateway> Clone for FormController<G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G: EntityGateway> Copy for FormController<G> {}

impl<G: EntityGateway> FormController<G> {
    pub fn new(
        gateway: G,
        list: ListController<G>,
        toasts: ToastService,
        entity_label: &'static str,
    ) -> Self {
        Self {
            state: RwSignal::new(FormState::new()),
            gateway,
            list,
            toasts,
            entity_label,
        }
    }

    pub fn open_create(&self) {
        self.open_create_with(G::Draft::default());
    }

    pub fn open_create_with(&self, draft: G::Draft) {
        self.state.update(|s| s.open_create(draft));
    }

    pub fn open_edit(&self, draft: G::Draft) {
        self.state.update(|s| s.open_edit(draft));
    }

    pub fn close(&self) {
        self.state.update(|s| s.close());
    }

    pub fn edit(&self, field: &str, apply: impl FnOnce(&mut G::Draft)) {
        self.state.update(|s| s.edit_field(field, apply));
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.phase != FormPhase::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|s| s.phase == FormPhase::Submitting)
    }

    pub fn is_editing(&self) -> bool {
        self.state.with(|s| s.editing)
    }

    pub fn error_for(&self, field: &str) -> Option<String> {
        self.state.with(|s| s.errors.get(field).cloned())
    }

    /// Issues the create or update. The request races the shared deadline;
    /// only the first completion for the submit epoch is acted on.
    pub fn submit(&self) {
        let Some((draft, editing, epoch)) = self
            .state
            .try_update(|s| s.begin_submit())
            .flatten()
        else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            let result = if editing {
                this.gateway.update(&draft).await
            } else {
                this.gateway.create(&draft).await
            };
            this.finish(epoch, editing, result);
        });
        spawn_local(async move {
            TimeoutFuture::new(REQUEST_TIMEOUT_MS).await;
            this.finish(epoch, editing, Err("request timed out".to_string()));
        });
    }

    fn finish(&self, epoch: u64, editing: bool, result: Result<(), String>) {
        let outcome = self
            .state
            .try_update(|s| s.finish_submit(epoch, result))
            .flatten();
        match outcome {
            Some(Ok(())) => {
                let action = if editing { "updated" } else { "created" };
                self.toasts
                    .success("Success", &format!("{} {}", self.entity_label, action));
                self.list.refresh();
            }
            Some(Err(message)) => {
                log::error!("{} save failed: {}", G::resource(), message);
                self.toasts.error("Error", &message);
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::category::CategoryDraft;
    use contracts::domain::product::ProductDraft;

    fn product_draft() -> ProductDraft {
        ProductDraft {
            name: "Laptop".into(),
            quantity: "15".into(),
            inventory_id: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn submit_without_inventory_stays_open_with_field_error() {
        let mut form = FormState::<ProductDraft>::new();
        let mut draft = product_draft();
        draft.inventory_id = None;
        form.open_create(draft);

        assert!(form.begin_submit().is_none());
        assert_eq!(form.phase, FormPhase::Open);
        assert!(form.errors.contains_key("inventory"));
    }

    #[test]
    fn editing_a_field_clears_its_error_only() {
        let mut form = FormState::<ProductDraft>::new();
        form.open_create(ProductDraft::default());
        assert!(form.begin_submit().is_none());
        assert!(form.errors.contains_key("name"));
        assert!(form.errors.contains_key("inventory"));

        form.edit_field("name", |d| d.name = "Laptop".into());
        assert!(!form.errors.contains_key("name"));
        assert!(form.errors.contains_key("inventory"));
    }

    #[test]
    fn successful_submit_closes_the_form() {
        let mut form = FormState::<CategoryDraft>::new();
        form.open_create(CategoryDraft {
            name: "Networks".into(),
            ..Default::default()
        });
        let (_draft, editing, epoch) = form.begin_submit().unwrap();
        assert!(!editing);
        assert_eq!(form.phase, FormPhase::Submitting);

        assert_eq!(form.finish_submit(epoch, Ok(())), Some(Ok(())));
        assert_eq!(form.phase, FormPhase::Closed);
    }

    #[test]
    fn failed_submit_reopens_with_draft_intact() {
        let mut form = FormState::<CategoryDraft>::new();
        form.open_edit(CategoryDraft {
            id: Some(3),
            name: "Networks".into(),
            ..Default::default()
        });
        let (_, editing, epoch) = form.begin_submit().unwrap();
        assert!(editing);

        let outcome = form.finish_submit(epoch, Err("server said no".into()));
        assert_eq!(outcome, Some(Err("server said no".into())));
        assert_eq!(form.phase, FormPhase::Open);
        assert_eq!(form.draft.name, "Networks");
    }

    #[test]
    fn submit_affordance_is_inert_while_submitting() {
        let mut form = FormState::<CategoryDraft>::new();
        form.open_create(CategoryDraft {
            name: "Networks".into(),
            ..Default::default()
        });
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn late_timeout_after_settled_submit_is_a_no_op() {
        let mut form = FormState::<CategoryDraft>::new();
        form.open_create(CategoryDraft {
            name: "Networks".into(),
            ..Default::default()
        });
        let (_, _, epoch) = form.begin_submit().unwrap();
        assert!(form.finish_submit(epoch, Ok(())).is_some());
        assert!(form
            .finish_submit(epoch, Err("request timed out".into()))
            .is_none());
        assert_eq!(form.phase, FormPhase::Closed);
    }

    #[test]
    fn closing_cancels_an_in_flight_submit() {
        let mut form = FormState::<CategoryDraft>::new();
        form.open_create(CategoryDraft {
            name: "Networks".into(),
            ..Default::default()
        });
        let (_, _, epoch) = form.begin_submit().unwrap();
        form.close();
        assert!(form.finish_submit(epoch, Ok(())).is_none());
        assert_eq!(form.phase, FormPhase::Closed);
    }

    #[test]
    fn edits_are_ignored_while_submitting() {
        let mut form = FormState::<CategoryDraft>::new();
        form.open_create(CategoryDraft {
            name: "Networks".into(),
            ..Default::default()
        });
        form.begin_submit().unwrap();
        form.edit_field("name", |d| d.name = "changed".into());
        assert_eq!(form.draft.name, "Networks");
    }
}
