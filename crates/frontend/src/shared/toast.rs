//! Application-wide notification channel.
//!
//! Notifications queue in arrival order, coexist, and self-destruct after
//! their duration. Dismissing early is exposed (clicking a toast) but rare.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

pub const DEFAULT_TOAST_DURATION_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
            ToastKind::Warning => "toast--warning",
            ToastKind::Info => "toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    pub duration_ms: u32,
}

/// Ordered queue, no de-duplication.
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    /// No-op when the id is already gone.
    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Centralized toast service, provided once at the app root.
#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }

    /// Queues a notification and schedules its removal. Returns the id so a
    /// caller can dismiss early.
    pub fn notify(
        &self,
        kind: ToastKind,
        title: &str,
        message: &str,
        duration_ms: u32,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.queue.update(|q| {
            q.push(Toast {
                id,
                kind,
                title: title.to_string(),
                message: message.to_string(),
                duration_ms,
            })
        });
        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            this.dismiss(id);
        });
        id
    }

    pub fn dismiss(&self, id: Uuid) {
        self.queue.update(|q| q.dismiss(id));
    }

    pub fn success(&self, title: &str, message: &str) -> Uuid {
        self.notify(ToastKind::Success, title, message, DEFAULT_TOAST_DURATION_MS)
    }

    pub fn error(&self, title: &str, message: &str) -> Uuid {
        self.notify(ToastKind::Error, title, message, DEFAULT_TOAST_DURATION_MS)
    }

    pub fn warning(&self, title: &str, message: &str) -> Uuid {
        self.notify(ToastKind::Warning, title, message, DEFAULT_TOAST_DURATION_MS)
    }

    pub fn info(&self, title: &str, message: &str) -> Uuid {
        self.notify(ToastKind::Info, title, message, DEFAULT_TOAST_DURATION_MS)
    }
}

/// Renders the queue. Must be mounted exactly once, at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");

    view! {
        <div class="toast-container">
            <For
                each=move || toasts.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = format!("toast {}", toast.kind.class());
                    let message = (!toast.message.is_empty()).then(|| {
                        view! { <div class="toast__message">{toast.message.clone()}</div> }
                    });
                    view! {
                        <div class=class on:click=move |_| toasts.dismiss(id)>
                            <div class="toast__title">{toast.title.clone()}</div>
                            {message}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(title: &str) -> Toast {
        Toast {
            id: Uuid::new_v4(),
            kind: ToastKind::Info,
            title: title.into(),
            message: String::new(),
            duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }

    #[test]
    fn queue_preserves_arrival_order() {
        let mut queue = ToastQueue::default();
        queue.push(toast("first"));
        queue.push(toast("second"));
        let titles: Vec<_> = queue.toasts().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn identical_messages_are_not_deduplicated() {
        let mut queue = ToastQueue::default();
        queue.push(toast("same"));
        queue.push(toast("same"));
        assert_eq!(queue.toasts().len(), 2);
        assert_ne!(queue.toasts()[0].id, queue.toasts()[1].id);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut queue = ToastQueue::default();
        let keep = toast("keep");
        let drop = toast("drop");
        let drop_id = drop.id;
        queue.push(keep);
        queue.push(drop);
        queue.dismiss(drop_id);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].title, "keep");
    }

    #[test]
    fn dismissing_an_absent_id_is_a_no_op() {
        let mut queue = ToastQueue::default();
        queue.push(toast("only"));
        queue.dismiss(Uuid::new_v4());
        assert_eq!(queue.toasts().len(), 1);
    }
}
