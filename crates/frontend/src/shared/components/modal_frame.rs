use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon;

/// Modal container: overlay, surface, title bar with a close button.
/// Create/edit forms render their own footer buttons inside the body.
#[component]
pub fn ModalFrame(
    #[prop(into)] title: Signal<String>,
    /// Called when the modal should close (overlay click or the X button).
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release happened on the overlay itself, so
    // selecting text inside the modal and releasing outside does not close it.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let request_close = move || {
        // Defer to the next tick: removing the overlay synchronously during
        // its own click dispatch trips Leptos event delegation.
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            request_close();
        }
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class="modal" on:click=move |ev: ev::MouseEvent| ev.stop_propagation()>
                <div class="modal__header">
                    <h3 class="modal__title">{move || title.get()}</h3>
                    <button class="modal__close" on:click=move |_| request_close()>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}
