//! Toast surface of the app.
//!
//! `ToastService` is provided through context and implements the
//! [`Notifier`] seam used by the submission flow. Each toast closes itself
//! after the configured duration.

use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use contracts::shared::notification::{Notifier, Toast, ToastEntry, ToastQueue};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct ToastService {
    queue: RwSignal<ToastQueue>,
    duration_ms: u32,
}

impl ToastService {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            duration_ms,
        }
    }

    /// Show a toast and schedule its removal
    pub fn show(&self, toast: Toast) -> Option<u64> {
        log::debug!("toast: {} ({:?})", toast.title, toast.variant);
        let id = self.queue.try_update(|queue| queue.push(toast))?;

        let queue = self.queue;
        let duration_ms = self.duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(duration_ms).await;
            // The host may be gone by now
            let _ = queue.try_update(|queue| queue.dismiss(id));
        });
        Some(id)
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| {
            queue.dismiss(id);
        });
    }
}

impl Notifier for ToastService {
    fn notify(&self, toast: Toast) {
        self.show(toast);
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the visible toasts in the corner of the page
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <ol class="toast-viewport" aria-live="polite">
            <For
                each=move || toasts.queue.with(|queue| queue.entries().to_vec())
                key=|entry| entry.id
                children=move |entry: ToastEntry| view! { <ToastCard entry=entry service=toasts /> }
            />
        </ol>
    }
}

#[component]
fn ToastCard(entry: ToastEntry, service: ToastService) -> impl IntoView {
    let id = entry.id;
    let destructive = entry.toast.is_destructive();

    view! {
        <li
            class=if destructive { "toast toast--destructive" } else { "toast" }
            role=if destructive { "alert" } else { "status" }
        >
            {destructive.then(|| view! { <span class="toast__icon">{icon("alert")}</span> })}
            <div class="toast__body">
                <div class="toast__title">{entry.toast.title}</div>
                <div class="toast__description">{entry.toast.description}</div>
            </div>
            <Button
                variant="ghost"
                size="sm"
                class="toast__close"
                aria_label="Close"
                on_click=Callback::new(move |_| service.dismiss(id))
            >
                {icon("x")}
            </Button>
        </li>
    }
}
