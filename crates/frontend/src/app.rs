use crate::config;
use crate::shared::toast::{ToastHost, ToastService};
use crate::usecases::u101_ask_analyst::AskAnalystPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Toast surface consumed by the form through the Notifier seam.
    provide_context(ToastService::new(config::settings().ui.toast_duration_ms));

    view! {
        <AskAnalystPage />
        <ToastHost />
    }
}
