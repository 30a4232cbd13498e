use crate::shared::icons::icon;
use leptos::prelude::*;

/// Icon badge with a short title and caption
#[component]
pub fn FeatureTile(
    /// Icon name from the icon() helper
    icon_name: &'static str,
    title: &'static str,
    caption: &'static str,
) -> impl IntoView {
    view! {
        <div class="feature-tile">
            <div class="feature-tile__icon">{icon(icon_name)}</div>
            <h3 class="feature-tile__title">{title}</h3>
            <p class="feature-tile__caption">{caption}</p>
        </div>
    }
}
