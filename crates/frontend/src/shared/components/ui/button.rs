use leptos::prelude::*;

/// Button component with variants (primary, ghost) and sizes (md, sm)
#[component]
pub fn Button(
    /// Button variant: "primary" (default) or "ghost"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button size: "md" (default) or "sm"
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// Stretch to the container width
    #[prop(optional)]
    block: bool,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Button type attribute
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Marks the button as busy for assistive tech
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    /// Accessible label when the content is icon-only
    #[prop(optional, into)]
    aria_label: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "ghost" => "button--ghost",
        _ => "button--primary",
    };

    let size_class = move || {
        if size.get().as_deref() == Some("sm") {
            "button--small"
        } else {
            ""
        }
    };

    let block_class = if block { "button--block" } else { "" };
    let additional_class = move || class.get().unwrap_or_default();
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || {
                format!(
                    "button {} {} {} {}",
                    variant_class(),
                    size_class(),
                    block_class,
                    additional_class(),
                )
            }
            disabled=move || disabled.get().unwrap_or(false)
            aria-busy=move || busy.get().unwrap_or(false).to_string()
            aria-label=move || aria_label.get()
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
