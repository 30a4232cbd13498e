use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Dashed drop zone wrapping an invisible single-file picker.
///
/// `accept` is only a hint to the browser dialog; any file can still be chosen.
#[component]
pub fn FileDropZone(
    /// ID of the underlying `<input type="file">`
    id: &'static str,
    /// Advisory extension list for the picker
    accept: &'static str,
    /// Name of the currently selected file
    #[prop(into)]
    file_name: Signal<Option<String>>,
    /// Called with the first picked file
    on_select: Callback<web_sys::File>,
    /// Hint below the file name
    #[prop(optional, into)]
    hint: MaybeProp<String>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    let handle_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        // Cancelled dialog: keep the previous selection
        if let Some(file) = file {
            on_select.run(file);
        }
    };

    view! {
        <div class="drop-zone">
            <input
                id=id
                type="file"
                accept=accept
                class="drop-zone__input"
                disabled=move || disabled.get().unwrap_or(false)
                on:change=handle_change
            />
            <div class=move || {
                if file_name.get().is_some() {
                    "drop-zone__frame drop-zone__frame--filled"
                } else {
                    "drop-zone__frame"
                }
            }>
                <span class="drop-zone__icon">{icon("upload")}</span>
                <p class="drop-zone__label">
                    {move || {
                        file_name
                            .get()
                            .unwrap_or_else(|| "Drop your file here or click to browse".to_string())
                    }}
                </p>
                {move || hint.get().map(|h| view! { <p class="drop-zone__hint">{h}</p> })}
            </div>
        </div>
    }
}
