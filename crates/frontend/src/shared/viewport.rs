use contracts::shared::viewport::ViewportClass;
use leptos::prelude::*;

fn window_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}

/// Viewport class of the window, computed on mount and on every resize.
///
/// The resize listener lives as long as the calling component. Mount, resize
/// and listener removal are checked by hand in the browser (there is no wasm
/// test runner); classification itself is tested in `contracts::shared::viewport`.
pub fn use_viewport_class(breakpoint: f64) -> Signal<ViewportClass> {
    let classify = move || ViewportClass::from_window_width(window_width(), breakpoint);
    let class = RwSignal::new(classify());

    let handle = window_event_listener(leptos::ev::resize, move |_| {
        let next = classify();
        if class.get_untracked() != next {
            class.set(next);
        }
    });
    on_cleanup(move || handle.remove());

    class.into()
}
