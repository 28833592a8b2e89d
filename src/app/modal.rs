use leptos::{ev, prelude::*};

/// Calls `close` on Escape until the calling component unmounts.
pub fn close_on_escape(close: impl Fn() + 'static) {
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            close();
        }
    });
    on_cleanup(move || handle.remove());
}

/// Overlay dialog. Mount it only while open: Escape handling is tied to its
/// lifetime.
#[component]
pub fn Modal<F>(
    on_close: F,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView
where
    F: Fn() + Copy + Send + Sync + 'static,
{
    close_on_escape(on_close);

    view! {
        <div class="modal-overlay" role="dialog" aria-modal="true" on:click=move |_| on_close()>
            <div class=format!("modal-content {class}") on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" aria-label="Close" on:click=move |_| on_close()>
                    "✕"
                </button>
                {children()}
            </div>
        </div>
    }
}
