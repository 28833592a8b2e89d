use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::nav::{
    active_section, is_scrolled, scroll_target, SectionBounds, DEFAULT_SECTION,
    MOBILE_BREAKPOINT, NAV_ITEMS,
};

fn section_bounds() -> Vec<SectionBounds> {
    let Ok(nodes) = document().query_selector_all("section[id]") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            SectionBounds {
                id: el.id(),
                top: rect.top(),
                bottom: rect.bottom(),
            }
        })
        .collect()
}

fn viewport_size() -> (f64, f64) {
    let window = window();
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or_default();
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    (width, height)
}

fn smooth_scroll_to(top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

fn scroll_to_section(id: &str) {
    let Some(el) = document().get_element_by_id(id) else {
        return;
    };
    let page_offset = window().page_y_offset().unwrap_or_default();
    smooth_scroll_to(scroll_target(el.get_bounding_client_rect().top(), page_offset));
}

#[component]
pub fn Header() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);
    let (active, set_active) = signal(DEFAULT_SECTION.to_string());

    let sample = move || {
        set_scrolled(is_scrolled(window().scroll_y().unwrap_or_default()));
        let (_, height) = viewport_size();
        let sections = section_bounds();
        let current = active_section(&sections, height);
        if active.get_untracked() != current {
            set_active(current.to_string());
        }
    };

    // effects only run in the browser, so this is the initial sample after hydration
    Effect::new(move |_| sample());

    let scroll_handle = window_event_listener(ev::scroll, move |_| sample());
    let resize_handle = window_event_listener(ev::resize, move |_| {
        sample();
        let (width, _) = viewport_size();
        if menu_open.get_untracked() && width > MOBILE_BREAKPOINT {
            set_menu_open(false);
        }
    });
    on_cleanup(move || {
        scroll_handle.remove();
        resize_handle.remove();
    });

    // lock page scroll behind the open mobile menu
    Effect::new(move |_| {
        let overflow = if menu_open.get() { "hidden" } else { "" };
        if let Some(body) = document().body() {
            let _ = body.style().set_property("overflow", overflow);
        }
    });
    #[cfg(feature = "hydrate")]
    on_cleanup(|| {
        if let Some(body) = document().body() {
            let _ = body.style().set_property("overflow", "");
        }
    });

    view! {
        <header class="header" class:scrolled=move || scrolled.get()>
            <nav class="nav">
                <div
                    class="name"
                    on:click=move |_| {
                        smooth_scroll_to(0.0);
                        set_menu_open(false);
                    }
                >
                    <span>"PORTFOLIO"</span>
                </div>
                <ul class="nav-links" class:open=move || menu_open.get()>
                    {NAV_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(i, item)| {
                            let id = item.id;
                            view! {
                                <li>
                                    <a
                                        href=format!("#{id}")
                                        class="nav-link"
                                        class:active=move || active.get() == id
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            set_menu_open(false);
                                            scroll_to_section(id);
                                        }
                                    >
                                        {item.label}
                                    </a>
                                    {(i + 1 < NAV_ITEMS.len())
                                        .then(|| view! { <span class="separator">"·"</span> })}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <button
                    class="mobile-menu-btn"
                    class:open=move || menu_open.get()
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
            <Show when=move || menu_open.get()>
                <div class="menu-overlay" aria-hidden="true" on:click=move |_| set_menu_open(false)></div>
            </Show>
        </header>
    }
}
