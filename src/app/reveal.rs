use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::reveal::{RevealOptions, RevealTracker};

/// Wraps one item of a section in a `.reveal` block that gains `.revealed`
/// once the item scrolls far enough into view.
///
/// The observer lives as long as the component. Items sharing a `tracker`
/// reveal in a cascade ordered by `index`.
#[component]
pub fn Reveal(
    index: usize,
    tracker: RwSignal<RevealTracker>,
    options: RevealOptions,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    tracker.update_untracked(|t| t.observe(index));

    use_intersection_observer_with_options(
        node,
        move |entries, _| {
            for entry in entries {
                let ticket = tracker
                    .try_update(|t| {
                        t.intersect(
                            index,
                            entry.is_intersecting(),
                            entry.intersection_ratio(),
                            &options,
                        )
                    })
                    .flatten();
                let Some(ticket) = ticket else {
                    continue;
                };
                let reveal = move || {
                    tracker.try_update(|t| t.reveal(ticket));
                };
                if ticket.delay.is_zero() {
                    reveal();
                } else {
                    set_timeout(reveal, ticket.delay);
                }
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![options.threshold])
            .root_margin(options.root_margin.to_string()),
    );

    view! {
        <div
            node_ref=node
            class=format!("reveal {class}")
            class:revealed=move || tracker.with(|t| t.is_revealed(index))
        >
            {children()}
        </div>
    }
}
