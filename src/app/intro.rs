use leptos::prelude::*;

use crate::motion::{code_rain, particles, typed_prefix, TYPE_INTERVAL};

const HEADLINE: [&str; 3] = ["FULL-STACK", "MOBILE", "DEVELOPER"];

fn headline_len() -> usize {
    HEADLINE.iter().map(|s| s.chars().count()).sum()
}

/// Headline line `line` after `tick` keystrokes across the whole headline.
fn typed_line(line: usize, tick: usize) -> &'static str {
    let before = HEADLINE[..line]
        .iter()
        .map(|s| s.chars().count())
        .sum::<usize>();
    typed_prefix(HEADLINE[line], tick.saturating_sub(before))
}

#[component]
pub fn Intro() -> impl IntoView {
    let (tick, set_tick) = signal(0usize);
    let total = headline_len();

    Effect::new(move |_| {
        let handle = set_interval_with_handle(
            move || {
                set_tick.update(|t| {
                    if *t < total {
                        *t += 1;
                    }
                })
            },
            TYPE_INTERVAL,
        );
        if let Ok(handle) = handle {
            on_cleanup(move || handle.clear());
        }
    });

    let done = move || tick.get() >= total;

    view! {
        <section id="intro" class="intro-section">
            <div class="intro-content">
                <div class="intro-welcome">"Welcome to my digital workspace."</div>
                <h1 class="intro-title" aria-label="I'm a full-stack & mobile developer">
                    <span class="intro-line intro-left">
                        <span class="intro-prefix">"I'm a "</span>
                        <span class="title-accent-left">{move || typed_line(0, tick.get())}</span>
                    </span>
                    <span class="intro-line intro-right">
                        <span class="connector">"&"</span>
                        <span class="title-accent-right">{move || typed_line(1, tick.get())}</span>
                    </span>
                    <span class="intro-line intro-left">
                        <span class="title-accent-left">{move || typed_line(2, tick.get())}</span>
                        <span class="caret" class:done=done aria-hidden="true"></span>
                    </span>
                </h1>
            </div>

            <div class="particles-container" aria-hidden="true">
                {particles(50)
                    .map(|p| {
                        let style = format!(
                            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s",
                            p.left,
                            p.top,
                            p.delay,
                            p.duration,
                        );
                        view! { <div class="particle" style=style></div> }
                    })
                    .collect_view()}
            </div>

            <div class="code-rain" aria-hidden="true">
                {code_rain(15)
                    .map(|c| {
                        let style = format!(
                            "left: {:.0}%; animation-delay: {:.2}s; animation-duration: {:.2}s",
                            c.left,
                            c.delay,
                            c.duration,
                        );
                        view! {
                            <div class="code-column" style=style>
                                {c.keyword}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
