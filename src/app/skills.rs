use std::time::Duration;

use leptos::{html, prelude::*};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::content::{carousel_track, TECHNOLOGIES};

const SCROLL_STEP: i32 = 400;
const AUTO_SCROLL_RESUME: Duration = Duration::from_secs(5);

#[component]
pub fn Skills() -> impl IntoView {
    let scroller = NodeRef::<html::Div>::new();
    let (auto_scroll, set_auto_scroll) = signal(true);

    // manual scrolling pauses the CSS marquee for a while
    let scroll_by = move |step: i32| {
        let Some(el) = scroller.get_untracked() else {
            return;
        };
        set_auto_scroll(false);
        let options = ScrollToOptions::new();
        options.set_left(f64::from((el.scroll_left() + step).max(0)));
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_to_with_scroll_to_options(&options);
        set_timeout(move || set_auto_scroll(true), AUTO_SCROLL_RESUME);
    };

    view! {
        <section id="skills" class="skills-section">
            <div class="skills-container">
                <div class="skills-top">
                    <div class="skills-header">
                        <span class="skills-line"></span>
                        <h2>"SKILLS & TECHNOLOGIES"</h2>
                    </div>
                    <div class="scroll-buttons">
                        <button
                            class="scroll-btn"
                            aria-label="Scroll left"
                            on:click=move |_| scroll_by(-SCROLL_STEP)
                        >
                            "‹"
                        </button>
                        <button
                            class="scroll-btn"
                            aria-label="Scroll right"
                            on:click=move |_| scroll_by(SCROLL_STEP)
                        >
                            "›"
                        </button>
                    </div>
                </div>

                <p class="skills-description">
                    "I specialize in " <span class="highlight">"full-stack development"</span>
                    " delivering scalable web and mobile solutions from responsive frontends to robust backends and native Android apps. My workflow blends modern frameworks, clean architecture, and proven methodologies to build intuitive, multilingual user experiences."
                </p>

                <div class="skills-scroll-wrapper" node_ref=scroller>
                    <div class="skills-scroll" class:auto-scroll=move || auto_scroll.get()>
                        {carousel_track()
                            .map(|(i, tech)| {
                                // the second copy only exists for the seamless loop
                                let duplicate = i >= TECHNOLOGIES.len();
                                view! {
                                    <div
                                        class="skill-card"
                                        aria-hidden=duplicate.then_some("true")
                                    >
                                        <span class="skill-badge">{tech.category}</span>
                                        <div class="skill-icon" style=format!("color: {}", tech.color)>
                                            <i class=tech.icon></i>
                                        </div>
                                        <div class="skill-name">{tech.name}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
