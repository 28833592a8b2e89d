use leptos::prelude::*;

use super::modal::Modal;
use super::reveal::Reveal;
use crate::content::{EDUCATION, EXPERIENCES};
use crate::reveal::{RevealOptions, RevealTracker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Track {
    Professional,
    Academic,
}

impl Track {
    fn label(&self) -> &'static str {
        match self {
            Self::Professional => "Experience",
            Self::Academic => "Education",
        }
    }
}

#[component]
pub fn ExperienceEducation() -> impl IntoView {
    let (track, set_track) = signal(Track::Professional);
    let tracker = RwSignal::new(RevealTracker::new());
    let (photo, set_photo) = signal(None::<&'static str>);

    // the newly shown column starts hidden and reveals on its own scroll
    let switch_to = move |next: Track| {
        if track.get_untracked() != next {
            tracker.update(RevealTracker::reset);
            set_track(next);
        }
    };

    let tab = move |t: Track| {
        view! {
            <button
                role="tab"
                class="exp-edu-tab"
                class:active=move || track.get() == t
                aria-selected=move || (track.get() == t).to_string()
                on:click=move |_| switch_to(t)
            >
                {t.label()}
            </button>
        }
    };

    let professional = move || {
        EXPERIENCES
            .iter()
            .enumerate()
            .map(|(i, exp)| {
                view! {
                    <Reveal index=i tracker options=RevealOptions::TIMELINE class="exp-edu-item">
                        <div class="exp-edu-item-content">
                            <div class="exp-edu-logo-company">
                                <div class="exp-edu-logo-container">
                                    <img src=exp.logo alt=exp.company class="exp-edu-logo" />
                                </div>
                                <div class="company-info">
                                    <span class="exp-edu-company">{exp.company}</span>
                                    <div class="exp-edu-role">{exp.role}</div>
                                    <div class="exp-edu-meta">
                                        <span class="exp-edu-location">{exp.location}</span>
                                        <span>"•"</span>
                                        <span class="exp-edu-period">{exp.period}</span>
                                    </div>
                                </div>
                            </div>
                            <div class="exp-edu-description">{exp.description}</div>
                            {exp
                                .photo
                                .map(|url| {
                                    view! {
                                        <button
                                            class="view-photo-btn"
                                            on:click=move |_| set_photo(Some(url))
                                        >
                                            "View Photo"
                                        </button>
                                    }
                                })}
                        </div>
                    </Reveal>
                }
            })
            .collect_view()
    };

    let academic = move || {
        EDUCATION
            .iter()
            .enumerate()
            .map(|(i, edu)| {
                view! {
                    <Reveal index=i tracker options=RevealOptions::TIMELINE class="exp-edu-item">
                        <div class="exp-edu-item-content">
                            <div class="exp-edu-logo-company">
                                <div class="exp-edu-icon">{edu.icon}</div>
                                <div class="company-info">
                                    <span class="exp-edu-school">{edu.school}</span>
                                    <div class="exp-edu-degree">{edu.degree}</div>
                                    <div class="exp-edu-meta">
                                        <span class="exp-edu-location">{edu.location}</span>
                                        <span>"•"</span>
                                        <span class="exp-edu-period">{edu.period}</span>
                                    </div>
                                </div>
                            </div>
                            <div class="exp-edu-description">{edu.description}</div>
                        </div>
                    </Reveal>
                }
            })
            .collect_view()
    };

    view! {
        <section id="experience" class="exp-edu-section">
            <div class="exp-edu-container">
                <div class="exp-edu-header">
                    <span class="exp-edu-line"></span>
                    <h2>"EXPERIENCE & EDUCATION"</h2>
                    <span class="exp-edu-line"></span>
                </div>

                <div class="exp-edu-tabs" role="tablist">
                    {tab(Track::Professional)}
                    {tab(Track::Academic)}
                </div>

                <div class="exp-edu-column" role="tabpanel">
                    {move || match track.get() {
                        Track::Professional => professional().into_any(),
                        Track::Academic => academic().into_any(),
                    }}
                </div>
            </div>

            {move || {
                photo
                    .get()
                    .map(|url| {
                        view! {
                            <Modal on_close=move || set_photo(None) class="photo-modal">
                                <img src=url alt="Experience photo" class="photo-modal-image" />
                            </Modal>
                        }
                    })
            }}
        </section>
    }
}
