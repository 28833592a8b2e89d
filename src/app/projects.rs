use leptos::prelude::*;

use super::modal::Modal;
use super::reveal::Reveal;
use crate::content::{Project, PROJECTS};
use crate::reveal::{RevealOptions, RevealTracker};

#[component]
pub fn Projects() -> impl IntoView {
    let tracker = RwSignal::new(RevealTracker::new());
    let (selected, set_selected) = signal(None::<usize>);

    view! {
        <section id="projects" class="projects-section">
            <div class="projects-container">
                <div class="projects-header">
                    <div class="projects-line"></div>
                    <h2>"PROJECTS"</h2>
                </div>

                <div class="projects-list-grid">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <Reveal
                                    index=i
                                    tracker
                                    options=RevealOptions::PROJECTS
                                    class="project-grid-card"
                                >
                                    <button
                                        class="project-open"
                                        aria-label=format!("View {}", project.title)
                                        on:click=move |_| set_selected(Some(i))
                                    >
                                        <div class="project-image-wrapper">
                                            <img
                                                src=project.image
                                                alt=project.title
                                                class="project-image"
                                            />
                                        </div>
                                        <div class="project-info">
                                            <span class="project-category">{project.category}</span>
                                            <h3 class="project-title">{project.title}</h3>
                                        </div>
                                    </button>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                selected
                    .get()
                    .and_then(|i| PROJECTS.get(i))
                    .map(|project| {
                        view! {
                            <Modal on_close=move || set_selected(None) class="project-modal">
                                <ProjectDetail project />
                            </Modal>
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn ProjectDetail(project: &'static Project) -> impl IntoView {
    view! {
        <img src=project.image alt=project.title class="project-modal-image" />
        <span class="project-category">{project.category}</span>
        <h3 class="project-title">{project.title}</h3>
        <p class="project-description">{project.description}</p>
        <ul class="project-tags">
            {project
                .technologies
                .iter()
                .map(|t| view! { <li class="project-tag">{*t}</li> })
                .collect_view()}
        </ul>
        {project
            .link
            .map(|href| {
                view! {
                    <a href=href class="project-link" target="_blank" rel="noopener noreferrer">
                        "Visit project ↗"
                    </a>
                }
            })}
    }
}
