mod about;
mod contact;
mod experience;
mod header;
mod intro;
mod modal;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{CONTACT_EMAIL, OWNER_NAME};
use crate::email::EmailConfig;
use about::About;
use contact::{Contact, FormController};
use experience::ExperienceEducation;
use header::Header;
use intro::Intro;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {}", OWNER_NAME, title) />
        <Meta name="description" content="Full-stack and mobile developer portfolio" />

        // single page; the router only gives the server its route list
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

#[component]
fn Portfolio() -> impl IntoView {
    let form = FormController::new(EmailConfig::from_build_env());

    view! {
        <Title text="Portfolio" />
        <Header />
        <main>
            <Intro />
            <About />
            <Skills />
            <Projects />
            <ExperienceEducation />
            <Contact form />
        </main>
        <Footer />
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 text-center text-sm text-muted">
            <p>{format!("© {} {}", env!("BUILD_YEAR"), OWNER_NAME)}</p>
            <a href=format!("mailto:{CONTACT_EMAIL}") class="hover:text-gold">
                {CONTACT_EMAIL}
            </a>
        </footer>
    }
}
