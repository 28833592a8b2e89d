use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::OWNER_NAME;
use crate::reveal::{RevealOptions, RevealTracker};

#[component]
pub fn About() -> impl IntoView {
    let tracker = RwSignal::new(RevealTracker::new());
    let options = RevealOptions::ABOUT;

    view! {
        <section id="about" class="about-section">
            <div class="about-container">
                <Reveal index=0 tracker options class="about-content">
                    <div class="about-header">
                        <span class="about-line"></span>
                        <h2>"ABOUT"</h2>
                    </div>
                    <p class="about-text">
                        "Hello, I'm " <span class="highlight">"EL RHAITI SALMA"</span>
                        ", a Full-Stack Developer from Khouribga, Morocco. I hold a DUT (Bac+2) in Web and Multimedia Development from École Supérieure de Technologie de Meknès, Université Moulay Ismail. I specialize in building modern, responsive web applications using React, Node.js, PHP, and Laravel, with additional experience in mobile development. I'm passionate about solving technical challenges through clean, efficient code and creating intuitive, multilingual user interfaces. Whether working independently or with teams, I strive to deliver impactful digital solutions."
                        <br />
                        <span class="highlight-gold">
                            " Let's connect and build something exceptional together!"
                        </span>
                    </p>
                </Reveal>
                <Reveal index=1 tracker options class="about-image">
                    <div class="image-frame">
                        <div class="frame-corner top-left"></div>
                        <div class="frame-corner top-right"></div>
                        <div class="frame-corner bottom-left"></div>
                        <div class="frame-corner bottom-right"></div>
                        <img src="/PIC.jpg" alt=OWNER_NAME class="profile-photo" />
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
