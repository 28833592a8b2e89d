pub const SCROLLED_AFTER: f64 = 50.0;
pub const HEADER_OFFSET: f64 = 80.0;
pub const MOBILE_BREAKPOINT: f64 = 768.0;
pub const DEFAULT_SECTION: &str = "intro";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { id: "intro", label: "INTRO" },
    NavItem { id: "about", label: "ABOUT" },
    NavItem { id: "skills", label: "SKILLS" },
    NavItem { id: "projects", label: "PROJECTS" },
    NavItem { id: "experience", label: "EXPERIENCE" },
    NavItem { id: "contact", label: "CONTACT" },
];

/// A section's vertical span relative to the viewport top.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

/// The section crossing the line one third down the viewport. When spans
/// overlap the later one in document order wins; when none crosses the line
/// the intro is current.
pub fn active_section(sections: &[SectionBounds], viewport_height: f64) -> &str {
    let line = viewport_height / 3.0;
    sections
        .iter()
        .rev()
        .find(|s| s.top <= line && s.bottom > line)
        .map(|s| s.id.as_str())
        .unwrap_or(DEFAULT_SECTION)
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_AFTER
}

/// Document offset to scroll to so the section lands just below the header.
pub fn scroll_target(element_top: f64, page_y_offset: f64) -> f64 {
    element_top + page_y_offset - HEADER_OFFSET
}
