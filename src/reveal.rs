//! One-way reveal state for items of a section, driven by viewport intersection.

use std::collections::BTreeMap;
use std::time::Duration;

/// Browsers round the reported intersection ratio, so an entry delivered for a
/// threshold crossing can sit just under the threshold.
const RATIO_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Visible fraction of the item needed to reveal it.
    pub threshold: f64,
    /// CSS margin applied to the viewport; negative values pull the trigger line inward.
    pub root_margin: &'static str,
    /// Delay per item index, for cascading reveals. Zero reveals immediately.
    pub stagger: Duration,
}

impl RevealOptions {
    pub const ABOUT: Self = Self {
        threshold: 0.2,
        root_margin: "0px 0px -100px 0px",
        stagger: Duration::ZERO,
    };

    pub const PROJECTS: Self = Self {
        threshold: 0.1,
        root_margin: "0px 0px -50px 0px",
        stagger: Duration::from_millis(80),
    };

    pub const TIMELINE: Self = Self {
        threshold: 0.15,
        root_margin: "0px 0px -80px 0px",
        stagger: Duration::from_millis(100),
    };

    pub fn delay_for(&self, index: usize) -> Duration {
        self.stagger
            .saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::PROJECTS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemState {
    #[default]
    Unobserved,
    Observing,
    /// Crossed the threshold; waiting out its stagger delay.
    Scheduled,
    Revealed,
}

/// Issued when an item crosses the threshold. Redeem it with
/// [`RevealTracker::reveal`] once `delay` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTicket {
    pub index: usize,
    pub delay: Duration,
    generation: u64,
}

/// Per-section map from item index to reveal state.
///
/// Revealed is terminal until [`reset`](Self::reset), which only the
/// Experience/Education tab switch calls. Each reset starts a new generation
/// so tickets issued before it are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealTracker {
    items: BTreeMap<usize, ItemState>,
    generation: u64,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, index: usize) -> ItemState {
        self.items.get(&index).copied().unwrap_or_default()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.state(index) == ItemState::Revealed
    }

    pub fn revealed_count(&self) -> usize {
        self.items
            .values()
            .filter(|s| **s == ItemState::Revealed)
            .count()
    }

    /// Arms observation for an item. No effect on items already past `Unobserved`.
    pub fn observe(&mut self, index: usize) {
        let state = self.items.entry(index).or_default();
        if *state == ItemState::Unobserved {
            *state = ItemState::Observing;
        }
    }

    /// Handles one intersection report. Returns a ticket the first time an
    /// observed item crosses the threshold and `None` for every later report.
    pub fn intersect(
        &mut self,
        index: usize,
        is_intersecting: bool,
        ratio: f64,
        options: &RevealOptions,
    ) -> Option<RevealTicket> {
        if !is_intersecting || ratio + RATIO_TOLERANCE < options.threshold {
            return None;
        }
        let state = self.items.get_mut(&index)?;
        if *state != ItemState::Observing {
            return None;
        }
        *state = ItemState::Scheduled;
        Some(RevealTicket {
            index,
            delay: options.delay_for(index),
            generation: self.generation,
        })
    }

    /// Redeems a ticket. Returns whether the item changed to revealed.
    pub fn reveal(&mut self, ticket: RevealTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        match self.items.get_mut(&ticket.index) {
            Some(state) if *state == ItemState::Scheduled => {
                *state = ItemState::Revealed;
                true
            }
            _ => false,
        }
    }

    /// Forgets every item and invalidates outstanding tickets.
    pub fn reset(&mut self) {
        self.items.clear();
        self.generation += 1;
    }
}
