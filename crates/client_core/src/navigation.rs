//! Top-level screen selection and deferred scroll requests.

use std::time::{Duration, Instant};

use shared::domain::DestinationId;
use tracing::debug;

/// Screen shown in the main content area. The destination screen always
/// carries the catalog id it displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Home,
    Destination(DestinationId),
    Quiz,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HomeSection {
    Destinations,
}

impl HomeSection {
    pub fn anchor(self) -> &'static str {
        match self {
            HomeSection::Destinations => "destinations",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Section(HomeSection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingScroll {
    target: ScrollTarget,
    due_at: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct ViewController {
    view: View,
    selection: Option<DestinationId>,
    pending_scroll: Option<PendingScroll>,
}

impl ViewController {
    pub fn view(&self) -> View {
        self.view
    }

    /// Destination picked for detail display. Survives a trip to the quiz
    /// screen; cleared only by [`ViewController::go_home`].
    pub fn selection(&self) -> Option<DestinationId> {
        self.selection
    }

    pub fn go_home(&mut self) {
        if self.view != View::Home || self.selection.is_some() {
            debug!(from = ?self.view, "navigating home");
        }
        self.view = View::Home;
        self.selection = None;
    }

    pub fn open(&mut self, destination: DestinationId) {
        debug!(destination = %destination, "opening destination");
        self.view = View::Destination(destination);
        self.selection = Some(destination);
        self.pending_scroll = Some(PendingScroll {
            target: ScrollTarget::Top,
            due_at: Instant::now(),
        });
    }

    pub fn go_quiz(&mut self) {
        self.view = View::Quiz;
    }

    pub fn scroll_to_section(&mut self, section: HomeSection, delay: Duration) {
        if self.view != View::Home {
            self.view = View::Home;
        }
        self.pending_scroll = Some(PendingScroll {
            target: ScrollTarget::Section(section),
            due_at: Instant::now() + delay,
        });
    }

    /// Hands out the pending scroll request once its delay has elapsed.
    pub fn take_due_scroll(&mut self, now: Instant) -> Option<ScrollTarget> {
        match self.pending_scroll {
            Some(pending) if pending.due_at <= now => {
                self.pending_scroll = None;
                Some(pending.target)
            }
            _ => None,
        }
    }

    pub fn has_pending_scroll(&self) -> bool {
        self.pending_scroll.is_some()
    }
}
