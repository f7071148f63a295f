//! Scroll tracking for the sticky page header.

/// Class added to the header once the page scrolls past the threshold.
pub const SCROLLED_CLASS: &str = "scrolled";

/// A change the header's class list needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderTransition {
    Scrolled,
    Unscrolled,
}

/// Tracks whether the page is scrolled past half the header's height.
///
/// [`StickyHeader::on_scroll`] reports a transition only when the state flips, so the
/// DOM is written once per crossing rather than once per scroll event.
#[derive(Debug, Clone, PartialEq)]
pub struct StickyHeader {
    threshold: f64,
    is_scrolled: bool,
}

impl StickyHeader {
    pub fn new(header_height: f64) -> Self {
        Self {
            threshold: header_height / 2.0,
            is_scrolled: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_scrolled(&self) -> bool {
        self.is_scrolled
    }

    pub fn set_header_height(&mut self, header_height: f64) {
        self.threshold = header_height / 2.0;
    }

    pub fn on_scroll(&mut self, offset: f64) -> Option<HeaderTransition> {
        let past = offset > self.threshold;
        if past == self.is_scrolled {
            return None;
        }
        self.is_scrolled = past;
        Some(if past {
            HeaderTransition::Scrolled
        } else {
            HeaderTransition::Unscrolled
        })
    }
}
