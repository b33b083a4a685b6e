/// Fixed header height compensated when jumping to a section.
pub const HEADER_OFFSET: u32 = 80;

/// How far below the top edge the scroll-spy probes for the current section.
pub const SPY_OFFSET: u32 = 100;

/// Reveal an element once this much of it is visible.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// A page section: fragment id plus its vertical extent.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: u32,
    pub height: u32,
}

/// Collapsible nav menu. Toggling swaps the icon between the hamburger and
/// the close glyph.
#[derive(Debug, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn icon(&self) -> &'static str {
        if self.open { "fa-times" } else { "fa-bars" }
    }
}

/// Resolve an anchor href to the scroll position it should animate to.
/// Download links and non-fragment hrefs are left to their default action,
/// as is a fragment naming no known section.
pub fn scroll_target(href: &str, sections: &[Section]) -> Option<u32> {
    if href.contains("download/") {
        return None;
    }
    let id = href.strip_prefix('#')?;
    let section = sections.iter().find(|s| s.id == id)?;
    Some(section.top.saturating_sub(HEADER_OFFSET))
}

/// The section currently in view, for highlighting its nav link.
pub fn active_section(scroll_y: u32, sections: &[Section]) -> Option<&str> {
    let probe = scroll_y + SPY_OFFSET;
    sections
        .iter()
        .find(|s| probe >= s.top && probe < s.top + s.height)
        .map(|s| s.id.as_str())
}

pub fn should_reveal(visible_ratio: f32) -> bool {
    visible_ratio >= REVEAL_THRESHOLD
}
