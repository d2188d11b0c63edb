//! Rules behind the page chrome: header styling, back-to-top visibility,
//! in-page anchor targets and mobile menu dismissal.

/// Inline style pair applied to the sticky header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

impl HeaderStyle {
    pub const RESTING: HeaderStyle = HeaderStyle {
        background: "rgba(255, 255, 255, 0.95)",
        box_shadow: "none",
    };

    pub const SCROLLED: HeaderStyle = HeaderStyle {
        background: "rgba(255, 255, 255, 0.98)",
        box_shadow: "0 1px 3px rgba(0, 0, 0, 0.1)",
    };

    /// Strictly past the threshold counts as scrolled.
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold { Self::SCROLLED } else { Self::RESTING }
    }
}

pub fn back_to_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Selector to smooth-scroll to for an in-page link, if any.
///
/// Missing hrefs, bare `#` and non-fragment links are left to the browser.
pub fn anchor_target(href: Option<&str>) -> Option<&str> {
    match href {
        Some(href) if href.starts_with('#') && href.len() > 1 => Some(href),
        _ => None,
    }
}

/// A document click closes the menu unless it landed on the toggle or inside the nav.
pub fn should_close_menu(on_toggle: bool, inside_nav: bool) -> bool {
    !on_toggle && !inside_nav
}
