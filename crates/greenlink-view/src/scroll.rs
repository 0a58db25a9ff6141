//! Header and hero effects driven by the scroll position.

use crate::config::ViewConfig;

/// Header appearance for one scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderStyle {
    /// Background alpha over white.
    pub background_alpha: f64,
    pub shadow: bool,
    /// Slid out of view (mobile only).
    pub hidden: bool,
}

/// Everything the page restyles on a scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    pub header: HeaderStyle,
    /// Vertical translation of the hero section, in pixels.
    pub hero_offset: f64,
}

/// Tracks the previous position to tell scroll direction.
#[derive(Debug, Clone)]
pub struct ScrollEffects {
    threshold: f64,
    parallax_rate: f64,
    mobile_breakpoint: u32,
    last_y: f64,
    hidden: bool,
}

impl ScrollEffects {
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            threshold: config.header_threshold_px,
            parallax_rate: config.parallax_rate,
            mobile_breakpoint: config.mobile_breakpoint_px,
            last_y: 0.0,
            hidden: false,
        }
    }

    /// Compute the frame for scroll offset `y` on a viewport `width` wide.
    pub fn on_scroll(&mut self, y: f64, width: u32) -> ScrollFrame {
        let past_threshold = y > self.threshold;

        // Only mobile layouts hide the header; desktop keeps the last state.
        if width <= self.mobile_breakpoint {
            self.hidden = y > self.last_y && past_threshold;
        }
        self.last_y = y;

        ScrollFrame {
            header: HeaderStyle {
                background_alpha: if past_threshold { 0.98 } else { 0.95 },
                shadow: past_threshold,
                hidden: self.hidden,
            },
            hero_offset: y * self.parallax_rate,
        }
    }
}
