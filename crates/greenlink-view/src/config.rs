//! Timing and layout settings for the view layer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// View settings. Every field has a default, so partial config files work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// How long a toast stays visible.
    pub toast_ttl_ms: u64,
    /// Length of the cart-button pulse after an item is added.
    pub pulse_ms: u64,
    /// Viewports at or below this width use the mobile layout.
    pub mobile_breakpoint_px: u32,
    /// Scroll offset past which the header turns solid.
    pub header_threshold_px: f64,
    /// Hero offset per scrolled pixel.
    pub parallax_rate: f64,
    /// Delay between product reveals after filtering.
    pub reveal_stagger_ms: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            toast_ttl_ms: 4000,
            pulse_ms: 600,
            mobile_breakpoint_px: 768,
            header_threshold_px: 100.0,
            parallax_rate: -0.5,
            reveal_stagger_ms: 100,
        }
    }
}

impl ViewConfig {
    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }

    pub fn pulse(&self) -> Duration {
        Duration::from_millis(self.pulse_ms)
    }

    pub fn reveal_stagger(&self) -> Duration {
        Duration::from_millis(self.reveal_stagger_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: ViewConfig = serde_json::from_str(r#"{"toast_ttl_ms": 1500}"#).unwrap();
        assert_eq!(config.toast_ttl(), Duration::from_millis(1500));
        assert_eq!(config.pulse(), Duration::from_millis(600));
        assert_eq!(config.mobile_breakpoint_px, 768);
    }
}
