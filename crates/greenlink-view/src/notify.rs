//! Toast notifications and the cart-button pulse.
//!
//! Nothing here owns a timer. Callers pass the current time in and call
//! [`ToastQueue::tick`] whenever they redraw.

use std::time::{Duration, Instant};

use greenlink_commerce::cart::{Notice, Severity};

/// Icon class shown next to a toast of the given severity.
pub fn icon_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "fas fa-check-circle",
        Severity::Error => "fas fa-exclamation-circle",
        Severity::Info => "fas fa-info-circle",
    }
}

/// A notice on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub notice: Notice,
    pub expires_at: Instant,
}

impl Toast {
    pub fn icon_class(&self) -> &'static str {
        icon_class(self.notice.severity)
    }

    /// CSS class list for the toast element.
    pub fn css_class(&self) -> String {
        format!("toast {} show", self.notice.severity)
    }
}

/// The single toast slot. A new notice replaces the one on screen.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    ttl: Duration,
    current: Option<Toast>,
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, current: None }
    }

    /// Show `notice` from `now` for the configured TTL.
    pub fn show(&mut self, notice: Notice, now: Instant) {
        tracing::trace!(severity = %notice.severity, message = %notice.message, "toast");
        self.current = Some(Toast {
            notice,
            expires_at: now + self.ttl,
        });
    }

    /// Drop the toast if it has expired. Returns whether one was hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.current {
            Some(toast) if now >= toast.expires_at => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// The toast visible at `now`, if any.
    pub fn visible(&self, now: Instant) -> Option<&Toast> {
        self.current.as_ref().filter(|t| now < t.expires_at)
    }
}

/// Short highlight on the cart button after an add.
#[derive(Debug, Clone)]
pub struct Pulse {
    duration: Duration,
    until: Option<Instant>,
}

impl Pulse {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            until: None,
        }
    }

    /// Start (or restart) the pulse.
    pub fn trigger(&mut self, now: Instant) {
        self.until = Some(now + self.duration);
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_millis(4000);

    #[test]
    fn test_toast_expires_after_ttl() {
        let t0 = Instant::now();
        let mut toasts = ToastQueue::new(TTL);
        toasts.show(Notice::success("Mug added to cart"), t0);

        let visible = toasts.visible(t0 + Duration::from_millis(3999)).unwrap();
        assert_eq!(visible.icon_class(), "fas fa-check-circle");
        assert_eq!(visible.css_class(), "toast success show");

        assert!(!toasts.tick(t0 + Duration::from_millis(3999)));
        assert!(toasts.tick(t0 + TTL));
        assert!(toasts.visible(t0 + TTL).is_none());
    }

    #[test]
    fn test_new_toast_replaces_and_restarts() {
        let t0 = Instant::now();
        let mut toasts = ToastQueue::new(TTL);
        toasts.show(Notice::success("first"), t0);
        toasts.show(Notice::error("second"), t0 + Duration::from_secs(3));

        let later = t0 + Duration::from_secs(5);
        let toast = toasts.visible(later).unwrap();
        assert_eq!(toast.notice.message, "second");
        assert_eq!(toast.icon_class(), "fas fa-exclamation-circle");
    }

    #[test]
    fn test_pulse_window_restarts() {
        let t0 = Instant::now();
        let mut pulse = Pulse::new(Duration::from_millis(600));
        assert!(!pulse.is_active(t0));

        pulse.trigger(t0);
        assert!(pulse.is_active(t0 + Duration::from_millis(599)));
        pulse.trigger(t0 + Duration::from_millis(500));
        assert!(pulse.is_active(t0 + Duration::from_millis(1000)));
        assert!(!pulse.is_active(t0 + Duration::from_millis(1100)));
    }

    #[test]
    fn test_info_icon() {
        assert_eq!(icon_class(Severity::Info), "fas fa-info-circle");
    }
}
