//! "Copy page URL" button with a transient acknowledgment.

use std::time::{Duration, Instant};

/// Label shown after a successful copy.
pub const COPIED_LABEL: &str = "Copied ✅";
/// Alert text shown when the clipboard refuses the write.
pub const COPY_FAILED_ALERT: &str =
    "Copy failed: your browser may not allow automatic copying. Please copy the address bar link manually.";

/// The clipboard refused the write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Destination for copied text.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-process clipboard; can be told to refuse writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    refuse: bool,
}

impl MemoryClipboard {
    /// A clipboard whose writes always fail.
    pub fn refusing() -> Self {
        Self {
            contents: None,
            refuse: true,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.refuse {
            return Err(ClipboardError("write not permitted".to_string()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// What the user sees after clicking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The label now reads [`COPIED_LABEL`] until the acknowledgment expires.
    Copied,
    /// Show this alert; the label is unchanged.
    Failed { alert: String },
}

/// Button state: its idle label and a pending restore deadline.
#[derive(Clone, Debug)]
pub struct CopyButton {
    idle_label: String,
    ack_duration: Duration,
    restore_at: Option<Instant>,
}

impl CopyButton {
    pub fn new(idle_label: impl Into<String>, ack_duration: Duration) -> Self {
        Self {
            idle_label: idle_label.into(),
            ack_duration,
            restore_at: None,
        }
    }

    /// Copy `url` and start the acknowledgment on success.
    ///
    /// Clicking again during an acknowledgment restarts its timer.
    pub fn click(&mut self, clipboard: &mut impl Clipboard, url: &str, now: Instant) -> CopyOutcome {
        match clipboard.write_text(url) {
            Ok(()) => {
                self.restore_at = Some(now + self.ack_duration);
                CopyOutcome::Copied
            }
            Err(e) => {
                tracing::warn!("copy failed: {e}");
                CopyOutcome::Failed {
                    alert: COPY_FAILED_ALERT.to_string(),
                }
            }
        }
    }

    /// Clear an expired acknowledgment.
    pub fn tick(&mut self, now: Instant) {
        if self.restore_at.is_some_and(|at| now >= at) {
            self.restore_at = None;
        }
    }

    /// Label to display at `now`.
    pub fn label(&self, now: Instant) -> &str {
        match self.restore_at {
            Some(at) if now < at => COPIED_LABEL,
            _ => &self.idle_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.org/orrery/";

    #[test]
    fn test_copy_success_shows_ack_then_restores() {
        let mut clipboard = MemoryClipboard::default();
        let mut button = CopyButton::new("Copy link", Duration::from_millis(1200));
        let t0 = Instant::now();

        assert_eq!(button.click(&mut clipboard, URL, t0), CopyOutcome::Copied);
        assert_eq!(clipboard.contents(), Some(URL));
        assert_eq!(button.label(t0), COPIED_LABEL);
        assert_eq!(button.label(t0 + Duration::from_millis(1199)), COPIED_LABEL);
        assert_eq!(button.label(t0 + Duration::from_millis(1200)), "Copy link");

        button.tick(t0 + Duration::from_millis(1300));
        assert_eq!(button.label(t0), "Copy link");
    }

    #[test]
    fn test_copy_failure_alerts_and_keeps_label() {
        let mut clipboard = MemoryClipboard::refusing();
        let mut button = CopyButton::new("Copy link", Duration::from_millis(1200));
        let t0 = Instant::now();
        match button.click(&mut clipboard, URL, t0) {
            CopyOutcome::Failed { alert } => assert_eq!(alert, COPY_FAILED_ALERT),
            other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(button.label(t0), "Copy link");
        assert_eq!(clipboard.contents(), None);
    }

    #[test]
    fn test_double_click_never_sticks_on_ack_label() {
        let mut clipboard = MemoryClipboard::default();
        let mut button = CopyButton::new("Copy link", Duration::from_millis(1200));
        let t0 = Instant::now();
        button.click(&mut clipboard, URL, t0);
        button.click(&mut clipboard, URL, t0 + Duration::from_millis(600));
        assert_eq!(button.label(t0 + Duration::from_millis(1500)), COPIED_LABEL);
        assert_eq!(button.label(t0 + Duration::from_millis(1800)), "Copy link");
    }
}
