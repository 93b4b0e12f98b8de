//! Text rendition of the page widgets.

use std::time::{Duration, Instant};

use chrono::Utc;
use orrery_config::WidgetConfig;
use orrery_widgets::{
    CopyButton, CopyOutcome, FileStore, MemoryClipboard, StoreError, VisitCounter, WorldClock,
    Ticker, format_world_clocks, local_now,
};

/// How often the clock line refreshes.
pub const CLOCK_REFRESH: Duration = Duration::from_secs(1);
const WATCH_POLL: Duration = Duration::from_millis(50);

/// Label of the copy button while idle.
pub const COPY_BUTTON_LABEL: &str = "Copy link";

/// Record a visit and collect every widget line.
pub fn widget_lines(config: &WidgetConfig, url: &str) -> Result<Vec<String>, StoreError> {
    let mut lines = vec![format!("clock: {}", local_now())];

    let store = FileStore::open(&config.store_path)?;
    let mut counter = VisitCounter::new(store, config.visit_key.clone());
    lines.push(format!("visits: {}", counter.record_visit()?));

    let clocks = config
        .world_clock_zones
        .iter()
        .map(|zone| WorldClock::new(zone))
        .collect::<Vec<_>>();
    for (zone, time) in format_world_clocks(&clocks, Utc::now()) {
        lines.push(format!("{zone}: {time}"));
    }

    let mut button = CopyButton::new(
        COPY_BUTTON_LABEL,
        Duration::from_millis(config.copy_ack_millis),
    );
    let mut clipboard = MemoryClipboard::default();
    let now = Instant::now();
    match button.click(&mut clipboard, url, now) {
        CopyOutcome::Copied => lines.push(format!("[{}] {url}", button.label(now))),
        CopyOutcome::Failed { alert } => lines.push(alert),
    }

    Ok(lines)
}

/// Emit a clock line immediately and then once per [`CLOCK_REFRESH`] until
/// `duration` has passed.
pub fn watch_clock(duration: Duration, mut emit: impl FnMut(String)) {
    let start = Instant::now();
    let mut ticker = Ticker::new(CLOCK_REFRESH, start);
    loop {
        let now = Instant::now();
        if ticker.poll(now) {
            emit(format!("clock: {}", local_now()));
        }
        if now.duration_since(start) >= duration {
            break;
        }
        std::thread::sleep(WATCH_POLL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(dir: &std::path::Path) -> WidgetConfig {
        WidgetConfig {
            store_path: dir.join("store.json"),
            world_clock_zones: vec!["Asia/Tokyo".to_string(), "Nowhere/Land".to_string()],
            ..WidgetConfig::default()
        }
    }

    #[test]
    fn test_widget_lines_count_visits() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());
        let first = widget_lines(&config, "https://example.org/").unwrap();
        assert!(first[0].starts_with("clock: "));
        assert_eq!(first[1], "visits: 1");
        assert!(first[2].starts_with("Asia/Tokyo: "));
        assert!(first[3].starts_with("Nowhere/Land: "));
        assert_eq!(first[4], "[Copied ✅] https://example.org/");

        let second = widget_lines(&config, "https://example.org/").unwrap();
        assert_eq!(second[1], "visits: 2");
    }

    #[test]
    fn test_watch_clock_zero_duration_emits_once() {
        let mut lines = Vec::new();
        watch_clock(Duration::ZERO, |line| lines.push(line));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("clock: "));
    }

    #[test]
    fn test_watch_clock_refreshes_once_per_second() {
        let mut lines = Vec::new();
        watch_clock(Duration::from_millis(1100), |line| lines.push(line));
        assert_eq!(lines.len(), 2);
    }
}
