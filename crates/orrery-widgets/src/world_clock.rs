//! Per-zone clocks with a generic fallback for zones the tz database lacks.

use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;
use tracing::warn;

/// `2024/03/09 07:05:01`, 24-hour.
pub const WORLD_CLOCK_FORMAT: &str = "%Y/%m/%d %H:%M:%S";
/// Locale-neutral local format used when a zone cannot be resolved.
pub const FALLBACK_FORMAT: &str = "%c";

/// A clock for one IANA zone identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldClock {
    zone_id: String,
    zone: Option<Tz>,
}

impl WorldClock {
    /// Resolve `zone_id`. Unknown identifiers are kept and fall back to local time.
    pub fn new(zone_id: &str) -> Self {
        let zone = zone_id.parse::<Tz>().ok();
        if zone.is_none() {
            warn!(zone_id, "unsupported time zone; using local time");
        }
        Self {
            zone_id: zone_id.to_string(),
            zone,
        }
    }

    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    /// Whether the identifier resolved to a known zone.
    pub fn is_supported(&self) -> bool {
        self.zone.is_some()
    }

    /// Format `now` in this clock's zone, or generically in local time.
    pub fn format_at(&self, now: DateTime<Utc>) -> String {
        match self.zone {
            Some(tz) => now.with_timezone(&tz).format(WORLD_CLOCK_FORMAT).to_string(),
            None => now.with_timezone(&Local).format(FALLBACK_FORMAT).to_string(),
        }
    }
}

/// Format every zone at the same instant, in input order.
pub fn format_world_clocks(clocks: &[WorldClock], now: DateTime<Utc>) -> Vec<(String, String)> {
    clocks
        .iter()
        .map(|clock| (clock.zone_id().to_string(), clock.format_at(now)))
        .collect()
}
