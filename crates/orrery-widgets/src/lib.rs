//! Small page widgets that sit next to the orrery: a local clock, world
//! clocks, a persisted visit counter and a copy-URL button.
//!
//! None of these touch the simulation; they only need the system clock, a
//! key-value store and a clipboard.

pub mod clock;
pub mod copy_url;
pub mod visits;
pub mod world_clock;

pub use clock::{Ticker, format_clock, local_now};
pub use copy_url::{Clipboard, ClipboardError, CopyButton, CopyOutcome, MemoryClipboard};
pub use visits::{FileStore, KeyValueStore, MemoryStore, StoreError, VisitCounter};
pub use world_clock::{WorldClock, format_world_clocks};
