/// Key of the store slot holding the serialized event list.
pub const DEFAULT_STORE_SLOT: &str = "events";

/// Where the event store lives unless configured otherwise.
pub const DEFAULT_STORE_PATH: &str = "~/.local/share/calgrid/events.json";

/// Pixel height of one hour row in the day and week views.
pub const DEFAULT_SLOT_HEIGHT: f64 = 63.0;

/// Share of a slot's width (in percent) that events may occupy.
pub const DEFAULT_WIDTH_PERCENT: f64 = 95.0;

/// Stacking order of the first event in a bucket.
pub const DEFAULT_Z_BASE: i64 = 1;

/// Stacking order increment per processed event.
pub const DEFAULT_Z_STEP: i64 = 10;

pub const HOURS_PER_DAY: u32 = 24;
pub const DAYS_PER_WEEK: usize = 7;
