//! Injectable time source.
//!
//! All date arithmetic in the pipeline is anchored to KST (UTC+9) regardless
//! of where the server runs; handlers take a `dyn Clock` so range tests can
//! pin "now" to a fixed instant.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Offset of the reference zone (KST) in seconds east of UTC.
pub const KST_OFFSET_SECS: i32 = 9 * 3600;

/// Returns the fixed KST offset used for all date math.
pub fn kst() -> FixedOffset {
    FixedOffset::east_opt(KST_OFFSET_SECS).expect("KST offset is in range")
}

/// Time source for the pipeline.
pub trait Clock: Send + Sync {
    /// Current instant in the reference zone (KST).
    fn now(&self) -> DateTime<FixedOffset>;

    /// Current calendar date in the reference zone.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock, shifted into KST.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&kst())
    }
}

/// Clock pinned to one instant; for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
