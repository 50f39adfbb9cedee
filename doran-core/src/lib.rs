//! # doran-core
//!
//! Core pieces shared across the doran chat backend: the [`Clock`] trait for
//! injectable time (all date math runs in KST) and tracing initialization.

pub mod clock;
pub mod logger;

pub use clock::{kst, Clock, FixedClock, SystemClock, KST_OFFSET_SECS};
pub use logger::init_tracing;
