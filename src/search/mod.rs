//! Exhaustive closed-tour search.
//!
//! - [`explore`] — Depth-first enumeration of every tour closing after
//!   exactly `day_cap` day rollovers
//! - [`DayClock`] — Daily distance bookkeeping shared with the summaries

mod clock;
mod explore;

pub use clock::DayClock;
pub use explore::explore;
