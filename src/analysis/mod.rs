//! Derived-metrics layer: pure functions that turn raw issue/check-in rows
//! into the severity buckets, priority groupings, insight strings, system
//! connections and trend indicators the summary endpoints serve.

pub mod connections;
pub mod grouping;
pub mod insight;
pub mod severity;
pub mod trends;
