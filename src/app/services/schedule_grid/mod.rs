//! Weekly schedule grids
//!
//! Groups parsed courses into quarter terms and lays each term out as an
//! hour-by-weekday grid that renders as plain text.

pub mod buckets;
pub mod grid;

#[cfg(test)]
pub mod tests;

pub use buckets::{TERMS, TermBuckets};
pub use grid::{Slot, WeeklyGrid, hour_label};
