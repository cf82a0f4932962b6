// Service module
// The pipeline stages: normalize -> period -> schedule -> (calendar, filter)

pub mod calendar;
pub mod filter;
pub mod normalize;
pub mod period;
pub mod schedule;
