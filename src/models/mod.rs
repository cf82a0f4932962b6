// Data model module
// Canonical record types shared across the pipeline

pub mod date;
pub mod group;
pub mod occurrence;
pub mod session;
