// Formation Calendar Library
// Schedule expansion and calendar aggregation for training-center dashboards

pub mod error;
pub mod models;
pub mod services;
