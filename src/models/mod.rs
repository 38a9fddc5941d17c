pub mod dashboard;

pub use dashboard::{DashboardStats, StatField};
