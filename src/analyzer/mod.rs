pub mod category;
pub mod metrics;
pub mod timeseries;

pub use category::{category_breakdown, CategoryPoint, UNKNOWN_BUCKET};
pub use metrics::{compute_metrics, compute_metrics_with, Metrics};
pub use timeseries::{tickets_per_day, TimePoint};
