//! Aggregation and terminal rendering for ticket analysis

mod metrics;
mod recommend;
mod render;

pub use metrics::{elapsed_hours, parse_timestamp, CategoryAverages};
pub use recommend::{build_recommendations, recommend, FALLBACK, SOLUTIONS};
pub use render::{averages_table, bar_chart, grid_table};
