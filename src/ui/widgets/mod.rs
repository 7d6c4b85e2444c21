//! UI widgets for reusable components.

pub mod stat_card;
pub mod trend_chart;

pub use stat_card::{CardSize, StatCard};
pub use trend_chart::TrendChart;
