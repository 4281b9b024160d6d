//! The analytics page: monthly spending per category as a chart and a table.

mod aggregation;
mod charts;
mod handlers;
mod tables;

pub use handlers::get_analytics_page;
