//! Statistics dashboard rendered from built-in sample series.

mod data;
mod ui;

pub use ui::OverviewDashboard;
