pub mod charts;
pub mod dashboard;
pub mod locations_tab;
pub mod overview_tab;
pub mod trends_tab;

pub use dashboard::OutreachDashboard;
