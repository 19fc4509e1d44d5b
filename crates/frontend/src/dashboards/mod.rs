pub mod d410_outreach_analytics;

pub use d410_outreach_analytics::ui::OutreachDashboard;
