pub mod d410_outreach_analytics;
