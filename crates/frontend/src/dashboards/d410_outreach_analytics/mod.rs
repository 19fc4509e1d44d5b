pub mod chart_layout;
pub mod startup;
pub mod ui;
pub mod view_model;
pub mod view_state;
