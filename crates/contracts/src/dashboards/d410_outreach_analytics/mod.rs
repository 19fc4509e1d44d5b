pub mod dataset;
pub mod dto;

pub use dataset::{load_embedded, parse_dataset, parse_month, reconcile_summary, DatasetError, SummaryDrift};
pub use dto::{MonthlyRecord, OutreachDataset, SummaryStats, VisitRecord};
