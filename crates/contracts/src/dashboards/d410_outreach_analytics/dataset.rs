//! Embedded outreach dataset: loading, validation and summary reconciliation.

use super::dto::{OutreachDataset, SummaryStats};
use anyhow::Context;
use chrono::NaiveDate;
use once_cell::sync::OnceCell;
use thiserror::Error;

/// Dataset shipped with the application
const EMBEDDED_DATASET: &str = include_str!("../../../data/outreach_dataset.toml");

static EMBEDDED: OnceCell<OutreachDataset> = OnceCell::new();

/// Tolerance used when comparing supplied ratios with the folded ones.
/// Both sides are shown with one decimal.
const RATIO_TOLERANCE: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    #[error("{record}: {engaged} engaged clients exceed {clients} encountered")]
    EngagedExceedsClients {
        record: String,
        engaged: u32,
        clients: u32,
    },
    #[error("invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),
    #[error("months out of order: '{previous}' is followed by '{next}'")]
    MonthsOutOfOrder { previous: String, next: String },
    #[error("{0}: engagement rate is not a finite number")]
    NonFiniteRate(String),
}

/// Summary field whose supplied value disagrees with the fold over monthly records
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryDrift {
    pub field: &'static str,
    pub supplied: f64,
    pub derived: f64,
}

/// Parse and validate a dataset from TOML source
pub fn parse_dataset(source: &str) -> anyhow::Result<OutreachDataset> {
    let dataset: OutreachDataset =
        toml::from_str(source).context("outreach dataset is not valid TOML")?;
    validate(&dataset).context("outreach dataset failed validation")?;
    Ok(dataset)
}

/// Load the embedded dataset. Parsed once, then shared for the process lifetime.
pub fn load_embedded() -> anyhow::Result<&'static OutreachDataset> {
    EMBEDDED.get_or_try_init(|| parse_dataset(EMBEDDED_DATASET))
}

/// Check record invariants: engaged never exceeds encountered, rates are finite,
/// months are well-formed and strictly increasing.
pub fn validate(dataset: &OutreachDataset) -> Result<(), DatasetError> {
    for record in &dataset.locations {
        check_counts(&record.location, record.total_engaged, record.total_clients)?;
        if !record.engagement_rate.is_finite() {
            return Err(DatasetError::NonFiniteRate(record.location.clone()));
        }
    }

    let mut previous: Option<(NaiveDate, &str)> = None;
    for record in &dataset.monthly {
        let start = parse_month(&record.month)?;
        check_counts(&record.month, record.total_engaged, record.total_clients)?;
        if !record.engagement_rate.is_finite() {
            return Err(DatasetError::NonFiniteRate(record.month.clone()));
        }
        if let Some((prev_start, prev_month)) = previous {
            if start <= prev_start {
                return Err(DatasetError::MonthsOutOfOrder {
                    previous: prev_month.to_string(),
                    next: record.month.clone(),
                });
            }
        }
        previous = Some((start, &record.month));
    }

    Ok(())
}

/// Compare the supplied summary with the fold over monthly records.
///
/// Returns one entry per drifting field; an empty vector means the summary is
/// consistent. `unique_locations` is not derivable and never reported.
pub fn reconcile_summary(dataset: &OutreachDataset) -> Vec<SummaryDrift> {
    let supplied = &dataset.summary;
    let derived = SummaryStats::from_monthly(&dataset.monthly, supplied.unique_locations);

    let counts = [
        ("total_visits", supplied.total_visits, derived.total_visits),
        ("total_clients", supplied.total_clients, derived.total_clients),
        ("total_engaged", supplied.total_engaged, derived.total_engaged),
        (
            "total_shelter_requests",
            supplied.total_shelter_requests,
            derived.total_shelter_requests,
        ),
    ];
    let ratios = [
        (
            "avg_clients_per_visit",
            supplied.avg_clients_per_visit,
            derived.avg_clients_per_visit,
        ),
        (
            "overall_engagement_rate",
            supplied.overall_engagement_rate,
            derived.overall_engagement_rate,
        ),
    ];

    let mut drift: Vec<SummaryDrift> = counts
        .into_iter()
        .filter(|(_, s, d)| s != d)
        .map(|(field, s, d)| SummaryDrift {
            field,
            supplied: s as f64,
            derived: d as f64,
        })
        .collect();

    drift.extend(
        ratios
            .into_iter()
            .filter(|(_, s, d)| (s - d).abs() > RATIO_TOLERANCE)
            .map(|(field, supplied, derived)| SummaryDrift {
                field,
                supplied,
                derived,
            }),
    );

    drift
}

fn check_counts(record: &str, engaged: u32, clients: u32) -> Result<(), DatasetError> {
    if engaged > clients {
        return Err(DatasetError::EngagedExceedsClients {
            record: record.to_string(),
            engaged,
            clients,
        });
    }
    Ok(())
}

/// Parse a "YYYY-MM" period into the first day of that month
pub fn parse_month(month: &str) -> Result<NaiveDate, DatasetError> {
    // chrono accepts single-digit months, the dataset format does not
    if month.len() != 7 {
        return Err(DatasetError::InvalidMonth(month.to_string()));
    }
    NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
        .map_err(|_| DatasetError::InvalidMonth(month.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
[summary]
total_visits = 3
total_clients = 20
total_engaged = 15
total_shelter_requests = 1
unique_locations = 2
avg_clients_per_visit = 6.7
overall_engagement_rate = 75.0

[[locations]]
location = "Ohio & Halsted"
visits = 2
total_clients = 12
total_engaged = 9
engagement_rate = 75.0

[[monthly]]
month = "2024-11"
visits = 1
total_clients = 8
total_engaged = 6
engagement_rate = 75.0
shelter_requests = 0

[[monthly]]
month = "2024-12"
visits = 2
total_clients = 12
total_engaged = 9
engagement_rate = 75.0
shelter_requests = 1
"#;

    fn minimal() -> OutreachDataset {
        parse_dataset(MINIMAL).expect("minimal dataset parses")
    }

    #[test]
    fn test_embedded_dataset_loads() {
        let dataset = load_embedded().expect("embedded dataset is valid");
        assert_eq!(dataset.locations.len(), 10);
        assert_eq!(dataset.monthly.len(), 5);
        assert_eq!(dataset.locations[0].location, "Hubbard & Desplaines");
        assert_eq!(dataset.monthly[4].month, "2024-12");
        assert_eq!(dataset.summary.unique_locations, 232);
    }

    #[test]
    fn test_embedded_dataset_is_loaded_once() {
        let first = load_embedded().unwrap();
        let second = load_embedded().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_embedded_summary_matches_monthly_records() {
        let dataset = load_embedded().unwrap();
        assert!(reconcile_summary(dataset).is_empty());
    }

    #[test]
    fn test_parse_minimal_dataset() {
        let dataset = minimal();
        assert_eq!(dataset.summary.total_visits, 3);
        assert_eq!(dataset.locations.len(), 1);
        assert_eq!(dataset.monthly.len(), 2);
        assert!(reconcile_summary(&dataset).is_empty());
    }

    #[test]
    fn test_missing_record_lists_default_to_empty() {
        let source = MINIMAL.split("[[locations]]").next().unwrap();
        let dataset = parse_dataset(source).unwrap();
        assert!(dataset.locations.is_empty());
        assert!(dataset.monthly.is_empty());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let err = parse_dataset("[summary\ntotal_visits = 1").unwrap_err();
        assert!(err.to_string().contains("not valid TOML"));
    }

    #[test]
    fn test_engaged_exceeding_clients_is_rejected() {
        let mut dataset = minimal();
        dataset.locations[0].total_engaged = 13;
        assert_eq!(
            validate(&dataset),
            Err(DatasetError::EngagedExceedsClients {
                record: "Ohio & Halsted".to_string(),
                engaged: 13,
                clients: 12,
            })
        );
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        let mut dataset = minimal();
        dataset.monthly[0].month = "2024-13".to_string();
        assert_eq!(
            validate(&dataset),
            Err(DatasetError::InvalidMonth("2024-13".to_string()))
        );

        dataset.monthly[0].month = "2024-8".to_string();
        assert_eq!(
            validate(&dataset),
            Err(DatasetError::InvalidMonth("2024-8".to_string()))
        );
    }

    #[test]
    fn test_months_out_of_order_are_rejected() {
        let mut dataset = minimal();
        dataset.monthly.swap(0, 1);
        assert_eq!(
            validate(&dataset),
            Err(DatasetError::MonthsOutOfOrder {
                previous: "2024-12".to_string(),
                next: "2024-11".to_string(),
            })
        );
    }

    #[test]
    fn test_duplicate_month_is_rejected() {
        let mut dataset = minimal();
        dataset.monthly[1].month = "2024-11".to_string();
        assert!(matches!(
            validate(&dataset),
            Err(DatasetError::MonthsOutOfOrder { .. })
        ));
    }

    #[test]
    fn test_non_finite_rate_is_rejected() {
        let mut dataset = minimal();
        dataset.locations[0].engagement_rate = f64::NAN;
        assert_eq!(
            validate(&dataset),
            Err(DatasetError::NonFiniteRate("Ohio & Halsted".to_string()))
        );
    }

    #[test]
    fn test_reconcile_reports_drifting_fields() {
        let mut dataset = minimal();
        dataset.summary.total_visits = 4;
        dataset.summary.overall_engagement_rate = 80.0;

        let drift = reconcile_summary(&dataset);
        assert_eq!(drift.len(), 2);
        assert_eq!(
            drift[0],
            SummaryDrift {
                field: "total_visits",
                supplied: 4.0,
                derived: 3.0,
            }
        );
        assert_eq!(drift[1].field, "overall_engagement_rate");
        assert_eq!(drift[1].derived, 75.0);
    }

    #[test]
    fn test_reconcile_tolerates_rounding() {
        let mut dataset = minimal();
        // 20 / 3 = 6.666.., displayed as 6.7
        dataset.summary.avg_clients_per_visit = 6.66;
        assert!(reconcile_summary(&dataset).is_empty());
    }
}
