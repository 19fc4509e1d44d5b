use serde::{Deserialize, Serialize};

/// Outreach activity at a single location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitRecord {
    /// Location name, usually an intersection (e.g. "Hubbard & Desplaines")
    pub location: String,
    pub visits: u32,
    pub total_clients: u32,
    /// Clients who accepted services, never more than `total_clients`
    pub total_engaged: u32,
    /// Percentage of clients engaged, roughly `total_engaged / total_clients * 100`
    pub engagement_rate: f64,
}

/// Outreach activity aggregated over one calendar month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Period in format "YYYY-MM"
    pub month: String,
    pub visits: u32,
    pub total_clients: u32,
    pub total_engaged: u32,
    pub engagement_rate: f64,
    pub shelter_requests: u32,
}

/// Program-wide totals as reported alongside the record lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_visits: u32,
    pub total_clients: u32,
    pub total_engaged: u32,
    pub total_shelter_requests: u32,
    pub unique_locations: u32,
    pub avg_clients_per_visit: f64,
    pub overall_engagement_rate: f64,
}

impl SummaryStats {
    /// Fold monthly aggregates into program totals.
    ///
    /// `unique_locations` cannot be recovered from per-month aggregates and is
    /// passed through as is. Ratios are rounded to one decimal, the precision
    /// the dashboard displays.
    pub fn from_monthly(monthly: &[MonthlyRecord], unique_locations: u32) -> Self {
        let total_visits: u32 = monthly.iter().map(|m| m.visits).sum();
        let total_clients: u32 = monthly.iter().map(|m| m.total_clients).sum();
        let total_engaged: u32 = monthly.iter().map(|m| m.total_engaged).sum();
        let total_shelter_requests: u32 = monthly.iter().map(|m| m.shelter_requests).sum();

        let avg_clients_per_visit = if total_visits == 0 {
            0.0
        } else {
            round_one_decimal(total_clients as f64 / total_visits as f64)
        };
        let overall_engagement_rate = if total_clients == 0 {
            0.0
        } else {
            round_one_decimal(total_engaged as f64 / total_clients as f64 * 100.0)
        };

        Self {
            total_visits,
            total_clients,
            total_engaged,
            total_shelter_requests,
            unique_locations,
            avg_clients_per_visit,
            overall_engagement_rate,
        }
    }
}

/// The complete literal dataset rendered by the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutreachDataset {
    pub summary: SummaryStats,
    /// Top locations, expected pre-sorted by descending visit count
    #[serde(default)]
    pub locations: Vec<VisitRecord>,
    /// Chronologically ordered months
    #[serde(default)]
    pub monthly: Vec<MonthlyRecord>,
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(month: &str, visits: u32, clients: u32, engaged: u32, shelter: u32) -> MonthlyRecord {
        MonthlyRecord {
            month: month.to_string(),
            visits,
            total_clients: clients,
            total_engaged: engaged,
            engagement_rate: 0.0,
            shelter_requests: shelter,
        }
    }

    #[test]
    fn test_from_monthly_folds_totals() {
        let monthly = vec![
            month("2024-08", 10, 60, 45, 1),
            month("2024-09", 20, 80, 60, 0),
        ];
        let summary = SummaryStats::from_monthly(&monthly, 12);

        assert_eq!(summary.total_visits, 30);
        assert_eq!(summary.total_clients, 140);
        assert_eq!(summary.total_engaged, 105);
        assert_eq!(summary.total_shelter_requests, 1);
        assert_eq!(summary.unique_locations, 12);
        assert_eq!(summary.avg_clients_per_visit, 4.7);
        assert_eq!(summary.overall_engagement_rate, 75.0);
    }

    #[test]
    fn test_from_monthly_empty_has_zero_ratios() {
        let summary = SummaryStats::from_monthly(&[], 0);
        assert_eq!(summary.total_visits, 0);
        assert_eq!(summary.avg_clients_per_visit, 0.0);
        assert_eq!(summary.overall_engagement_rate, 0.0);
    }
}
