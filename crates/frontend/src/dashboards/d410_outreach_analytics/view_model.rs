//! View-model builder for the outreach dashboard.
//!
//! Pure projections from dataset records into chart and table shapes. Nothing
//! here touches the DOM or mutates its inputs.

use crate::shared::number_format::format_thousands;
use contracts::dashboards::d410_outreach_analytics::{
    parse_month, MonthlyRecord, OutreachDataset, SummaryStats, VisitRecord,
};
use serde::Serialize;

/// Number of locations shown on the "Top Outreach Locations" chart.
pub const TOP_LOCATIONS_CHART_LIMIT: usize = 8;

/// Chart labels longer than this are truncated.
pub const LABEL_MAX_CHARS: usize = 20;

const ELLIPSIS: &str = "...";

/// Engagement rate at or above which a location counts as highly engaged.
const HIGH_ENGAGEMENT_RATE: f64 = 80.0;
const MEDIUM_ENGAGEMENT_RATE: f64 = 50.0;

/// Monthly badge thresholds.
const GOOD_TONE_RATE: f64 = 80.0;
const FAIR_TONE_RATE: f64 = 60.0;

/// Spread of monthly rates (percentage points) still described as stable.
const STABLE_RATE_SPREAD: f64 = 1.0;

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Cut `label` to `max_chars` characters and append "..." when it is longer.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    match label.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &label[..cut], ELLIPSIS),
        None => label.to_string(),
    }
}

/// Engagement rate with exactly one decimal digit, e.g. "74.9".
pub fn format_rate(rate: f64) -> String {
    format!("{:.1}", rate)
}

/// Width of a progress bar for `rate`. Only the upper end is bounded.
pub fn clamp_percentage(rate: f64) -> f64 {
    rate.min(100.0)
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

/// One bar group of the top locations chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationChartPoint {
    pub name: String,
    pub visits: u32,
    pub clients: u32,
    pub engaged: u32,
    pub engagement_rate: String,
}

/// First `limit` records as chart points, in input order.
///
/// Callers sort by visits beforehand if they want a "top N" chart.
pub fn top_locations_chart_projection(
    records: &[VisitRecord],
    limit: usize,
) -> Vec<LocationChartPoint> {
    records
        .iter()
        .take(limit)
        .map(|record| LocationChartPoint {
            name: truncate_label(&record.location, LABEL_MAX_CHARS),
            visits: record.visits,
            clients: record.total_clients,
            engaged: record.total_engaged,
            engagement_rate: format_rate(record.engagement_rate),
        })
        .collect()
}

/// Row of the location performance table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRow {
    pub location: String,
    pub visits: u32,
    pub clients: u32,
    pub engaged: u32,
    /// e.g. "74.9%"
    pub rate_label: String,
    /// Progress bar width in percent
    pub bar_width: f64,
}

pub fn location_rows(records: &[VisitRecord]) -> Vec<LocationRow> {
    records
        .iter()
        .map(|record| LocationRow {
            location: record.location.clone(),
            visits: record.visits,
            clients: record.total_clients,
            engaged: record.total_engaged,
            rate_label: format!("{}%", format_rate(record.engagement_rate)),
            bar_width: clamp_percentage(record.engagement_rate),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Engagement distribution
// ---------------------------------------------------------------------------

/// Half-open engagement-rate bands used by the distribution pie.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum EngagementBucket {
    /// rate >= 80
    High,
    /// 50 <= rate < 80
    Medium,
    /// rate < 50
    Low,
}

impl EngagementBucket {
    pub const ALL: [EngagementBucket; 3] = [
        EngagementBucket::High,
        EngagementBucket::Medium,
        EngagementBucket::Low,
    ];

    pub fn classify(rate: f64) -> Self {
        if rate >= HIGH_ENGAGEMENT_RATE {
            EngagementBucket::High
        } else if rate >= MEDIUM_ENGAGEMENT_RATE {
            EngagementBucket::Medium
        } else {
            EngagementBucket::Low
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EngagementBucket::High => "High Engagement (80%+)",
            EngagementBucket::Medium => "Medium Engagement (50-79%)",
            EngagementBucket::Low => "Low Engagement (<50%)",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            EngagementBucket::High => "#10B981",
            EngagementBucket::Medium => "#F59E0B",
            EngagementBucket::Low => "#EF4444",
        }
    }

    fn index(&self) -> usize {
        match self {
            EngagementBucket::High => 0,
            EngagementBucket::Medium => 1,
            EngagementBucket::Low => 2,
        }
    }
}

/// One pie slice of the engagement distribution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementSlice {
    pub name: &'static str,
    /// Number of locations in the bucket
    pub value: usize,
    pub color: &'static str,
}

/// Count records per engagement bucket. Always three slices: high, medium, low.
pub fn engagement_distribution(records: &[VisitRecord]) -> Vec<EngagementSlice> {
    let mut counts = [0usize; 3];
    for record in records {
        counts[EngagementBucket::classify(record.engagement_rate).index()] += 1;
    }

    EngagementBucket::ALL
        .iter()
        .map(|bucket| EngagementSlice {
            name: bucket.name(),
            value: counts[bucket.index()],
            color: bucket.color(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Monthly
// ---------------------------------------------------------------------------

/// Badge colour of a monthly engagement rate
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum RateTone {
    Good,
    Fair,
    Poor,
}

impl RateTone {
    pub fn classify(rate: f64) -> Self {
        if rate >= GOOD_TONE_RATE {
            RateTone::Good
        } else if rate >= FAIR_TONE_RATE {
            RateTone::Fair
        } else {
            RateTone::Poor
        }
    }
}

/// Row of the monthly performance table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRow {
    pub month: String,
    pub visits: u32,
    pub clients: u32,
    pub engaged: u32,
    pub rate_label: String,
    pub tone: RateTone,
    pub shelter_requests: u32,
}

pub fn monthly_rows(records: &[MonthlyRecord]) -> Vec<MonthlyRow> {
    records
        .iter()
        .map(|record| MonthlyRow {
            month: record.month.clone(),
            visits: record.visits,
            clients: record.total_clients,
            engaged: record.total_engaged,
            rate_label: format!("{}%", format_rate(record.engagement_rate)),
            tone: RateTone::classify(record.engagement_rate),
            shelter_requests: record.shelter_requests,
        })
        .collect()
}

/// Month span covered by `records`, e.g. "Aug - Dec 2024".
///
/// Invalid month strings are skipped; `None` when nothing parses.
pub fn period_label(records: &[MonthlyRecord]) -> Option<String> {
    let mut months = records.iter().filter_map(|r| parse_month(&r.month).ok());
    let first = months.next()?;
    let last = months.last().unwrap_or(first);

    let label = if first == last {
        first.format("%b %Y").to_string()
    } else if first.format("%Y").to_string() == last.format("%Y").to_string() {
        format!("{} - {}", first.format("%b"), last.format("%b %Y"))
    } else {
        format!("{} - {}", first.format("%b %Y"), last.format("%b %Y"))
    };
    Some(label)
}

// ---------------------------------------------------------------------------
// Overview cards
// ---------------------------------------------------------------------------

/// Accent colour of a card or tile
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Orange,
}

impl Accent {
    /// BEM modifier, e.g. `metric-card--blue`
    pub fn modifier(&self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Green => "green",
            Accent::Purple => "purple",
            Accent::Orange => "orange",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCardData {
    pub title: &'static str,
    pub value: String,
    pub subtitle: String,
    pub icon: &'static str,
    pub accent: Accent,
    /// Stagger delay of the appear animation
    pub delay_ms: u32,
}

/// The four key-metric cards, in display order.
pub fn metric_cards(summary: &SummaryStats) -> Vec<MetricCardData> {
    vec![
        MetricCardData {
            title: "Total Outreach Visits",
            value: format_thousands(summary.total_visits),
            subtitle: "Across all locations".to_string(),
            icon: "map-pin",
            accent: Accent::Blue,
            delay_ms: 0,
        },
        MetricCardData {
            title: "People Encountered",
            value: format_thousands(summary.total_clients),
            subtitle: format!("Avg {} per visit", summary.avg_clients_per_visit),
            icon: "users",
            accent: Accent::Green,
            delay_ms: 100,
        },
        MetricCardData {
            title: "Successful Engagements",
            value: format_thousands(summary.total_engaged),
            subtitle: format!("{}% engagement rate", summary.overall_engagement_rate),
            icon: "activity",
            accent: Accent::Purple,
            delay_ms: 200,
        },
        MetricCardData {
            title: "Unique Locations",
            value: format_thousands(summary.unique_locations),
            subtitle: "Citywide coverage".to_string(),
            icon: "target",
            accent: Accent::Orange,
            delay_ms: 300,
        },
    ]
}

/// Tile of the impact summary panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactHighlight {
    pub value: String,
    pub label: &'static str,
    pub caption: &'static str,
    pub accent: Accent,
}

pub fn impact_highlights(summary: &SummaryStats) -> Vec<ImpactHighlight> {
    vec![
        ImpactHighlight {
            value: format!("{}%", summary.overall_engagement_rate),
            label: "Overall Engagement Rate",
            caption: "Share of encounters accepting services",
            accent: Accent::Blue,
        },
        ImpactHighlight {
            value: summary.avg_clients_per_visit.to_string(),
            label: "Average Clients per Visit",
            caption: "Consistent outreach reach",
            accent: Accent::Green,
        },
        ImpactHighlight {
            value: format_thousands(summary.unique_locations),
            label: "Unique Locations Served",
            caption: "Comprehensive city coverage",
            accent: Accent::Purple,
        },
    ]
}

// ---------------------------------------------------------------------------
// Insights
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: String,
}

/// "Key insights" derived from the dataset. Insights without data are left out.
pub fn insights(dataset: &OutreachDataset) -> Vec<Insight> {
    [
        peak_month_insight(&dataset.monthly),
        consistency_insight(&dataset.monthly),
        top_locations_insight(&dataset.locations, &dataset.summary),
        coverage_insight(&dataset.summary),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn peak_month_insight(monthly: &[MonthlyRecord]) -> Option<Insight> {
    // first month wins ties
    let peak = monthly
        .iter()
        .reduce(|best, m| if m.visits > best.visits { m } else { best })?;
    let month_name = parse_month(&peak.month)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|_| peak.month.clone());

    Some(Insight {
        icon: "trending-up",
        title: "Growth Trends",
        text: format!(
            "{} showed the highest activity with {} visits and {} clients encountered.",
            month_name,
            format_thousands(peak.visits),
            format_thousands(peak.total_clients)
        ),
    })
}

fn consistency_insight(monthly: &[MonthlyRecord]) -> Option<Insight> {
    if monthly.is_empty() {
        return None;
    }
    let rates = monthly.iter().map(|m| m.engagement_rate);
    let min = rates.clone().fold(f64::INFINITY, f64::min);
    let max = rates.clone().fold(f64::NEG_INFINITY, f64::max);
    let mean = rates.sum::<f64>() / monthly.len() as f64;

    let text = if max - min <= STABLE_RATE_SPREAD {
        format!(
            "Engagement rate remains stable at ~{:.0}% across all months.",
            mean
        )
    } else {
        format!(
            "Engagement rate ranged from {}% to {}% across months.",
            format_rate(min),
            format_rate(max)
        )
    };

    Some(Insight {
        icon: "target",
        title: "Consistency",
        text,
    })
}

fn top_locations_insight(locations: &[VisitRecord], summary: &SummaryStats) -> Option<Insight> {
    if locations.is_empty() || summary.total_clients == 0 {
        return None;
    }
    let clients: u32 = locations.iter().map(|l| l.total_clients).sum();
    let share = clients as f64 / summary.total_clients as f64 * 100.0;
    let focus: Vec<&str> = locations.iter().take(2).map(|l| l.location.as_str()).collect();

    Some(Insight {
        icon: "map-pin",
        title: "High-Impact Locations",
        text: format!(
            "Top {} locations account for {:.0}% of all client encounters. Focus resources on {} for maximum impact.",
            locations.len(),
            share,
            focus.join(" and ")
        ),
    })
}

fn coverage_insight(summary: &SummaryStats) -> Option<Insight> {
    if summary.unique_locations == 0 {
        return None;
    }
    Some(Insight {
        icon: "users",
        title: "Coverage",
        text: format!(
            "{} unique locations visited across the city.",
            format_thousands(summary.unique_locations)
        ),
    })
}
