use super::charts::{ChartSeries, ComposedChart, CLIENTS_COLOR, RATE_LINE_COLOR, VISITS_COLOR};
use crate::dashboards::d410_outreach_analytics::chart_layout::PlotFrame;
use crate::dashboards::d410_outreach_analytics::view_model::{
    insights, monthly_rows, period_label, RateTone,
};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::icons::icon;
use crate::shared::number_format::format_thousands;
use contracts::dashboards::d410_outreach_analytics::{MonthlyRecord, OutreachDataset};
use leptos::prelude::*;
use thaw::*;

/// Series names of the monthly activity chart
#[derive(Debug, Clone, Copy)]
pub struct MonthlySeriesNames {
    pub visits: &'static str,
    pub clients: &'static str,
    pub rate: &'static str,
}

/// Monthly visits and clients as bars, engagement rate as a line.
#[component]
pub fn MonthlyActivityChart(
    records: &'static [MonthlyRecord],
    height: f64,
    names: MonthlySeriesNames,
) -> impl IntoView {
    let frame = PlotFrame {
        width: 960.0,
        height,
        margin_top: 20.0,
        margin_right: 50.0,
        margin_bottom: 40.0,
        margin_left: 50.0,
    };
    let labels: Vec<String> = records.iter().map(|m| m.month.clone()).collect();
    let bars = vec![
        ChartSeries {
            name: names.visits,
            color: VISITS_COLOR,
            values: records.iter().map(|m| m.visits as f64).collect(),
        },
        ChartSeries {
            name: names.clients,
            color: CLIENTS_COLOR,
            values: records.iter().map(|m| m.total_clients as f64).collect(),
        },
    ];
    let line = ChartSeries {
        name: names.rate,
        color: RATE_LINE_COLOR,
        values: records.iter().map(|m| m.engagement_rate).collect(),
    };

    view! { <ComposedChart frame=frame labels=labels bars=bars line=line /> }
}

fn tone_badge_color(tone: RateTone) -> BadgeColor {
    match tone {
        RateTone::Good => BadgeColor::Success,
        RateTone::Fair => BadgeColor::Warning,
        RateTone::Poor => BadgeColor::Danger,
    }
}

const TRENDS_SERIES: MonthlySeriesNames = MonthlySeriesNames {
    visits: "Monthly Visits",
    clients: "Clients Encountered",
    rate: "Engagement Rate %",
};

#[component]
pub fn TrendsTab(dataset: &'static OutreachDataset) -> impl IntoView {
    let title = match period_label(&dataset.monthly) {
        Some(period) => format!("Monthly Outreach Trends ({})", period),
        None => "Monthly Outreach Trends".to_string(),
    };

    let rows = monthly_rows(&dataset.monthly)
        .into_iter()
        .map(|row| {
            view! {
                <TableRow>
                    <TableCell><strong>{row.month}</strong></TableCell>
                    <TableCell>{format_thousands(row.visits)}</TableCell>
                    <TableCell>{format_thousands(row.clients)}</TableCell>
                    <TableCell>{format_thousands(row.engaged)}</TableCell>
                    <TableCell>
                        <Badge appearance=BadgeAppearance::Tint color=tone_badge_color(row.tone)>
                            {row.rate_label}
                        </Badge>
                    </TableCell>
                    <TableCell>
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                            {row.shelter_requests.to_string()}
                        </Badge>
                    </TableCell>
                </TableRow>
            }
        })
        .collect_view();

    let insight_views = insights(dataset)
        .into_iter()
        .map(|insight| {
            view! {
                <div class="insights__item">
                    <h4 class="insights__title">
                        {icon(insight.icon)}
                        {insight.title}
                    </h4>
                    <p class="insights__text">{insight.text}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="outreach__tab">
            <CardAnimated>
                <h3 class="panel__title">
                    {icon("trending-up")}
                    {title}
                </h3>
                <MonthlyActivityChart records=dataset.monthly.as_slice() height=400.0 names=TRENDS_SERIES />
            </CardAnimated>

            <CardAnimated delay_ms=200>
                <div class="panel__header">
                    <h3 class="panel__title">"Monthly Performance Breakdown"</h3>
                    <p class="panel__subtitle">"Detailed monthly statistics and performance indicators"</p>
                </div>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Month"</TableHeaderCell>
                            <TableHeaderCell>"Visits"</TableHeaderCell>
                            <TableHeaderCell>"Clients"</TableHeaderCell>
                            <TableHeaderCell>"Engaged"</TableHeaderCell>
                            <TableHeaderCell>"Engagement Rate"</TableHeaderCell>
                            <TableHeaderCell>"Shelter Requests"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{rows}</TableBody>
                </Table>
            </CardAnimated>

            <CardAnimated delay_ms=400 class="insights">
                <h3 class="panel__title">
                    {icon("award")}
                    "Key Insights"
                </h3>
                <div class="insights__grid">{insight_views}</div>
            </CardAnimated>
        </div>
    }
}
