use super::charts::EngagementPie;
use super::trends_tab::{MonthlyActivityChart, MonthlySeriesNames};
use crate::dashboards::d410_outreach_analytics::view_model::{
    engagement_distribution, impact_highlights, metric_cards,
};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::metric_card::MetricCard;
use crate::shared::icons::icon;
use contracts::dashboards::d410_outreach_analytics::OutreachDataset;
use leptos::prelude::*;

const OVERVIEW_SERIES: MonthlySeriesNames = MonthlySeriesNames {
    visits: "Visits",
    clients: "Clients",
    rate: "Engagement %",
};

#[component]
pub fn OverviewTab(dataset: &'static OutreachDataset) -> impl IntoView {
    let cards = metric_cards(&dataset.summary)
        .into_iter()
        .map(|card| {
            view! {
                <MetricCard
                    title=card.title
                    value=card.value
                    subtitle=card.subtitle
                    icon_name=card.icon
                    accent=card.accent.modifier()
                    delay_ms=card.delay_ms
                />
            }
        })
        .collect_view();

    let tiles = impact_highlights(&dataset.summary)
        .into_iter()
        .map(|tile| {
            view! {
                <div class=format!("impact-tile impact-tile--{}", tile.accent.modifier())>
                    <div class="impact-tile__value">{tile.value}</div>
                    <div class="impact-tile__label">{tile.label}</div>
                    <div class="impact-tile__caption">{tile.caption}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="outreach__tab">
            <div class="metric-grid">{cards}</div>

            <div class="chart-grid">
                <CardAnimated>
                    <h3 class="panel__title">
                        {icon("trending-up")}
                        "Monthly Outreach Activity"
                    </h3>
                    <MonthlyActivityChart records=dataset.monthly.as_slice() height=300.0 names=OVERVIEW_SERIES />
                </CardAnimated>

                <CardAnimated delay_ms=200>
                    <h3 class="panel__title">
                        {icon("award")}
                        "Location Engagement Distribution"
                    </h3>
                    <EngagementPie slices=engagement_distribution(&dataset.locations) />
                </CardAnimated>
            </div>

            <CardAnimated delay_ms=400>
                <h3 class="panel__title">
                    {icon("home")}
                    "Impact Summary"
                </h3>
                <div class="impact-grid">{tiles}</div>
            </CardAnimated>
        </div>
    }
}
