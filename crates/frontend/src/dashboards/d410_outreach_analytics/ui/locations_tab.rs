use super::charts::{ChartSeries, ComposedChart, CLIENTS_COLOR, ENGAGED_COLOR, VISITS_COLOR};
use crate::dashboards::d410_outreach_analytics::chart_layout::PlotFrame;
use crate::dashboards::d410_outreach_analytics::view_model::{
    location_rows, top_locations_chart_projection, TOP_LOCATIONS_CHART_LIMIT,
};
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::icons::icon;
use crate::shared::number_format::format_thousands;
use contracts::dashboards::d410_outreach_analytics::OutreachDataset;
use leptos::prelude::*;
use thaw::*;

/// Bottom margin leaves room for the rotated location names.
const LOCATIONS_FRAME: PlotFrame = PlotFrame {
    width: 960.0,
    height: 500.0,
    margin_top: 20.0,
    margin_right: 30.0,
    margin_bottom: 120.0,
    margin_left: 50.0,
};

#[component]
pub fn LocationsTab(dataset: &'static OutreachDataset) -> impl IntoView {
    let points = top_locations_chart_projection(&dataset.locations, TOP_LOCATIONS_CHART_LIMIT);
    let labels: Vec<String> = points.iter().map(|p| p.name.clone()).collect();
    let bars = vec![
        ChartSeries {
            name: "Total Visits",
            color: VISITS_COLOR,
            values: points.iter().map(|p| p.visits as f64).collect(),
        },
        ChartSeries {
            name: "Total Clients",
            color: CLIENTS_COLOR,
            values: points.iter().map(|p| p.clients as f64).collect(),
        },
        ChartSeries {
            name: "Clients Engaged",
            color: ENGAGED_COLOR,
            values: points.iter().map(|p| p.engaged as f64).collect(),
        },
    ];

    let rows = location_rows(&dataset.locations)
        .into_iter()
        .map(|row| {
            view! {
                <TableRow>
                    <TableCell><strong>{row.location}</strong></TableCell>
                    <TableCell>
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                            {format_thousands(row.visits)}
                        </Badge>
                    </TableCell>
                    <TableCell>{format_thousands(row.clients)}</TableCell>
                    <TableCell>{format_thousands(row.engaged)}</TableCell>
                    <TableCell>
                        <div class="rate-bar">
                            <div class="rate-bar__track">
                                <div class="rate-bar__fill" style=format!("width: {}%;", row.bar_width)></div>
                            </div>
                            <span class="rate-bar__label">{row.rate_label}</span>
                        </div>
                    </TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <div class="outreach__tab">
            <CardAnimated>
                <h3 class="panel__title">
                    {icon("map-pin")}
                    "Top Outreach Locations by Activity"
                </h3>
                <ComposedChart frame=LOCATIONS_FRAME labels=labels bars=bars rotate_labels=true />
            </CardAnimated>

            <CardAnimated delay_ms=200>
                <div class="panel__header">
                    <h3 class="panel__title">"Location Performance Details"</h3>
                    <p class="panel__subtitle">"Detailed metrics for top performing outreach locations"</p>
                </div>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Location"</TableHeaderCell>
                            <TableHeaderCell>"Visits"</TableHeaderCell>
                            <TableHeaderCell>"Total Clients"</TableHeaderCell>
                            <TableHeaderCell>"Engaged"</TableHeaderCell>
                            <TableHeaderCell>"Engagement Rate"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>{rows}</TableBody>
                </Table>
            </CardAnimated>
        </div>
    }
}
