use super::locations_tab::LocationsTab;
use super::overview_tab::OverviewTab;
use super::trends_tab::TrendsTab;
use crate::dashboards::d410_outreach_analytics::startup::use_startup_gate;
use crate::dashboards::d410_outreach_analytics::view_state::DashboardView;
use crate::shared::icons::icon;
use chrono::Local;
use contracts::dashboards::d410_outreach_analytics::OutreachDataset;
use leptos::prelude::*;
use thaw::*;

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="outreach-loading">
            <Spinner />
            <p class="outreach-loading__title">"Loading Dashboard..."</p>
            <p class="outreach-loading__subtitle">"Analyzing outreach data"</p>
        </div>
    }
}

#[component]
fn ViewTabs(selected: RwSignal<String>) -> impl IntoView {
    view! {
        <TabList selected_value=selected>
            {DashboardView::ALL
                .iter()
                .map(|view| {
                    view! {
                        <Tab value=view.id()>
                            <span class="outreach__tab-label">
                                {icon(view.icon())}
                                {view.label()}
                            </span>
                        </Tab>
                    }
                })
                .collect_view()}
        </TabList>
    }
}

/// Outreach analytics dashboard: header, view tabs and the active view.
#[component]
pub fn OutreachDashboard(dataset: &'static OutreachDataset) -> impl IntoView {
    let phase = use_startup_gate();

    let selected_tab = RwSignal::new(DashboardView::default().id().to_string());
    // unknown tab ids keep whatever view was showing
    let active_view = Memo::new(move |previous: Option<&DashboardView>| {
        selected_tab
            .with(|id| DashboardView::from_id(id))
            .or(previous.copied())
            .unwrap_or_default()
    });

    Effect::new(move |_| {
        log::debug!("dashboard view: {}", active_view.get().id());
    });

    let today = Local::now().format("%-m/%-d/%Y").to_string();

    view! {
        <Show when=move || !phase.get().is_loading() fallback=|| view! { <LoadingScreen /> }>
            <div id="d410_outreach_analytics--dashboard" class="outreach">
                <header class="outreach__header">
                    <div>
                        <h1 class="outreach__title">"ReVive Outreach Analytics Dashboard"</h1>
                        <p class="outreach__subtitle">
                            "Comprehensive insights from street outreach activities across Chicago"
                        </p>
                    </div>
                    <div class="outreach__updated">
                        {icon("calendar")}
                        {format!("Last updated: {}", today)}
                    </div>
                </header>

                <ViewTabs selected=selected_tab />

                <main class="outreach__content">
                    {move || match active_view.get() {
                        DashboardView::Overview => view! { <OverviewTab dataset=dataset /> }.into_any(),
                        DashboardView::Locations => view! { <LocationsTab dataset=dataset /> }.into_any(),
                        DashboardView::Trends => view! { <TrendsTab dataset=dataset /> }.into_any(),
                    }}
                </main>

                <footer class="outreach__footer">
                    {format!(
                        "ReVive Impact Dashboard • Data from {} unique locations • Generated {}",
                        dataset.summary.unique_locations, today,
                    )}
                </footer>
            </div>
        </Show>
    }
}
