use crate::dashboards::OutreachDashboard;
use contracts::dashboards::d410_outreach_analytics::{load_embedded, reconcile_summary};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    match load_embedded() {
        Ok(dataset) => {
            for drift in reconcile_summary(dataset) {
                log::warn!(
                    "summary field {} is {} but monthly records add up to {}",
                    drift.field,
                    drift.supplied,
                    drift.derived
                );
            }
            view! { <OutreachDashboard dataset=dataset /> }.into_any()
        }
        Err(err) => {
            log::error!("Failed to load outreach dataset: {:#}", err);
            view! { <DatasetError message=format!("{:#}", err) /> }.into_any()
        }
    }
}

#[component]
fn DatasetError(message: String) -> impl IntoView {
    view! {
        <div class="outreach-error">
            <h2>"Dashboard unavailable"</h2>
            <p>"The outreach dataset could not be loaded."</p>
            <pre class="outreach-error__detail">{message}</pre>
        </div>
    }
}
