use super::card_animated::CardAnimated;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Key metric card: headline value with a title, optional subtitle and an
/// accent-coloured icon.
#[component]
pub fn MetricCard(
    /// Label displayed above the value
    #[prop(into)]
    title: String,
    /// Already formatted value
    #[prop(into)]
    value: String,
    /// Optional line below the value
    #[prop(optional, into)]
    subtitle: Option<String>,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Accent modifier: "blue", "green", "purple", "orange"
    accent: &'static str,
    /// Appear animation delay
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let subtitle_view = subtitle.map(|s| {
        view! { <div class="metric-card__subtitle">{s}</div> }
    });

    view! {
        <CardAnimated delay_ms=delay_ms class=format!("metric-card metric-card--{}", accent)>
            <div class="metric-card__body">
                <div class="metric-card__content">
                    <div class="metric-card__label">{title}</div>
                    <div class="metric-card__value">{value}</div>
                    {subtitle_view}
                </div>
                <div class="metric-card__icon">
                    {icon(icon_name)}
                </div>
            </div>
        </CardAnimated>
    }
}
