//! Thaw Card that fades in on mount.
//!
//! The `card-appear` keyframes live in `static/dashboard.css`. Sibling cards
//! get increasing `delay_ms` for a stagger effect:
//!
//! ```text
//! <CardAnimated delay_ms=0>   // card 1
//! <CardAnimated delay_ms=100> // card 2
//! <CardAnimated delay_ms=200> // card 3
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Thaw [`Card`] with the `card-appear` animation.
#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra CSS classes for the card root.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.3s ease-out {}ms both;", delay_ms);
    let class = if class.is_empty() {
        "dashboard-card".to_string()
    } else {
        format!("dashboard-card {}", class)
    };

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}
