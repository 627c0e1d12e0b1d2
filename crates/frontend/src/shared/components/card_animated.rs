//! Thaw `Card` that fades in when mounted.
//!
//! The `card-appear` keyframes live in `styles/app.css`. Pass increasing
//! `delay_ms` values to stagger a row of cards.

use leptos::prelude::*;
use thaw::Card;

/// Stagger step between consecutive cards of one section
pub const STAGGER_STEP_MS: u32 = 60;

/// Delay for the card at `index`, capped so long sections do not lag
pub fn stagger_delay(index: usize) -> u32 {
    (index.min(8) as u32) * STAGGER_STEP_MS
}

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra CSS classes on the card
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}
