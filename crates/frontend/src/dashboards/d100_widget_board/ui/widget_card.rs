use crate::dashboards::d100_widget_board::store::use_dashboard;
use crate::shared::components::CardAnimated;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use contracts::dashboards::d100_widget_board::Widget;
use contracts::enums::WidgetType;
use leptos::prelude::*;
use std::f64::consts::PI;
use thaw::*;

/// Must match the `r` attribute of the ring circles
const RING_RADIUS: f64 = 40.0;
/// Share of the ring drawn as filled
const RING_FILL: f64 = 0.3;

/// Placed widget with a remove button and a type-specific decoration
#[component]
pub fn WidgetCard(
    widget: Widget,
    category_id: String,
    /// Dashboard query, highlighted in the name
    #[prop(into)]
    query: Signal<String>,
    #[prop(optional)] delay_ms: u32,
) -> impl IntoView {
    let store = use_dashboard();
    let widget_id = widget.id.clone();
    let name = widget.name.clone();
    let is_custom = widget.is_custom();

    let remove = move |_| store.remove_widget(&category_id, &widget_id);

    view! {
        <CardAnimated class="widget-card" delay_ms=delay_ms>
            <button class="widget-card__remove" on:click=remove title="Remove widget">
                {icon("x")}
            </button>
            <div class="widget-card__header">
                <h3 class="widget-card__title">
                    {move || query.with(|q| highlight_matches(&name, q))}
                </h3>
                <div class="widget-card__status">
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>"Active"</Badge>
                    {is_custom.then(|| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>"Custom"</Badge>
                    })}
                    <span class="widget-card__pulse"></span>
                </div>
            </div>
            <p class="widget-card__text">{widget.text.clone()}</p>
            {decoration(widget.widget_type)}
        </CardAnimated>
    }
}

fn decoration(widget_type: WidgetType) -> AnyView {
    let body = match widget_type {
        WidgetType::Donut => donut_decoration(),
        WidgetType::Bar => bar_decoration(),
        WidgetType::Default => view! {
            <div class="widget-card__placeholder">
                <div class="widget-card__placeholder-icon">{icon("bar-chart")}</div>
                <div>
                    <p class="widget-card__placeholder-title">"Widget Data"</p>
                    <p class="widget-card__placeholder-hint">"Custom content"</p>
                </div>
            </div>
        }
        .into_any(),
    };

    view! {
        <div
            class=format!("widget-card__decoration widget-card__decoration--{}", widget_type.code())
            title=widget_type.display_name()
        >
            {body}
        </div>
    }
    .into_any()
}

fn donut_decoration() -> AnyView {
    let circumference = 2.0 * PI * RING_RADIUS;
    let offset = circumference * (1.0 - RING_FILL);

    view! {
        <div class="widget-card__donut">
            <svg class="widget-card__ring" viewBox="0 0 100 100">
                <circle cx="50" cy="50" r="40" fill="none" stroke="#e0e7ff" stroke-width="8"/>
                <circle
                    cx="50"
                    cy="50"
                    r="40"
                    fill="none"
                    stroke="#4f46e5"
                    stroke-width="8"
                    stroke-linecap="round"
                    stroke-dasharray=format!("{:.2}", circumference)
                    stroke-dashoffset=format!("{:.2}", offset)
                />
            </svg>
            <div class="widget-card__ring-label">
                <span class="widget-card__ring-value">"2"</span>
                <span class="widget-card__ring-caption">"Total"</span>
            </div>
        </div>
    }
    .into_any()
}

fn bar_decoration() -> AnyView {
    let rows = [("Critical", 9, 15, "critical"), ("High", 150, 45, "high")];

    view! {
        <div class="widget-card__risk">
            <div class="widget-card__risk-header">
                <span class="widget-card__risk-title">
                    {icon("alert-circle")}
                    "Risk Assessment"
                </span>
                {icon("trending-up")}
            </div>
            {rows
                .into_iter()
                .map(|(label, count, width, level)| {
                    view! {
                        <div class="widget-card__risk-row">
                            <div class="widget-card__risk-label">
                                <span class=format!("widget-card__dot widget-card__dot--{}", level)></span>
                                {label}
                                <strong>{count}</strong>
                            </div>
                            <div class="widget-card__risk-track">
                                <div
                                    class=format!("widget-card__risk-fill widget-card__risk-fill--{}", level)
                                    style=format!("width: {}%;", width)
                                ></div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
            <div class="widget-card__risk-footer">
                {icon("check-circle")}
                "Monitoring active"
            </div>
        </div>
    }
    .into_any()
}
