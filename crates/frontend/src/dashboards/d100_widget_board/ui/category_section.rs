use super::widget_card::WidgetCard;
use crate::dashboards::d100_widget_board::bus::use_dashboard_bus;
use crate::shared::components::card_animated::stagger_delay;
use crate::shared::icons::icon;
use contracts::dashboards::d100_widget_board::{Category, DashboardSignal};
use contracts::enums::LayoutType;
use leptos::prelude::*;

/// One category: title, widget count, its cards and an "Add Widget" tile
#[component]
pub fn CategorySection(
    category: Category,
    #[prop(into)] layout: Signal<LayoutType>,
    #[prop(into)] query: Signal<String>,
) -> impl IntoView {
    let bus = use_dashboard_bus();
    let count_label = category.count_label();
    let category_id = category.id.clone();

    let open_picker = move |_| {
        bus.emit(DashboardSignal::OpenWidgetPickerForCategory {
            category_id: category_id.clone(),
        });
    };

    let cards = category
        .widgets
        .into_iter()
        .enumerate()
        .map(|(index, widget)| {
            view! {
                <WidgetCard
                    widget=widget
                    category_id=category.id.clone()
                    query=query
                    delay_ms=stagger_delay(index)
                />
            }
        })
        .collect_view();

    view! {
        <section class="category-section">
            <div class="category-section__header">
                <span class="category-section__icon">{icon("sparkles")}</span>
                <h2 class="category-section__title">{category.name.clone()}</h2>
                <div class="category-section__rule"></div>
                <span class="category-section__count">{count_label}</span>
            </div>

            <div class=move || layout.get().grid_class()>
                {cards}
                <button class="widget-add-tile" on:click=open_picker>
                    <span class="widget-add-tile__icon">{icon("plus")}</span>
                    <span class="widget-add-tile__label">"Add Widget"</span>
                    <span class="widget-add-tile__hint">"Click to add a new widget"</span>
                </button>
            </div>
        </section>
    }
}
