use super::add_widget_modal::{AddWidgetModal, WidgetPickerViewModel};
use super::category_section::CategorySection;
use crate::dashboards::d100_widget_board::bus::use_dashboard_bus;
use crate::dashboards::d100_widget_board::store::use_dashboard;
use crate::shared::config::Config;
use contracts::dashboards::d100_widget_board::filter::count_widgets;
use contracts::dashboards::d100_widget_board::{search_categories, SignalConcern};
use contracts::enums::LayoutType;
use leptos::prelude::*;

/// Main board: listens on the bus for picker, layout and search signals and
/// renders the categories that survive the dashboard search.
#[component]
pub fn WidgetBoardDashboard() -> impl IntoView {
    let store = use_dashboard();
    let bus = use_dashboard_bus();
    let config = use_context::<Config>().expect("Config not provided in context");

    let layout = RwSignal::new(config.layout.default);
    let search_query = RwSignal::new(String::new());
    let picker_open = RwSignal::new(false);
    let picker = WidgetPickerViewModel::new(config.picker.initial_tab(None));

    let picker_config = config.picker.clone();
    bus.on_open_picker(Callback::new(move |scope: Option<String>| {
        picker.open_on(picker_config.initial_tab(scope.as_deref()));
        picker_open.set(true);
    }));
    bus.on_layout_changed(Callback::new(move |l: LayoutType| {
        log::debug!("board layout set to '{}'", l.code());
        layout.set(l);
    }));
    bus.on_search_changed(Callback::new(move |q| search_query.set(q)));

    on_cleanup(move || {
        bus.unsubscribe(SignalConcern::Picker);
        bus.unsubscribe(SignalConcern::Layout);
        bus.unsubscribe(SignalConcern::Search);
    });

    let visible = Memo::new(move |_| {
        let query = search_query.get();
        store.with_categories(|categories| search_categories(categories, &query))
    });

    let results_badge = move || {
        if search_query.with(String::is_empty) {
            return None;
        }
        let found = visible.with(|categories| count_widgets(categories));
        Some(view! {
            <div class="dashboard__results">{format!("{} results found", found)}</div>
        })
    };

    let close_picker = Callback::new(move |_| picker_open.set(false));

    view! {
        <div class="dashboard">
            <div class="dashboard__intro">
                <div>
                    <h1 class="dashboard__title">"CNAPP Dashboard"</h1>
                    <p class="dashboard__subtitle">"Manage and customize your dashboard widgets"</p>
                </div>
                {results_badge}
            </div>

            <Show
                when=move || visible.with(|categories| !categories.is_empty())
                fallback=|| view! {
                    <div class="dashboard__empty">
                        <h3>"No widgets found"</h3>
                        <p>"Try adjusting your search query"</p>
                    </div>
                }
            >
                <For
                    each=move || visible.get()
                    key=|category| {
                        let widget_ids: Vec<String> =
                            category.widgets.iter().map(|w| w.id.clone()).collect();
                        (category.id.clone(), widget_ids)
                    }
                    children=move |category| {
                        view! {
                            <CategorySection category=category layout=layout query=search_query />
                        }
                    }
                />
            </Show>

            <Show when=move || picker_open.get()>
                <AddWidgetModal vm=picker on_close=close_picker />
            </Show>
        </div>
    }
}
