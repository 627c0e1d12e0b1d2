pub mod view_model;

use crate::dashboards::d100_widget_board::store::use_dashboard;
use crate::shared::components::ui::TextField;
use crate::shared::config::Config;
use crate::shared::icons::icon;
use crate::shared::modal::Drawer;
use leptos::prelude::*;
use thaw::*;
pub use view_model::WidgetPickerViewModel;

/// Widget picker drawer.
///
/// Toggles and custom widgets are applied to the store immediately; Cancel
/// and Confirm only close the drawer.
#[component]
pub fn AddWidgetModal(vm: WidgetPickerViewModel, on_close: Callback<()>) -> impl IntoView {
    let store = use_dashboard();
    let config = use_context::<Config>().expect("Config not provided in context");
    let tabs = config.picker.tabs;

    let tab_buttons = tabs
        .into_iter()
        .map(|tab| {
            let id_for_class = tab.id.clone();
            let id_for_click = tab.id.clone();
            view! {
                <button
                    class="picker-tabs__tab"
                    class:picker-tabs__tab--active=move || vm.active_tab.with(|t| *t == id_for_class)
                    on:click=move |_| vm.select_tab(&id_for_click)
                >
                    {tab.label}
                </button>
            }
        })
        .collect_view();

    let custom_form = move || {
        if vm.show_custom_form.get() {
            view! {
                <div class="custom-widget-form">
                    <h3 class="custom-widget-form__title">"Create Custom Widget"</h3>
                    <TextField
                        label="Widget Name"
                        value=vm.custom_name
                        on_input=Callback::new(move |v| vm.custom_name.set(v))
                        placeholder="Enter widget name"
                        required=true
                    />
                    <TextField
                        label="Widget Text"
                        value=vm.custom_text
                        on_input=Callback::new(move |v| vm.custom_text.set(v))
                        placeholder="Enter widget content"
                        rows=3
                        required=true
                    />
                    <div class="custom-widget-form__actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || !vm.can_submit_custom())
                            on_click=move |_| {
                                vm.submit_custom(&store);
                            }
                        >
                            "Add Widget"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| vm.cancel_custom()
                        >
                            "Cancel"
                        </Button>
                    </div>
                </div>
            }
            .into_any()
        } else {
            view! {
                <button
                    class="custom-widget-form__open"
                    on:click=move |_| vm.show_custom_form.set(true)
                >
                    {icon("plus")}
                    "Create Custom Widget"
                </button>
            }
            .into_any()
        }
    };

    let widget_list = move || {
        let entries = vm.entries(&store);
        if entries.is_empty() {
            return view! {
                <div class="picker-list__empty">"No widgets found"</div>
            }
            .into_any();
        }

        entries
            .into_iter()
            .map(|entry| {
                let widget_id = entry.widget.id.clone();
                view! {
                    <label
                        class="picker-list__item"
                        class:picker-list__item--checked=entry.selected
                        on:click=move |ev| {
                            ev.prevent_default();
                            vm.toggle(&store, &widget_id);
                        }
                    >
                        <span
                            class="picker-list__check"
                            class:picker-list__check--on=entry.selected
                        >
                            {entry.selected.then(|| icon("check"))}
                        </span>
                        <span class="picker-list__body">
                            <span class="picker-list__name">{entry.widget.name.clone()}</span>
                            <span class="picker-list__text">{entry.widget.text.clone()}</span>
                        </span>
                    </label>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <Drawer
            title="Add Widget"
            subtitle="Personalise your dashboard by adding the following widget"
            on_close=on_close
        >
            <div class="picker-tabs">{tab_buttons}</div>
            <div class="picker-search">
                <span class="picker-search__icon">{icon("search")}</span>
                <input
                    type="text"
                    class="picker-search__field"
                    placeholder="Search widgets..."
                    prop:value=move || vm.search_query.get()
                    on:input=move |ev| vm.search_query.set(event_target_value(&ev))
                />
            </div>

            <div class="drawer__body">
                {custom_form}
                <div class="picker-list">{widget_list}</div>
            </div>

            <div class="drawer__footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| on_close.run(())>
                    "Confirm"
                </Button>
            </div>
        </Drawer>
    }
}
