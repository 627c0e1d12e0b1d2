//! TopHeader component - dashboard top bar.
//!
//! Contains:
//! - Breadcrumb
//! - Debounced search that broadcasts `search-changed`
//! - Add Widget, Refresh and layout toggle
//! - Notifications, profile and time-range menus

pub mod menus;

use crate::dashboards::d100_widget_board::bus::use_dashboard_bus;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::Config;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::dashboards::d100_widget_board::DashboardSignal;
use contracts::enums::LayoutType;
use leptos::prelude::*;
use menus::{NotificationsMenu, ProfileMenu, TimeRangeMenu};
use thaw::*;

/// Reload the page; all in-memory board state is lost
fn reload_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().reload() {
        log::error!("page reload failed: {:?}", err);
    }
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let config = leptos::context::use_context::<Config>().expect("Config not found");
    let bus = use_dashboard_bus();

    let on_search = bus.search_emitter();

    let open_picker = move |_| {
        ctx.close_menus();
        bus.emit(DashboardSignal::OpenWidgetPickerGlobal);
    };

    let toggle_layout = move |_| {
        let layout = ctx.toggle_layout();
        bus.emit(DashboardSignal::LayoutChanged { layout });
    };

    view! {
        <div class="top-header">
            <nav class="top-header__breadcrumb">
                <button
                    class="top-header__crumb"
                    on:click=move |_| log::debug!("breadcrumb: home")
                >
                    {icon("home")}
                    <span>"Home"</span>
                </button>
                <span class="top-header__crumb-sep">{icon("chevron-right")}</span>
                <span class="top-header__crumb top-header__crumb--current">"Dashboard"</span>
            </nav>

            <div class="top-header__search">
                <SearchInput
                    on_change=on_search
                    debounce_ms=config.search.debounce_ms
                    placeholder="Search anything..."
                />
            </div>

            <div class="top-header__actions">
                <Button appearance=ButtonAppearance::Primary on_click=open_picker>
                    {icon("plus")}
                    "Add Widget"
                </Button>

                <button
                    class="top-header__icon-btn"
                    on:click=move |_| reload_page()
                    title="Refresh"
                >
                    {icon("refresh")}
                </button>

                <button
                    class="top-header__icon-btn"
                    on:click=toggle_layout
                    title=move || match ctx.layout.get() {
                        LayoutType::Grid => "Switch to list view",
                        LayoutType::List => "Switch to grid view",
                    }
                >
                    {move || match ctx.layout.get() {
                        LayoutType::Grid => icon("layout-grid"),
                        LayoutType::List => icon("layout-list"),
                    }}
                </button>

                <NotificationsMenu />
                <ProfileMenu />
                <TimeRangeMenu />
            </div>
        </div>
    }
}
