use crate::dashboards::d100_widget_board::bus::provide_dashboard_bus;
use crate::dashboards::d100_widget_board::store::provide_dashboard_store;
use crate::dashboards::WidgetBoardDashboard;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::config::{load_config, Config};
use anyhow::Context;
use contracts::dashboards::d100_widget_board::DashboardData;
use leptos::prelude::*;

/// Load configuration and the bundled dataset
pub fn bootstrap() -> anyhow::Result<(Config, DashboardData)> {
    let config = load_config().context("failed to load embedded configuration")?;
    let data = DashboardData::bundled().context("failed to load bundled dashboard data")?;
    log::info!(
        "dashboard data loaded: {} categories, {} catalog widgets",
        data.categories.len(),
        data.available_widgets.len()
    );
    Ok((config, data))
}

#[component]
pub fn App() -> impl IntoView {
    match bootstrap() {
        Ok((config, data)) => {
            provide_context(AppGlobalContext::new(
                config.layout.default,
                config.header.time_range,
            ));
            provide_context(config);
            provide_dashboard_store(data);
            provide_dashboard_bus();

            view! {
                <Shell>
                    <WidgetBoardDashboard />
                </Shell>
            }
            .into_any()
        }
        Err(err) => {
            log::error!("bootstrap failed: {:#}", err);
            view! {
                <div class="app-error">
                    <h1>"Dashboard unavailable"</h1>
                    <pre>{format!("{:#}", err)}</pre>
                </div>
            }
            .into_any()
        }
    }
}
