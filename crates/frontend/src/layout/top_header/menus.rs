//! Header dropdowns: notifications, profile and time range.
//!
//! Open state lives in [`AppGlobalContext::open_menu`], so opening one menu
//! closes the others.

use crate::layout::global_context::{AppGlobalContext, HeaderMenu};
use crate::shared::icons::icon;
use contracts::enums::TimeRange;
use leptos::prelude::*;

fn use_header_context() -> AppGlobalContext {
    leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[component]
pub fn NotificationsMenu() -> impl IntoView {
    let ctx = use_header_context();

    view! {
        <div class="header-menu">
            <button
                class="top-header__icon-btn"
                on:click=move |_| ctx.toggle_menu(HeaderMenu::Notifications)
                title="Notifications"
            >
                {icon("bell")}
                {move || {
                    let unread = ctx.unread_count();
                    (unread > 0).then(|| view! {
                        <span class="header-menu__counter">{unread}</span>
                    })
                }}
            </button>

            <Show when=move || ctx.is_open(HeaderMenu::Notifications)>
                <div class="header-menu__panel header-menu__panel--wide">
                    <div class="header-menu__title">"Notifications"</div>
                    <For
                        each=move || ctx.notifications.get()
                        key=|n| (n.id, n.unread)
                        children=move |n| {
                            view! {
                                <div
                                    class="header-menu__notification"
                                    class:header-menu__notification--unread=n.unread
                                >
                                    <div class="header-menu__notification-body">
                                        <p class="header-menu__notification-title">{n.title.clone()}</p>
                                        <p class="header-menu__notification-message">{n.message.clone()}</p>
                                        <span class="header-menu__notification-time">
                                            {icon("clock")}
                                            {n.time.clone()}
                                        </span>
                                    </div>
                                    {n.unread.then(|| view! { <span class="header-menu__dot"></span> })}
                                </div>
                            }
                        }
                    />
                    <button
                        class="header-menu__footer-btn"
                        on:click=move |_| {
                            ctx.mark_all_read();
                            ctx.close_menus();
                        }
                    >
                        "View All Notifications"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn ProfileMenu() -> impl IntoView {
    let ctx = use_header_context();

    let entry = move |name: &'static str, label: &'static str, danger: bool| {
        view! {
            <button
                class="header-menu__item"
                class:header-menu__item--danger=danger
                on:click=move |_| {
                    log::info!("profile menu: {}", label);
                    ctx.close_menus();
                }
            >
                {icon(name)}
                <span>{label}</span>
            </button>
        }
    };

    view! {
        <div class="header-menu">
            <button
                class="top-header__icon-btn"
                on:click=move |_| ctx.toggle_menu(HeaderMenu::Profile)
                title="Profile"
            >
                {icon("user")}
            </button>

            <Show when=move || ctx.is_open(HeaderMenu::Profile)>
                <div class="header-menu__panel">
                    <div class="header-menu__profile">
                        <div class="header-menu__avatar">"JD"</div>
                        <div>
                            <p class="header-menu__profile-name">"John Doe"</p>
                            <p class="header-menu__profile-email">"john.doe@example.com"</p>
                        </div>
                    </div>
                    {entry("settings", "Settings", false)}
                    {entry("user", "Profile", false)}
                    <div class="header-menu__divider"></div>
                    {entry("log-out", "Logout", true)}
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn TimeRangeMenu() -> impl IntoView {
    let ctx = use_header_context();

    view! {
        <div class="header-menu">
            <button
                class="header-menu__trigger"
                on:click=move |_| ctx.toggle_menu(HeaderMenu::TimeRange)
            >
                {icon("clock")}
                <span>{move || ctx.time_range.get().display_name()}</span>
                <span
                    class="header-menu__chevron"
                    class:header-menu__chevron--open=move || ctx.is_open(HeaderMenu::TimeRange)
                >
                    {icon("chevron-down")}
                </span>
            </button>

            <Show when=move || ctx.is_open(HeaderMenu::TimeRange)>
                <div class="header-menu__panel">
                    {TimeRange::all()
                        .into_iter()
                        .map(|range| {
                            view! {
                                <button
                                    class="header-menu__item"
                                    class:header-menu__item--active=move || ctx.time_range.get() == range
                                    on:click=move |_| ctx.select_time_range(range)
                                >
                                    {range.display_name()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
