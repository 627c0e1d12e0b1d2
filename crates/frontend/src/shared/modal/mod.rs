use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Right-side drawer over a dimmed overlay.
///
/// Clicking the overlay or the close button calls `on_close`. Children fill
/// the rest of the panel and handle their own scrolling.
#[component]
pub fn Drawer(
    /// Title of the drawer
    #[prop(into)]
    title: String,
    /// Optional line under the title
    #[prop(optional, into)]
    subtitle: Option<String>,
    /// Callback when the drawer should close
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let is_direct = match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        };
        if is_direct {
            // Defer: the overlay is removed while its own click is dispatched
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    view! {
        <div class="drawer-overlay" on:click=handle_overlay_click>
            <div class="drawer" on:click=stop_propagation>
                <div class="drawer__header">
                    <div class="drawer__title-row">
                        <h2 class="drawer__title">{title}</h2>
                        <button class="button button--icon drawer__close" on:click=handle_close>
                            {icon("x")}
                        </button>
                    </div>
                    {subtitle.map(|s| view! { <p class="drawer__subtitle">{s}</p> })}
                </div>
                {children()}
            </div>
        </div>
    }
}
