//! Top bar: sidebar toggle, title, dark mode switch and sign-out.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::shared::theme::DarkModeToggle;
use crate::system::auth::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let auth = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Rule Engine Console"</span>
            </div>

            <div class="top-header__actions">
                <DarkModeToggle />
                <Show when=move || auth.is_signed_in()>
                    <A href="/logout" attr:class="top-header__icon-btn" attr:title="Sign out">
                        {icon("log-out")}
                    </A>
                </Show>
            </div>
        </div>
    }
}
