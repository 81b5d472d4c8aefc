pub mod global_context;
pub mod left;
pub mod top_header;

use global_context::use_global_context;
use leptos::prelude::*;
use thaw::Spinner;
use top_header::TopHeader;

use crate::shared::notification::NotificationHost;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |          Content              |
/// +------------------------------------------+
/// ```
///
/// The loading overlay covers the content while any API request is pending.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    <left::Sidebar />
                </left::Left>

                <div class="app-main">
                    {children()}
                    <Show when=move || ctx.is_loading()>
                        <div class="loading-overlay">
                            <Spinner />
                        </div>
                    </Show>
                </div>
            </div>

            <NotificationHost />
        </div>
    }
}
