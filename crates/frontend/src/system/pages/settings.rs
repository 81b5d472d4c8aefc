use contracts::shared::notification::Notification;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::IgnoredAny;
use thaw::*;

use crate::shared::api_utils::use_api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::crud::confirm;
use crate::shared::icons::icon;
use crate::shared::notification::use_notifier;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};

pub const SYNC_PATH: &str = "/rule-engine/sync";

pub const SYNC_CONFIRMATION: &str = "All rules, functions and helpers will be deleted!";

/// Engine sync action and the embedded API documentation
#[component]
pub fn SettingsPage() -> impl IntoView {
    let api = use_api();
    let notifier = use_notifier();
    let syncing = RwSignal::new(false);
    let docs_url = api.config().api_docs().map(str::to_string);

    let sync_engine = move |_| {
        if !confirm(SYNC_CONFIRMATION) {
            return;
        }
        syncing.set(true);
        spawn_local(async move {
            match api.get::<IgnoredAny>(SYNC_PATH).await {
                Ok(_) => notifier.notify(Notification::synced()),
                Err(e) => log::error!("Engine sync failed: {}", e),
            }
            syncing.set(false);
        });
    };

    view! {
        <PageFrame page_id="settings--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Settings">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=sync_engine
                    disabled=Signal::derive(move || syncing.get())
                >
                    {icon("sync")}
                    " Sync Engine"
                </Button>
            </PageHeader>

            <div class="page__content">
                {match docs_url {
                    Some(url) => view! {
                        <iframe class="api-docs" src=url title="API documentation"></iframe>
                    }.into_any(),
                    None => view! {
                        <div class="api-docs api-docs--missing">"API documentation is not configured."</div>
                    }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}
