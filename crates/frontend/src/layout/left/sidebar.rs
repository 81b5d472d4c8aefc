//! Navigation between the console screens.

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

struct MenuItem {
    path: &'static str,
    label: &'static str,
    icon: &'static str,
}

static MENU: [MenuItem; 4] = [
    MenuItem { path: "/rules", label: "Rules", icon: "rules" },
    MenuItem { path: "/functions", label: "Functions", icon: "functions" },
    MenuItem { path: "/helpers", label: "Helpers", icon: "helpers" },
    MenuItem { path: "/settings", label: "Settings", icon: "settings" },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="app-sidebar__content">
            {MENU.iter().map(|item| view! {
                <A href=item.path attr:class="app-sidebar__item">
                    <span class="app-sidebar__icon">{icon(item.icon)}</span>
                    <span class="app-sidebar__label">{item.label}</span>
                </A>
            }).collect_view()}
        </nav>
    }
}
