//! PageFrame: root wrapper for every routed page.
//!
//! The root element carries `id="{entity}--{category}"` (for example
//! `"a001_rule_library--list"`) and `data-page-category`, so a page found in
//! the DOM inspector leads straight to its module.

use leptos::prelude::*;

/// Table screen with its dialogs
pub const PAGE_CAT_LIST: &str = "list";

/// Settings and authentication pages
pub const PAGE_CAT_SYSTEM: &str = "system";

#[component]
pub fn PageFrame(
    page_id: &'static str,
    /// `PAGE_CAT_LIST` or `PAGE_CAT_SYSTEM`
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
