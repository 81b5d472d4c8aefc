use leptos::prelude::*;

use crate::shared::api_utils::LoadingTracker;

/// Layout state shared by the shell, header and sidebar.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
    pub loading: LoadingTracker,
}

impl AppGlobalContext {
    pub fn new(loading: LoadingTracker) -> Self {
        Self {
            left_open: RwSignal::new(true),
            loading,
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
