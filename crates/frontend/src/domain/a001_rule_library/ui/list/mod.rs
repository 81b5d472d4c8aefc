use contracts::domain::a001_rule_library::RuleLibrary;
use leptos::prelude::*;

use crate::shared::components::data_table::Column;
use crate::shared::crud::EntityScreen;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

fn columns() -> Vec<Column<RuleLibrary>> {
    vec![
        Column::new("Name", |r: &RuleLibrary| r.name.clone()),
        Column::new("Description", |r: &RuleLibrary| r.description.clone()),
        Column::new("Container", |r: &RuleLibrary| r.container_name.clone().unwrap_or_default()),
        Column::new("Functions", |r: &RuleLibrary| r.functions.len().to_string()),
        Column::new("Created", |r: &RuleLibrary| r.base.created_date_display()),
    ]
}

#[component]
pub fn RuleLibraryList() -> impl IntoView {
    view! {
        <PageFrame page_id="a001_rule_library--list" category=PAGE_CAT_LIST>
            <EntityScreen columns=columns() viewable=true />
        </PageFrame>
    }
}
