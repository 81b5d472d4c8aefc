use contracts::domain::a003_rule_helper::RuleHelper;
use leptos::prelude::*;

use crate::shared::components::data_table::Column;
use crate::shared::crud::EntityScreen;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

fn columns() -> Vec<Column<RuleHelper>> {
    vec![
        Column::new("Name", |h: &RuleHelper| h.name.clone()),
        Column::new("Description", |h: &RuleHelper| h.description.clone()),
        Column::new("Package Path", |h: &RuleHelper| h.package_path.clone()),
        Column::new("Container", |h: &RuleHelper| h.container_name.clone().unwrap_or_default()),
        Column::new("Created", |h: &RuleHelper| h.base.created_date_display()),
    ]
}

#[component]
pub fn RuleHelperList() -> impl IntoView {
    view! {
        <PageFrame page_id="a003_rule_helper--list" category=PAGE_CAT_LIST>
            <EntityScreen columns=columns() />
        </PageFrame>
    }
}
