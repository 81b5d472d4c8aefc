use contracts::domain::a002_function_library::FunctionLibrary;
use leptos::prelude::*;

use crate::shared::components::data_table::Column;
use crate::shared::crud::EntityScreen;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

fn columns() -> Vec<Column<FunctionLibrary>> {
    vec![
        Column::new("Name", |f: &FunctionLibrary| f.name.clone()),
        Column::new("Description", |f: &FunctionLibrary| f.description.clone()),
        Column::new("Category", |f: &FunctionLibrary| f.category.clone().unwrap_or_default()),
        Column::new("Container", |f: &FunctionLibrary| f.container_name.clone().unwrap_or_default()),
        Column::new("Created", |f: &FunctionLibrary| f.base.created_date_display()),
    ]
}

#[component]
pub fn FunctionLibraryList() -> impl IntoView {
    view! {
        <PageFrame page_id="a002_function_library--list" category=PAGE_CAT_LIST>
            <EntityScreen columns=columns() />
        </PageFrame>
    }
}
