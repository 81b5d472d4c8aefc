use contracts::domain::a002_function_library::{
    CreateFunctionRequest, FunctionLibrary, UpdateFunctionRequest,
};
use contracts::domain::common::AggregateId;
use contracts::shared::form::{FormError, FormFields};
use leptos::prelude::*;

use crate::shared::components::form_field::{FormInput, FormTextArea};
use crate::shared::crud::{DialogMode, EntityForm};

impl EntityForm for FunctionLibrary {
    fn fields(entity: Option<&Self>, mode: DialogMode) -> AnyView {
        let locked = mode.identity_locked();
        let ro = mode.read_only();
        let id = entity.map(|f| f.base.id.as_string());
        let name = entity.map(|f| f.name.clone()).unwrap_or_default();
        let description = entity.map(|f| f.description.clone()).unwrap_or_default();
        let container = entity
            .and_then(|f| f.container_name.clone())
            .unwrap_or_default();
        let category = entity.and_then(|f| f.category.clone()).unwrap_or_default();
        let code = entity.map(|f| f.mvl_code.clone()).unwrap_or_default();

        view! {
            <div class="form">
                {id.map(|id| view! { <FormInput label="Id" name="id" value=id readonly=true /> })}
                <FormInput label="Name" name="name" value=name readonly=locked required=true />
                <FormInput label="Description" name="description" value=description readonly=ro required=true />
                <FormInput label="Container" name="containerName" value=container readonly=ro />
                <FormInput label="Category" name="category" value=category readonly=ro />
                <FormTextArea label="MVL Code" name="mvlCode" value=code readonly=ro />
            </div>
        }
        .into_any()
    }

    fn create_request(fields: &FormFields) -> Result<CreateFunctionRequest, FormError> {
        CreateFunctionRequest::from_form(fields)
    }

    fn update_request(fields: &FormFields) -> Result<UpdateFunctionRequest, FormError> {
        UpdateFunctionRequest::from_form(fields)
    }
}
