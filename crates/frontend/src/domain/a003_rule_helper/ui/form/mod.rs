use contracts::domain::a003_rule_helper::{CreateHelperRequest, RuleHelper, UpdateHelperRequest};
use contracts::domain::common::AggregateId;
use contracts::shared::form::{FormError, FormFields};
use leptos::prelude::*;

use crate::shared::components::form_field::FormInput;
use crate::shared::crud::{DialogMode, EntityForm};

impl EntityForm for RuleHelper {
    fn fields(entity: Option<&Self>, mode: DialogMode) -> AnyView {
        let locked = mode.identity_locked();
        let ro = mode.read_only();
        let id = entity.map(|h| h.base.id.as_string());
        let name = entity.map(|h| h.name.clone()).unwrap_or_default();
        let description = entity.map(|h| h.description.clone()).unwrap_or_default();
        let container = entity
            .and_then(|h| h.container_name.clone())
            .unwrap_or_default();
        let url = entity.map(|h| h.package_url.clone()).unwrap_or_default();
        let path = entity.map(|h| h.package_path.clone()).unwrap_or_default();

        view! {
            <div class="form">
                {id.map(|id| view! { <FormInput label="Id" name="id" value=id readonly=true /> })}
                <FormInput label="Name" name="name" value=name readonly=locked required=true />
                <FormInput label="Description" name="description" value=description readonly=ro required=true />
                <FormInput label="Container" name="containerName" value=container readonly=ro />
                <FormInput
                    label="Package URL"
                    name="packageUrl"
                    value=url
                    readonly=ro
                    required=true
                    placeholder="https://repo.example.org/library.jar"
                />
                <FormInput
                    label="Package Path"
                    name="packagePath"
                    value=path
                    readonly=ro
                    required=true
                    placeholder="org.example.library"
                />
            </div>
        }
        .into_any()
    }

    fn create_request(fields: &FormFields) -> Result<CreateHelperRequest, FormError> {
        CreateHelperRequest::from_form(fields)
    }

    fn update_request(fields: &FormFields) -> Result<UpdateHelperRequest, FormError> {
        UpdateHelperRequest::from_form(fields)
    }
}
