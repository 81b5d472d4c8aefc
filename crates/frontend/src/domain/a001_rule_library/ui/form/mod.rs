use contracts::domain::a001_rule_library::{CreateRuleRequest, RuleLibrary, UpdateRuleRequest};
use contracts::domain::common::AggregateId;
use contracts::shared::form::{FormError, FormFields};
use leptos::prelude::*;

use crate::shared::components::form_field::{FormInput, FormTextArea};
use crate::shared::crud::{DialogMode, EntityForm};

impl EntityForm for RuleLibrary {
    fn fields(entity: Option<&Self>, mode: DialogMode) -> AnyView {
        let locked = mode.identity_locked();
        let ro = mode.read_only();
        let id = entity.map(|r| r.base.id.as_string());
        let name = entity.map(|r| r.name.clone()).unwrap_or_default();
        let description = entity.map(|r| r.description.clone()).unwrap_or_default();
        let container = entity
            .and_then(|r| r.container_name.clone())
            .unwrap_or_default();
        let functions = entity.map(|r| r.functions.join(", ")).unwrap_or_default();
        let helpers = entity.map(|r| r.helpers.join(", ")).unwrap_or_default();
        let code = entity.map(|r| r.mvl_code.clone()).unwrap_or_default();

        view! {
            <div class="form">
                {id.map(|id| view! { <FormInput label="Id" name="id" value=id readonly=true /> })}
                <FormInput label="Name" name="name" value=name readonly=locked required=true />
                <FormInput label="Description" name="description" value=description readonly=ro required=true />
                <FormInput label="Container" name="containerName" value=container readonly=ro />
                <FormInput
                    label="Functions"
                    name="functions"
                    value=functions
                    readonly=ro
                    placeholder="Comma separated function names"
                />
                <FormInput
                    label="Helpers"
                    name="helpers"
                    value=helpers
                    readonly=ro
                    placeholder="Comma separated helper names"
                />
                <FormTextArea label="MVL Code" name="mvlCode" value=code readonly=ro rows=12 />
            </div>
        }
        .into_any()
    }

    fn create_request(fields: &FormFields) -> Result<CreateRuleRequest, FormError> {
        CreateRuleRequest::from_form(fields)
    }

    fn update_request(fields: &FormFields) -> Result<UpdateRuleRequest, FormError> {
        UpdateRuleRequest::from_form(fields)
    }
}
