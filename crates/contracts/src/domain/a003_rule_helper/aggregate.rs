use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{BaseModel, ConsoleEntity, ResourceMeta};
use crate::shared::form::{FormError, FormFields};

// ============================================================================
// Entity
// ============================================================================

/// Java package made available to rules, fetched from `package_url`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleHelper {
    #[serde(flatten)]
    pub base: BaseModel,

    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub container_name: Option<String>,
    #[serde(default)]
    pub package_url: String,
    #[serde(default)]
    pub package_path: String,
}

impl ConsoleEntity for RuleHelper {
    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl ResourceMeta for RuleHelper {
    type Entity = RuleHelper;
    type CreateRequest = CreateHelperRequest;
    type UpdateRequest = UpdateHelperRequest;

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn resource_path() -> &'static str {
        "/rule-helper"
    }

    fn element_name() -> &'static str {
        "Helper"
    }

    fn list_name() -> &'static str {
        "Helpers"
    }
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHelperRequest {
    pub name: String,
    pub description: String,
    pub container_name: Option<String>,
    pub package_url: String,
    pub package_path: String,
}

impl CreateHelperRequest {
    pub fn from_form(fields: &FormFields) -> Result<Self, FormError> {
        Ok(Self {
            name: fields.required("name")?,
            description: fields.required("description")?,
            container_name: fields.optional("containerName"),
            package_url: fields.required("packageUrl")?,
            package_path: fields.required("packagePath")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateHelperRequest {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: CreateHelperRequest,
}

impl UpdateHelperRequest {
    pub fn from_form(fields: &FormFields) -> Result<Self, FormError> {
        let id = fields.required_id("id")?;
        Ok(Self {
            id,
            fields: CreateHelperRequest::from_form(fields)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper_form() -> FormFields {
        [
            ("name", "commons-lang"),
            ("description", "Apache commons"),
            ("packageUrl", "https://repo.example.org/commons-lang3.jar"),
            ("packagePath", "org.apache.commons.lang3"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_package_fields_are_required() {
        let mut fields = helper_form();
        fields.insert("packagePath", " ");
        assert_eq!(
            CreateHelperRequest::from_form(&fields),
            Err(FormError::MissingField("packagePath"))
        );
    }

    #[test]
    fn test_update_request_wire_shape() {
        let mut fields = helper_form();
        fields.insert("id", "9a0e2b44-7c1d-4e8f-a123-0f1e2d3c4b5a");
        let req = UpdateHelperRequest::from_form(&fields).unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["id"], "9a0e2b44-7c1d-4e8f-a123-0f1e2d3c4b5a");
        assert_eq!(json["packageUrl"], "https://repo.example.org/commons-lang3.jar");
        assert_eq!(json["packagePath"], "org.apache.commons.lang3");
    }

    #[test]
    fn test_malformed_id_is_rejected() {
        let mut fields = helper_form();
        fields.insert("id", "not-a-uuid");
        assert_eq!(
            UpdateHelperRequest::from_form(&fields),
            Err(FormError::MissingField("id"))
        );
    }
}
