use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{BaseModel, ConsoleEntity, ResourceMeta};
use crate::shared::form::{FormError, FormFields};

// ============================================================================
// Entity
// ============================================================================

/// Rule written in MVL, with the functions and helpers it imports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleLibrary {
    #[serde(flatten)]
    pub base: BaseModel,

    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub container_name: Option<String>,
    #[serde(default)]
    pub mvl_code: String,
    #[serde(default)]
    pub functions: Vec<String>,
    #[serde(default)]
    pub helpers: Vec<String>,
}

impl ConsoleEntity for RuleLibrary {
    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl ResourceMeta for RuleLibrary {
    type Entity = RuleLibrary;
    type CreateRequest = CreateRuleRequest;
    type UpdateRequest = UpdateRuleRequest;

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn resource_path() -> &'static str {
        "/rule-library"
    }

    fn element_name() -> &'static str {
        "Rule"
    }

    fn list_name() -> &'static str {
        "Rules"
    }
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRuleRequest {
    pub name: String,
    pub description: String,
    pub container_name: Option<String>,
    pub mvl_code: String,
    pub functions: Vec<String>,
    pub helpers: Vec<String>,
}

impl CreateRuleRequest {
    pub fn from_form(fields: &FormFields) -> Result<Self, FormError> {
        Ok(Self {
            name: fields.required("name")?,
            description: fields.required("description")?,
            container_name: fields.optional("containerName"),
            mvl_code: fields.text("mvlCode"),
            functions: fields.list("functions"),
            helpers: fields.list("helpers"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRuleRequest {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: CreateRuleRequest,
}

impl UpdateRuleRequest {
    pub fn from_form(fields: &FormFields) -> Result<Self, FormError> {
        let id = fields.required_id("id")?;
        Ok(Self {
            id,
            fields: CreateRuleRequest::from_form(fields)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::AggregateId;

    const ID: &str = "0b8f6a52-3f0e-4f55-9a49-5c2a1e0d7c11";

    #[test]
    fn test_deserialize_rule() {
        let json = r#"{
            "id": "0b8f6a52-3f0e-4f55-9a49-5c2a1e0d7c11",
            "name": "discount",
            "description": "Order discount",
            "containerName": "orders",
            "mvlCode": "total > 100",
            "functions": ["math"],
            "createdDate": "2024-01-02T03:04:05Z",
            "version": 7
        }"#;
        let rule: RuleLibrary = serde_json::from_str(json).unwrap();
        assert_eq!(rule.id().as_string(), ID);
        assert_eq!(rule.name(), "discount");
        assert_eq!(rule.functions, vec!["math"]);
        assert!(rule.helpers.is_empty());
        assert_eq!(rule.base.created_date_display(), "02/01/2024 03:04");
    }

    #[test]
    fn test_create_request_from_form() {
        let fields: FormFields = [
            ("name", "discount"),
            ("description", "Order discount"),
            ("containerName", ""),
            ("mvlCode", ""),
            ("functions", "math, dates"),
            ("helpers", ""),
        ]
        .into_iter()
        .collect();
        let req = CreateRuleRequest::from_form(&fields).unwrap();
        assert_eq!(req.container_name, None);
        assert_eq!(req.mvl_code, "");
        assert_eq!(req.functions, vec!["math", "dates"]);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["mvlCode"], "");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_update_request_requires_id() {
        let mut fields: FormFields = [("name", "discount"), ("description", "d")]
            .into_iter()
            .collect();
        assert_eq!(
            UpdateRuleRequest::from_form(&fields),
            Err(FormError::MissingField("id"))
        );
        fields.insert("id", "rule-42");
        assert_eq!(
            UpdateRuleRequest::from_form(&fields),
            Err(FormError::InvalidField("id"))
        );
        fields.insert("id", ID);
        let req = UpdateRuleRequest::from_form(&fields).unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["id"], ID);
        assert_eq!(json["name"], "discount");
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(RuleLibrary::read_path(), "/rule-library/read");
        assert_eq!(RuleLibrary::update_path(), "/rule-library/update");
        assert_eq!(RuleLibrary::delete_path(ID), format!("/rule-library/delete/{ID}"));
    }
}
