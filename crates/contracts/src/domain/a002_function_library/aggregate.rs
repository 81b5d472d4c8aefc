use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{BaseModel, ConsoleEntity, ResourceMeta};
use crate::shared::form::{FormError, FormFields};

// ============================================================================
// Entity
// ============================================================================

/// Reusable MVL function that rules can import
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionLibrary {
    #[serde(flatten)]
    pub base: BaseModel,

    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub container_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub mvl_code: String,
}

impl ConsoleEntity for FunctionLibrary {
    fn base(&self) -> &BaseModel {
        &self.base
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl ResourceMeta for FunctionLibrary {
    type Entity = FunctionLibrary;
    type CreateRequest = CreateFunctionRequest;
    type UpdateRequest = UpdateFunctionRequest;

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn resource_path() -> &'static str {
        "/function-library"
    }

    fn element_name() -> &'static str {
        "Function"
    }

    fn list_name() -> &'static str {
        "Functions"
    }
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFunctionRequest {
    pub name: String,
    pub description: String,
    pub container_name: Option<String>,
    pub category: Option<String>,
    pub mvl_code: String,
}

impl CreateFunctionRequest {
    pub fn from_form(fields: &FormFields) -> Result<Self, FormError> {
        Ok(Self {
            name: fields.required("name")?,
            description: fields.required("description")?,
            container_name: fields.optional("containerName"),
            category: fields.optional("category"),
            mvl_code: fields.text("mvlCode"),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFunctionRequest {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: CreateFunctionRequest,
}

impl UpdateFunctionRequest {
    pub fn from_form(fields: &FormFields) -> Result<Self, FormError> {
        let id = fields.required_id("id")?;
        Ok(Self {
            id,
            fields: CreateFunctionRequest::from_form(fields)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_missing_optionals() {
        let json = r#"{"id":"5d2c8f7e-1111-4a22-8b33-445566778899","name":"round2"}"#;
        let f: FunctionLibrary = serde_json::from_str(json).unwrap();
        assert_eq!(f.name(), "round2");
        assert_eq!(f.category, None);
        assert_eq!(f.mvl_code, "");
        assert_eq!(f.base.created_by, None);
    }

    #[test]
    fn test_create_request_missing_description() {
        let fields: FormFields = [("name", "round2")].into_iter().collect();
        assert_eq!(
            CreateFunctionRequest::from_form(&fields),
            Err(FormError::MissingField("description"))
        );
    }

    #[test]
    fn test_create_request_serializes_camel_case() {
        let fields: FormFields = [
            ("name", "round2"),
            ("description", "Round to two decimals"),
            ("category", "math"),
            ("mvlCode", "def round2(x) { Math.round(x * 100) / 100 }"),
        ]
        .into_iter()
        .collect();
        let req = CreateFunctionRequest::from_form(&fields).unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["category"], "math");
        assert_eq!(json["containerName"], serde_json::Value::Null);
        assert!(json["mvlCode"].as_str().unwrap().starts_with("def round2"));
    }

    #[test]
    fn test_search_key_and_paths() {
        assert_eq!(FunctionLibrary::search_key(), "name");
        assert_eq!(FunctionLibrary::create_path(), "/function-library/create");
    }
}
