use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fields every rule engine entity carries.
///
/// Audit fields are filled in by the service; the console only displays them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseModel {
    pub id: Uuid,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_modified_by: Option<String>,
    #[serde(default)]
    pub last_modified_date: Option<DateTime<Utc>>,
}

impl BaseModel {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            created_by: None,
            created_date: None,
            last_modified_by: None,
            last_modified_date: None,
        }
    }

    /// `dd/MM/yyyy HH:mm`, or an empty string when the service sent no date
    pub fn created_date_display(&self) -> String {
        self.created_date
            .map(|d| d.format("%d/%m/%Y %H:%M").to_string())
            .unwrap_or_default()
    }
}

/// Access to the shared fields of an entity row.
pub trait ConsoleEntity {
    fn base(&self) -> &BaseModel;

    /// Primary display field
    fn name(&self) -> &str;

    fn id(&self) -> Uuid {
        self.base().id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_service_dates() {
        let json = r#"{
            "id": "6f1c3d1e-0a1b-4c2d-9e3f-112233445566",
            "createdBy": "admin",
            "createdDate": "2024-03-15T14:02:26.123+00:00"
        }"#;
        let base: BaseModel = serde_json::from_str(json).unwrap();
        assert_eq!(base.created_by.as_deref(), Some("admin"));
        assert_eq!(base.created_date_display(), "15/03/2024 14:02");
        assert!(base.last_modified_date.is_none());
    }

    #[test]
    fn test_missing_date_displays_empty() {
        let base = BaseModel::new(Uuid::nil());
        assert_eq!(base.created_date_display(), "");
    }
}
