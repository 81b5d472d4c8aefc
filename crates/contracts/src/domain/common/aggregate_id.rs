use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for entity identifier types
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Convert the id to its wire form
    fn as_string(&self) -> String;

    /// Parse the id from its wire form
    fn from_string(s: &str) -> Result<Self, String>;

    /// Short form shown in table rows: first eight characters and an ellipsis
    fn short(&self) -> String {
        let full = self.as_string();
        let head: String = full.chars().take(8).collect();
        format!("{}...", head)
    }
}

impl AggregateId for uuid::Uuid {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s).map_err(|e| format!("Invalid UUID: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_round_trip_and_short_form() {
        let id = uuid::Uuid::from_string("abc12345-0000-4000-8000-000000000001").unwrap();
        assert_eq!(id.as_string(), "abc12345-0000-4000-8000-000000000001");
        assert_eq!(id.short(), "abc12345...");
    }

    #[test]
    fn test_invalid_uuid_is_rejected() {
        assert!(uuid::Uuid::from_string("abc-123").is_err());
    }
}
