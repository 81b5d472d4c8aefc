//! Flat field mapping collected from a submitted dialog form.

use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("field `{0}` is required")]
    MissingField(&'static str),
    #[error("field `{0}` has an invalid value")]
    InvalidField(&'static str),
}

/// Every named control of a submitted form, keyed by its `name` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    values: HashMap<String, String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of a field that must be present and non-blank
    pub fn required(&self, name: &'static str) -> Result<String, FormError> {
        match self.get(name) {
            Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
            _ => Err(FormError::MissingField(name)),
        }
    }

    /// Required identifier field; present but unparsable is `InvalidField`
    pub fn required_id(&self, name: &'static str) -> Result<Uuid, FormError> {
        let raw = self.required(name)?;
        Uuid::parse_str(raw.trim()).map_err(|_| FormError::InvalidField(name))
    }

    /// Value of an optional field; blank becomes `None`
    pub fn optional(&self, name: &str) -> Option<String> {
        self.get(name)
            .filter(|v| !v.trim().is_empty())
            .map(str::to_string)
    }

    /// Value of a free text field, kept verbatim (missing becomes empty)
    pub fn text(&self, name: &str) -> String {
        self.get(name).unwrap_or_default().to_string()
    }

    /// Comma separated list; items are trimmed and blanks dropped
    pub fn list(&self, name: &str) -> Vec<String> {
        self.get(name)
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = FormFields::new();
        for (k, v) in iter {
            fields.insert(k, v);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        let fields: FormFields = [("name", "  ")].into_iter().collect();
        assert_eq!(fields.required("name"), Err(FormError::MissingField("name")));
        assert_eq!(
            fields.required("description"),
            Err(FormError::MissingField("description"))
        );
    }

    #[test]
    fn test_required_id_separates_missing_from_malformed() {
        let fields: FormFields = [("id", "not-a-uuid")].into_iter().collect();
        assert_eq!(fields.required_id("id"), Err(FormError::InvalidField("id")));
        assert_eq!(
            fields.required_id("ruleId"),
            Err(FormError::MissingField("ruleId"))
        );

        let fields: FormFields = [("id", " 0b8f6a52-3f0e-4f55-9a49-5c2a1e0d7c11 ")]
            .into_iter()
            .collect();
        assert_eq!(
            fields.required_id("id").map(|id| id.to_string()),
            Ok("0b8f6a52-3f0e-4f55-9a49-5c2a1e0d7c11".to_string())
        );
    }

    #[test]
    fn test_optional_and_text() {
        let fields: FormFields = [("containerName", ""), ("mvlCode", "  x  ")]
            .into_iter()
            .collect();
        assert_eq!(fields.optional("containerName"), None);
        assert_eq!(fields.text("mvlCode"), "  x  ");
        assert_eq!(fields.text("missing"), "");
    }

    #[test]
    fn test_list_splits_and_trims() {
        let fields: FormFields = [("functions", "math, strings,, ,dates")].into_iter().collect();
        assert_eq!(fields.list("functions"), vec!["math", "strings", "dates"]);
        assert!(fields.list("helpers").is_empty());
    }
}
