//! Toast payload shown by the notification host.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Css modifier used by the toast host
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "danger",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Info => "ℹ",
            Severity::Warning => "⚠",
            Severity::Error => "✖",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub content: String,
    pub reason: Option<String>,
    pub info: Option<String>,
}

impl Notification {
    pub fn new(severity: Severity, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            severity,
            title: title.into(),
            content: content.into(),
            reason: None,
            info: None,
        }
    }

    pub fn success(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(Severity::Success, title, content)
    }

    pub fn info(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(Severity::Info, title, content)
    }

    pub fn error(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(Severity::Error, title, content)
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    pub fn created() -> Self {
        Self::success("Create Request", "Create request is completed.")
    }

    pub fn edited() -> Self {
        Self::success("Edit Request", "Edit request is completed.")
    }

    pub fn deleted() -> Self {
        Self::success("Delete Request", "Delete request is completed!")
    }

    pub fn synced() -> Self {
        Self::success("Sync Request", "Sync request is completed!")
    }

    pub fn copied() -> Self {
        Self::info("Copied", "Copied to clipboard.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crud_notifications() {
        let n = Notification::created();
        assert_eq!(n.severity, Severity::Success);
        assert_eq!(n.title, "Create Request");
        assert_eq!(n.content, "Create request is completed.");
        assert_eq!(Notification::deleted().content, "Delete request is completed!");
        assert_eq!(Notification::synced().title, "Sync Request");
    }

    #[test]
    fn test_builder_sets_optional_parts() {
        let n = Notification::error("Error", "boom")
            .with_reason("Bad input")
            .with_info("E-42");
        assert_eq!(n.reason.as_deref(), Some("Bad input"));
        assert_eq!(n.info.as_deref(), Some("E-42"));
        assert_eq!(n.severity.color(), "danger");
    }
}
