use serde::{de::DeserializeOwned, Serialize};

/// Static description of one REST resource managed by the console.
///
/// Endpoint paths follow the rule engine service conventions:
/// `{resource}/read`, `{resource}/create`, `{resource}/update` and
/// `{resource}/delete/{id}`.
pub trait ResourceMeta {
    /// Entity as returned by the read endpoint
    type Entity: Clone + Serialize + DeserializeOwned;
    /// Body of `POST {resource}/create`
    type CreateRequest: Serialize + 'static;
    /// Body of `PATCH {resource}/update`
    type UpdateRequest: Serialize + 'static;

    /// Index of the entity in the console (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Resource path on the rule engine service (e.g. "/rule-library")
    fn resource_path() -> &'static str;

    /// Singular UI name (e.g. "Rule")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Rules")
    fn list_name() -> &'static str;

    /// Primary search field combined with `description` in list filters
    fn search_key() -> &'static str {
        "name"
    }

    fn read_path() -> String {
        format!("{}/read", Self::resource_path())
    }

    fn create_path() -> String {
        format!("{}/create", Self::resource_path())
    }

    fn update_path() -> String {
        format!("{}/update", Self::resource_path())
    }

    fn delete_path(id: &str) -> String {
        format!("{}/delete/{}", Self::resource_path(), id)
    }
}
