use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque server-assigned identifier
///
/// The API hands out ids as strings; some deployments use UUIDs underneath,
/// so a parsing helper is provided for callers that need one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiId(pub String);

impl ApiId {
    /// Create from UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid.to_string())
    }

    /// Create from string
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get as string (always available)
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Try to parse as UUID
    pub fn as_uuid(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.0).ok()
    }
}

impl std::fmt::Display for ApiId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ApiId {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl From<String> for ApiId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ApiId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_id_serializes_as_plain_string() {
        let id = ApiId::from("proj_1");
        assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("proj_1"));
    }

    #[test]
    fn test_api_id_uuid_helpers() {
        let uuid = Uuid::new_v4();
        let id = ApiId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), Some(uuid));
        assert_eq!(ApiId::from("not-a-uuid").as_uuid(), None);
    }
}
