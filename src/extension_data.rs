/// Data structures for the extension manager panel
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One extension as reported by the backend.
///
/// Installed-list entries carry `running`; catalog entries carry `url`.
/// Everything else is optional descriptive metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub based_on: Option<String>,
    #[serde(default)]
    pub running: bool,
    #[serde(default)]
    pub url: Option<String>,
}

/// Catalog metadata for one installable extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub based_on: Option<String>,
    pub url: String,
}

/// The remote catalog: extension name -> metadata.
///
/// The wire format has no inherent order, so display order is the map's
/// iteration order (sorted by name).
pub type Catalog = BTreeMap<String, CatalogEntry>;

/// Backend reply to an install or delete request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_installed_entry_defaults() {
        // The backend omits fields it has no value for
        let ext: Extension = serde_json::from_str(r#"{"name":"foo"}"#).unwrap();

        assert_eq!(ext.name, "foo");
        assert_eq!(ext.description, None);
        assert_eq!(ext.version, None);
        assert_eq!(ext.based_on, None);
        assert!(!ext.running);
        assert_eq!(ext.url, None);
    }

    #[test]
    fn test_installed_entry_full() {
        let ext: Extension = serde_json::from_str(
            r#"{"name":"foo","description":"d","version":"1.0","based_on":"python","running":true}"#,
        )
        .unwrap();

        assert_eq!(ext.name, "foo");
        assert_eq!(ext.description.as_deref(), Some("d"));
        assert_eq!(ext.version.as_deref(), Some("1.0"));
        assert_eq!(ext.based_on.as_deref(), Some("python"));
        assert!(ext.running);
    }

    #[test]
    fn test_catalog_parsing() {
        let json = r#"{
            "zeta": {"url": "http://x/zeta.json", "version": "2.0"},
            "alpha": {"url": "http://x/alpha.json", "description": "first"}
        }"#;

        let catalog: Catalog = serde_json::from_str(json).unwrap();

        assert_eq!(catalog.len(), 2);
        // BTreeMap iterates name-sorted regardless of document order
        let names: Vec<&String> = catalog.keys().collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
        assert_eq!(catalog["alpha"].url, "http://x/alpha.json");
        assert_eq!(catalog["zeta"].version.as_deref(), Some("2.0"));
    }

    #[test]
    fn test_action_outcome_parsing() {
        let outcome: ActionOutcome =
            serde_json::from_str(r#"{"success":true,"message":"installed"}"#).unwrap();

        assert!(outcome.success);
        assert_eq!(outcome.message, "installed");
    }
}
