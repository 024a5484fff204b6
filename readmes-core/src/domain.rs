//! Domain entities for the README generator.

use serde::{Deserialize, Serialize};

/// One implemented sample program inside a language collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramEntry {
    /// Slug identifier of the program (e.g., `hello-world`).
    pub name: String,
    /// Documentation article URL, present only when an article exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
}

impl ProgramEntry {
    /// Whether a documentation article exists for this program.
    pub fn has_docs(&self) -> bool {
        self.documentation_url.is_some()
    }
}

/// Container settings used to test a language collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestConfig {
    /// Docker image name.
    pub image: String,
    /// Docker image tag.
    pub tag: String,
    /// Command run inside the container, when the image default is not used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// One language collection as reported by the repository scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInventory {
    /// Display name of the language (e.g., `C++`).
    pub name: String,
    /// Path-safe normalized name (e.g., `c-plus-plus`).
    pub path_name: String,
    /// Implemented programs, in the scanner's order.
    #[serde(default)]
    pub programs: Vec<ProgramEntry>,
    /// Base URL of the language documentation, when published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
    /// Testing configuration, when the collection is tested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_config: Option<TestConfig>,
    /// Reason the collection cannot be tested, when one is declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub untestable_reason: Option<String>,
}

/// Derived completion summary for one language collection.
///
/// Computed fresh per run by [`crate::analyzer::analyze`] and consumed
/// immediately by the report assembler; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionReport {
    /// Number of programs implemented in the collection.
    pub completed_count: usize,
    /// Size of the approved-project set.
    pub total_approved: usize,
    /// Discrete completion bucket in `0..=4`.
    pub bucket: usize,
    /// Approved slugs absent from the collection, sorted by display title.
    pub missing: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::{LanguageInventory, ProgramEntry};

    #[test]
    fn has_docs_tracks_documentation_url() {
        let documented = ProgramEntry {
            name: "hello-world".to_string(),
            documentation_url: Some("https://sampleprograms.io/projects/hello-world/python/".to_string()),
        };
        let undocumented = ProgramEntry {
            name: "fizz-buzz".to_string(),
            documentation_url: None,
        };

        assert!(documented.has_docs());
        assert!(!undocumented.has_docs());
    }

    #[test]
    fn inventory_deserializes_with_optional_fields_absent() {
        let json = r#"{"name": "Python", "path_name": "python"}"#;
        let inventory: LanguageInventory = serde_json::from_str(json).expect("inventory");

        assert_eq!(inventory.name, "Python");
        assert_eq!(inventory.path_name, "python");
        assert!(inventory.programs.is_empty());
        assert!(inventory.docs_url.is_none());
        assert!(inventory.test_config.is_none());
        assert!(inventory.untestable_reason.is_none());
    }

    #[test]
    fn inventory_deserializes_test_config() {
        let json = r#"{
            "name": "Python",
            "path_name": "python",
            "programs": [{"name": "hello-world"}],
            "test_config": {"image": "python", "tag": "3.12-alpine", "command": "python {{ source.name }}"}
        }"#;
        let inventory: LanguageInventory = serde_json::from_str(json).expect("inventory");
        let config = inventory.test_config.expect("test config");

        assert_eq!(config.image, "python");
        assert_eq!(config.tag, "3.12-alpine");
        assert_eq!(config.command.as_deref(), Some("python {{ source.name }}"));
    }
}
