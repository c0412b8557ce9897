//! Tests for configuration loading

use std::fs;

use azdo_annotator::config::{Config, ConfigError};
use azdo_annotator::core::models::LocationSpec;
use azdo_annotator::core::ports::CatalogProcessor;
use azdo_annotator::core::services::{ANNOTATION_HOST_ORG, AzureDevOpsAnnotator};
use tempfile::TempDir;

use crate::common::{CLOUD_URL, EntityBuilder};

const SERVER_CONFIG: &str = r#"
[[integrations.azure]]
host = "example.com"
credentials = [{ personalAccessToken = "pat" }]

[processor]
kinds = ["API", "Component"]
"#;

// =============================================================================
// LOADING
// =============================================================================

#[test]
fn test_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, SERVER_CONFIG).unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.integrations.azure[0].host(), "example.com");
    assert_eq!(config.processor.kinds, Some(vec!["API".to_string(), "Component".to_string()]));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.toml");

    let err = Config::load_or_default(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn test_malformed_config_fails_before_processing() {
    let err = Config::parse("[[integrations.azure]]\nhost = [\"a\"]").unwrap_err();
    assert!(err.to_string().starts_with("invalid config"));

    assert!(Config::parse("[processor]\nkind = [\"API\"]").is_err());
    assert!(Config::parse("not toml at all [").is_err());
}

#[test]
fn test_unrelated_sections_are_ignored() {
    let config = Config::parse(
        r#"
        [app]
        title = "Catalog"

        [[integrations.gitlab]]
        host = "gitlab.com"
        "#,
    )
    .unwrap();

    assert_eq!(config.host_registry().hosts().collect::<Vec<_>>(), vec!["dev.azure.com"]);
}

// =============================================================================
// PROCESSOR FROM CONFIG
// =============================================================================

#[test]
fn test_annotator_from_empty_config_processes_all_kinds() {
    let processor = AzureDevOpsAnnotator::from_config(&Config::default());
    let entity = processor
        .pre_process_entity(EntityBuilder::new().kind("Template").build(), &LocationSpec::url(CLOUD_URL));

    assert_eq!(entity.annotation(ANNOTATION_HOST_ORG), Some("dev.azure.com/organization"));
}

#[test]
fn test_annotator_from_config_uses_hosts_and_kinds() {
    let processor = AzureDevOpsAnnotator::from_config(&Config::parse(SERVER_CONFIG).unwrap());
    let location = LocationSpec::url("https://example.com/tfs/organization/project/_git/repository");

    let api = processor.pre_process_entity(EntityBuilder::new().kind("API").build(), &location);
    assert_eq!(api.annotation(ANNOTATION_HOST_ORG), Some("example.com/tfs/organization"));

    let system = processor.pre_process_entity(EntityBuilder::new().kind("System").build(), &location);
    assert!(system.annotation(ANNOTATION_HOST_ORG).is_none());

    assert!(processor.registry().is_recognized("dev.azure.com"));
}
