//! Property-based tests for the URL matcher and the annotator
//!
//! Uses proptest to verify properties that should hold for all inputs.

use azdo_annotator::core::models::{Entity, HostRegistry, LocationSpec};
use azdo_annotator::core::ports::CatalogProcessor;
use azdo_annotator::core::services::{
    ANNOTATION_HOST_ORG, ANNOTATION_PROJECT_REPO, AzureDevOpsAnnotator, ProcessorOptions,
    parse_location,
};
use proptest::prelude::*;

/// Path segments that are never the `_git` marker
fn segment() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9.-]{0,15}"
}

proptest! {
    /// Cloud URLs yield `dev.azure.com/{org}` and `{project}/{repo}`
    #[test]
    fn cloud_urls_extract_identity(
        org in segment(),
        project in segment(),
        repo in segment(),
        query in "(\\?path=%2F[a-z]{1,8}\\.yaml)?"
    ) {
        let url = format!("https://dev.azure.com/{org}/{project}/_git/{repo}{query}");
        let parsed = parse_location(&url, &HostRegistry::new()).unwrap();
        prop_assert_eq!(parsed.host_org(), format!("dev.azure.com/{org}"));
        prop_assert_eq!(parsed.project_repo(), format!("{project}/{repo}"));
    }

    /// Configured hosts substitute for the default host
    #[test]
    fn configured_hosts_extract_identity(
        host in "[a-z]{1,10}\\.(com|net|corp)",
        org in segment(),
        project in segment(),
        repo in segment()
    ) {
        let registry = HostRegistry::from_hosts([host.as_str()]);
        let url = format!("https://{host}/{org}/{project}/_git/{repo}");
        let parsed = parse_location(&url, &registry).unwrap();
        prop_assert_eq!(parsed.host_org(), format!("{host}/{org}"));
        prop_assert_eq!(parsed.project_repo(), format!("{project}/{repo}"));
    }

    /// A collection subpath is kept between host and organization
    #[test]
    fn collection_subpath_is_part_of_host_org(
        collection in segment(),
        org in segment(),
        project in segment(),
        repo in segment()
    ) {
        let registry = HostRegistry::from_hosts(["example.com"]);
        let url = format!("https://example.com/{collection}/{org}/{project}/_git/{repo}");
        let parsed = parse_location(&url, &registry).unwrap();
        prop_assert_eq!(parsed.host_org(), format!("example.com/{collection}/{org}"));
    }

    /// Unconfigured hosts never match
    #[test]
    fn unknown_hosts_never_match(
        host in "[a-z]{1,10}\\.example\\.org",
        org in segment(),
        project in segment(),
        repo in segment()
    ) {
        let url = format!("https://{host}/{org}/{project}/_git/{repo}");
        prop_assert!(parse_location(&url, &HostRegistry::new()).is_none());
    }

    /// URLs without a `_git` segment never match
    #[test]
    fn urls_without_marker_never_match(segments in prop::collection::vec(segment(), 0..6)) {
        let url = format!("https://dev.azure.com/{}", segments.join("/"));
        prop_assert!(parse_location(&url, &HostRegistry::new()).is_none());
    }

    /// Annotating twice equals annotating once
    #[test]
    fn annotation_is_idempotent(
        org in segment(),
        project in segment(),
        repo in segment()
    ) {
        let processor = AzureDevOpsAnnotator::new();
        let location = LocationSpec::url(format!("https://dev.azure.com/{org}/{project}/_git/{repo}"));

        let once = processor.pre_process_entity(Entity::new("Component", "c"), &location);
        let twice = processor.pre_process_entity(once.clone(), &location);
        prop_assert_eq!(once, twice);
    }

    /// Existing reserved annotations are preserved verbatim
    #[test]
    fn existing_annotations_are_never_overridden(
        host_org in "[ -~]{0,20}",
        project_repo in "[ -~]{0,20}",
        org in segment(),
        repo in segment()
    ) {
        let processor = AzureDevOpsAnnotator::with_options(
            HostRegistry::new(),
            ProcessorOptions::default(),
        );
        let mut entity = Entity::new("Component", "c");
        entity.set_annotation_if_absent(ANNOTATION_HOST_ORG, host_org.clone());
        entity.set_annotation_if_absent(ANNOTATION_PROJECT_REPO, project_repo.clone());

        let location = LocationSpec::url(format!("https://dev.azure.com/{org}/p/_git/{repo}"));
        let entity = processor.pre_process_entity(entity, &location);
        prop_assert_eq!(entity.annotation(ANNOTATION_HOST_ORG), Some(host_org.as_str()));
        prop_assert_eq!(entity.annotation(ANNOTATION_PROJECT_REPO), Some(project_repo.as_str()));
    }
}
