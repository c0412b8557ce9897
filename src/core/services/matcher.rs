//! Azure DevOps URL matcher - recovers repository identity from a URL
//!
//! This module contains pure matching logic with no I/O dependencies.
//!
//! Recognized layouts:
//!
//! ```text
//! https://<host>/<org>/<project>/_git/<repo>
//! https://<host>/<collection>.../<org>/<project>/_git/<repo>
//! ```
//!
//! The path is anchored on the `_git` marker rather than on fixed positions,
//! so any collection depth is accepted.

use log::debug;
use url::Url;

use crate::core::models::{HostRegistry, ParsedLocation};

/// Path segment that separates the project from the repository name
pub const GIT_MARKER: &str = "_git";

/// Match a URL against the registry and extract its repository identity
///
/// Returns `None` when the URL cannot be parsed, is not `http(s)`, has an
/// unrecognized host, or lacks a well-formed `.../<org>/<project>/_git/<repo>`
/// path. Query string and fragment are ignored.
///
/// # Examples
///
/// ```
/// use azdo_annotator::core::models::HostRegistry;
/// use azdo_annotator::core::services::parse_location;
///
/// let registry = HostRegistry::from_hosts(["example.com"]);
/// let parsed = parse_location(
///     "https://example.com/tfs/organization/project/_git/repository?path=%2Fcatalog-info.yaml",
///     &registry,
/// )
/// .unwrap();
/// assert_eq!(parsed.host_org(), "example.com/tfs/organization");
/// assert_eq!(parsed.project_repo(), "project/repository");
/// ```
#[must_use]
pub fn parse_location(target: &str, registry: &HostRegistry) -> Option<ParsedLocation> {
    let url = match Url::parse(target) {
        Ok(url) => url,
        Err(e) => {
            debug!("not a valid URL ({e}): {target}");
            return None;
        },
    };

    if !matches!(url.scheme(), "http" | "https") {
        debug!("unsupported scheme '{}': {target}", url.scheme());
        return None;
    }

    let Some(host) = recognized_host(target, registry) else {
        debug!("host is not a configured Azure DevOps host: {target}");
        return None;
    };

    let segments: Vec<&str> = url.path().split('/').filter(|s| !s.is_empty()).collect();
    let parsed = split_segments(host, &segments);
    if parsed.is_none() {
        debug!("no .../<org>/<project>/{GIT_MARKER}/<repo> path in {target}");
    }
    parsed
}

/// Check whether a URL points at a recognized Azure DevOps host
#[must_use]
pub fn is_azure_devops_url(target: &str, registry: &HostRegistry) -> bool {
    Url::parse(target)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
        .and_then(|_| recognized_host(target, registry))
        .is_some()
}

/// Find the most specific registry member among the URL's host candidates
///
/// Candidates come from the authority exactly as written in `target`:
/// `host:port` when a port is given, then the bare host. No case folding,
/// punycode or default-port removal is applied.
fn recognized_host(target: &str, registry: &HostRegistry) -> Option<String> {
    let authority = raw_authority(target)?;
    let bare = strip_port(authority);

    [authority, bare]
        .into_iter()
        .find(|candidate| !candidate.is_empty() && registry.is_recognized(candidate))
        .map(str::to_string)
}

/// Authority of `scheme://[userinfo@]host[:port]/...` without the userinfo
fn raw_authority(target: &str) -> Option<&str> {
    let (_, rest) = target.trim().split_once("://")?;
    let end = rest.find(['/', '\\', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];
    Some(authority.rsplit_once('@').map_or(authority, |(_, host)| host))
}

/// `host:port` → `host`; bracketed IPv6 literals keep their colons
fn strip_port(authority: &str) -> &str {
    match authority.rsplit_once(':') {
        Some((host, port)) if port.chars().all(|c| c.is_ascii_digit()) => host,
        _ => authority,
    }
}

/// Split path segments around the first `_git` marker
fn split_segments(host: String, segments: &[&str]) -> Option<ParsedLocation> {
    let marker = segments.iter().position(|s| *s == GIT_MARKER)?;
    if marker < 2 {
        return None;
    }

    let repository = segments.get(marker + 1)?;
    let project = segments[marker - 1];
    let organization = segments[marker - 2];
    let collection = segments[..marker - 2].iter().map(|s| (*s).to_string()).collect();

    Some(ParsedLocation::new(host, collection, organization, project, *repository))
}
