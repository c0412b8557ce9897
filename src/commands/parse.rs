//! Parse command - show the identity a URL resolves to

use std::path::Path;

use azdo_annotator::output::{OutputMode, ParseResult};
use azdo_annotator::parse_location;

/// Parse a repository URL against the recognized hosts
///
/// Exits with status 1 when the URL does not match.
pub fn parse(url: &str, hosts: &[String], config: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let config = super::load_config(config)?;
    let mut registry = config.host_registry();
    for host in hosts {
        registry.insert(host);
    }

    let parsed = parse_location(url, &registry);
    let result = ParseResult::new(url, parsed.as_ref());
    result.render(mode);

    if !result.matched {
        std::process::exit(1);
    }
    Ok(())
}
