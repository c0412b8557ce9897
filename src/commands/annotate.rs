//! Annotate command - run the annotator over one entity

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use azdo_annotator::AzureDevOpsAnnotator;
use azdo_annotator::core::models::{AllowedKinds, Entity, LocationSpec};
use azdo_annotator::core::services::ProcessorOptions;
use azdo_annotator::output::{AnnotateResult, OutputMode};

/// Arguments of the annotate command
#[derive(Debug)]
pub struct AnnotateArgs {
    /// Location target
    pub target: String,
    /// Location type
    pub location_type: String,
    /// Entity file or `-`
    pub entity: String,
    /// Extra hosts on top of the configured ones
    pub hosts: Vec<String>,
    /// Kind allow-list overriding the configured one
    pub kinds: Vec<String>,
}

/// Annotate an entity and print the result
pub fn annotate(args: &AnnotateArgs, config: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let config = super::load_config(config)?;

    let mut registry = config.host_registry();
    for host in &args.hosts {
        registry.insert(host);
    }
    let mut options = config.processor_options();
    if !args.kinds.is_empty() {
        options = ProcessorOptions {
            kinds: AllowedKinds::only(&args.kinds),
        };
    }
    let annotator = AzureDevOpsAnnotator::with_options(registry, options);

    let mut entity = read_entity(&args.entity)?;
    let location = LocationSpec::new(args.location_type.as_str(), args.target.as_str());
    let annotation = annotator.annotate(&mut entity, &location);

    AnnotateResult::new(&annotation, entity).render(mode);
    Ok(())
}

fn read_entity(source: &str) -> anyhow::Result<Entity> {
    let content = if source == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("failed to read entity from stdin")?;
        buf
    } else {
        fs::read_to_string(source).with_context(|| format!("failed to read entity {source}"))?
    };

    serde_json::from_str(&content).with_context(|| format!("invalid entity JSON in {source}"))
}
