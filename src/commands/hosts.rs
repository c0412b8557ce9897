//! Hosts command - list recognized Azure DevOps hosts

use std::path::Path;

use azdo_annotator::output::OutputMode;

/// Print every recognized host, the built-in default first
pub fn hosts(config: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let registry = super::load_config(config)?.host_registry();
    let hosts: Vec<&str> = registry.hosts().collect();

    if mode == OutputMode::Json {
        println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "hosts": hosts }))?);
    } else {
        for host in hosts {
            println!("{host}");
        }
    }
    Ok(())
}
