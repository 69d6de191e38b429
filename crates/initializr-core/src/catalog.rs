//! Listing which dependencies a platform version supports

use crate::client::GeneratorClient;
use crate::compat::{offered_components, ComponentDescriptor};
use crate::product::ProductConfig;
use anyhow::Result;
use colored::Colorize;

/// Group components by their group name, keeping first-seen group order
pub fn group_components<'a>(
    components: &[&'a ComponentDescriptor],
) -> Vec<(&'a str, Vec<&'a ComponentDescriptor>)> {
    let mut groups: Vec<(&'a str, Vec<&'a ComponentDescriptor>)> = Vec::new();
    for &component in components {
        match groups.iter_mut().find(|(name, _)| *name == component.group) {
            Some((_, members)) => members.push(component),
            None => groups.push((component.group.as_str(), vec![component])),
        }
    }
    groups
}

/// Print the dependencies offered for `boot_version` (or the service default)
pub async fn list_dependencies<C: ProductConfig>(
    config: &C,
    boot_version: Option<&str>,
    service_url: Option<&str>,
) -> Result<()> {
    let client = GeneratorClient::with_override(config, service_url)?;
    let metadata = client.fetch_metadata().await?;

    let boot_version = match boot_version {
        Some(version) => version.to_string(),
        None => metadata
            .boot_version
            .default_id()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("Service did not publish a default Spring Boot version"))?,
    };

    let components = metadata.components();
    let offered = offered_components(&components, &boot_version);

    println!(
        "{}",
        format!("Dependencies for Spring Boot {}", boot_version)
            .cyan()
            .bold()
    );

    for (group, members) in group_components(&offered) {
        println!();
        println!("  {}", group.bold());
        for component in members {
            let range = component.compatibility.to_string();
            if range.is_empty() {
                println!("    {} {}", component.id.green(), component.name);
            } else {
                println!(
                    "    {} {} {}",
                    component.id.green(),
                    component.name,
                    format!("({})", range).dimmed()
                );
            }
        }
    }

    for component in components.iter() {
        if let Some(issue) = &component.compatibility_issue {
            println!();
            println!(
                "{} range for '{}' was relaxed: {}",
                "Warning:".yellow(),
                component.id,
                issue
            );
        }
    }

    let hidden = components.len() - offered.len();
    if hidden > 0 {
        println!();
        println!(
            "{} {} dependencies are not compatible with Spring Boot {}",
            "Note:".yellow(),
            hidden,
            boot_version
        );
    }

    Ok(())
}
