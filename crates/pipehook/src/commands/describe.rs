//! Describe command - hook capability listing.

use anyhow::Result;
use colored::Colorize;
use pipehook_core::HookCatalog;

use crate::cli::DescribeCommand;

pub fn execute(cmd: DescribeCommand) -> Result<()> {
    let catalog = HookCatalog::builtin()?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(catalog.metadata())?);
        return Ok(());
    }

    println!("{} {}", "Pipeline type:".bold(), catalog.pipeline_type());

    for hook in catalog.metadata() {
        let mut stages = Vec::new();
        if hook.is_pre_hook {
            stages.push("pre");
        }
        if hook.is_post_hook {
            stages.push("post");
        }

        println!();
        println!("{} ({})", hook.name.green().bold(), stages.join(", "));
        println!(
            "  event sources: {}",
            hook.supported_event_source_types.join(", ")
        );
        println!("  variables:");
        for (name, spec) in &hook.variable_schema.properties {
            match spec.max_length {
                Some(max) => println!("    {} ({}, maxLength {})", name.cyan(), spec.kind, max),
                None => println!("    {} ({})", name.cyan(), spec.kind),
            }
        }
    }

    Ok(())
}
