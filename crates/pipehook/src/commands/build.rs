//! Build command - run the synthesizer for one hook.

use anyhow::{Context, Result, bail};
use pipehook_core::HookCatalog;
use std::collections::BTreeMap;
use tracing::debug;

use crate::cli::BuildCommand;

pub fn execute(cmd: BuildCommand) -> Result<()> {
    let catalog = HookCatalog::builtin()?;
    let user_vars = parse_vars(&cmd.vars)?;

    let hook = catalog.build_hook(&cmd.hook, &user_vars)?;
    debug!(hook = cmd.hook.as_str(), bytes = hook.resource.len(), "build complete");

    match cmd.output {
        Some(path) => {
            std::fs::write(&path, &hook.resource)
                .with_context(|| format!("failed to write {:?}", path))?;
            println!("Wrote {} bytes to {:?}", hook.resource.len(), path);
        }
        None => {
            // The resource is the engine-native JSON document
            println!("{}", String::from_utf8_lossy(&hook.resource));
        }
    }

    Ok(())
}

/// Parse repeated NAME=VALUE pairs into a variable mapping.
fn parse_vars(pairs: &[String]) -> Result<BTreeMap<String, String>> {
    let mut vars = BTreeMap::new();
    for pair in pairs {
        let Some((name, value)) = pair.split_once('=') else {
            bail!("invalid --var '{}', expected NAME=VALUE", pair);
        };
        vars.insert(name.to_string(), value.to_string());
    }
    Ok(vars)
}
