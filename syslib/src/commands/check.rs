use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use syslib_manifest::Manifest;
use syslib_solidity::{Generator, call_forms::has_root_variant};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the system manifest (TOML, or JSON with a .json extension)
    #[arg(short, long, default_value = "system.toml")]
    pub manifest: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file(&self.manifest).unwrap_or_exit();
        let options = manifest.render_options();

        // Render in memory so import conflicts surface here too
        Generator::new(&options)
            .render()
            .wrap_err("Validation failed")?;

        println!("✓ {} is valid\n", self.manifest.display());

        let namespace = if options.is_root_namespace() {
            "root namespace".to_string()
        } else {
            format!("namespace '{}'", options.namespace)
        };
        println!("  {} ({})", options.library_name, namespace);
        println!("  resource id {}\n", options.resource_id);

        let count = options.functions.len();
        println!(
            "  {} function{}:",
            count,
            if count == 1 { "" } else { "s" }
        );
        for function in &options.functions {
            let forms = if has_root_variant(options.is_root_namespace(), function.state_mutability)
            {
                "direct, forwarded, root"
            } else {
                "direct, forwarded"
            };
            println!(
                "    {} ({}) [{}]",
                function.name, function.state_mutability, forms
            );
        }

        if !options.errors.is_empty() {
            let count = options.errors.len();
            println!(
                "\n  {} error{}:",
                count,
                if count == 1 { "" } else { "s" }
            );
            for error in &options.errors {
                println!("    {}", error.name);
            }
        }

        Ok(())
    }
}
