use crate::config::{Config, ContainerConfig, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Name of the first bundle
    #[arg(short, long, default_value = "AppBundle")]
    pub container: String,

    /// Bundle directory, relative to the project
    #[arg(short, long, default_value = "src/AppBundle")]
    pub path: String,

    /// Namespace prefix of the bundle
    #[arg(long, default_value = "AppBundle")]
    pub namespace: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!("{} already exists", DEFAULT_CONFIG_NAME.bright_white());
        println!("Use --force to overwrite");
        return Ok(());
    }

    let mut config = Config::default();
    config.containers.insert(
        args.container.clone(),
        ContainerConfig {
            path: args.path.clone(),
            namespace: args.namespace.clone(),
        },
    );

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;
    tracing::info!(path = %config_path.display(), "wrote config");

    println!("  {} Created {}", "OK".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("Next steps:");
    println!("  Run: dtogen generate --dto {}:ExampleDTO", args.container);

    Ok(())
}
