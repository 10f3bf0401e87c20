use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use trestle::{application::Application, boot, config::Config};

/// Theme bootstrap for static-site builds
#[derive(Parser, Debug)]
#[command(name = "trestle")]
#[command(about = "Load theme assets and register UI controllers", long_about = None)]
#[command(version)]
struct Args {
    /// Theme root directory
    #[arg(value_name = "THEME_ROOT", default_value = ".")]
    theme_root: PathBuf,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    config.validate().context("invalid configuration")?;

    if args.dump_config {
        let contents =
            serde_json::to_string_pretty(&config).context("failed to serialize configuration")?;
        println!("{contents}");
        return Ok(());
    }

    let mut app = Application::start();
    let report = boot::boot(&args.theme_root, &config, &mut app).with_context(|| {
        format!(
            "failed to bootstrap theme at {}",
            args.theme_root.display()
        )
    })?;

    println!("stylesheets: {}", report.stylesheet_count);
    println!("components:  {}", report.component_count);
    println!(
        "controllers: {} registered of {} discovered",
        report.registered.len(),
        report.controller_entry_count
    );
    for identifier in &report.registered {
        println!("  {identifier}");
    }

    Ok(())
}
