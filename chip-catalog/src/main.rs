use std::path::PathBuf;

use anyhow::{Context, Result};
use chip_catalog::{
    catalog::{find_sample, samples},
    config::PreviewConfig,
    preview::PreviewSession,
};
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(name = "chip-catalog")]
#[command(version, about = "Preview Material chip samples headlessly", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every sample
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Render, interact with and lay out one sample
    Show {
        /// Sample name, as printed by `list`
        name: String,
        /// Preview config file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Override the viewport width, in dp
        #[arg(short, long)]
        width: Option<f64>,
        /// Click the node with this label before printing (repeatable)
        #[arg(long = "click", value_name = "LABEL")]
        clicks: Vec<String>,
        /// Dismiss open menus after the clicks
        #[arg(long)]
        dismiss: bool,
        /// Print JSON instead of a text dump
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::List { json } => list(json),
        Commands::Show {
            name,
            config,
            width,
            clicks,
            dismiss,
            json,
        } => {
            let mut preview_config = match &config {
                Some(path) => PreviewConfig::load(path)
                    .with_context(|| format!("failed to load {}", path.display()))?,
                None => PreviewConfig::default(),
            };
            if let Some(width) = width {
                preview_config = preview_config
                    .with_width(width)
                    .context("invalid --width")?;
            }
            show(&name, preview_config, &clicks, dismiss, json)
        }
    }
}

fn list(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(samples())?);
        return Ok(());
    }
    let width = samples()
        .iter()
        .map(|sample| sample.name.len())
        .max()
        .unwrap_or(0);
    for sample in samples() {
        println!("{:width$}  {}", sample.name, sample.description);
    }
    Ok(())
}

fn show(name: &str, config: PreviewConfig, clicks: &[String], dismiss: bool, json: bool) -> Result<()> {
    let sample = find_sample(name)?;
    let mut session = PreviewSession::new(sample, config);
    for label in clicks {
        session
            .click_label(label)
            .with_context(|| format!("failed to click {label:?} in {name}"))?;
    }
    if dismiss {
        let dismissed = session.dismiss_overlays()?;
        debug!(dismissed, "dismiss requested");
    }

    if json {
        let snapshot = session.snapshot().context("failed to lay out sample")?;
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", session.dump().context("failed to lay out sample")?);
    }
    Ok(())
}
