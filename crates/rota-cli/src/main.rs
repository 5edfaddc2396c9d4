mod cli;
mod config;
mod render;
mod viewer;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use rota_adapters::opsgenie::OpsGenieClient;

use crate::cli::{Cli, Output};
use crate::config::Config;
use crate::render::{JsonRenderer, Renderer, TextRenderer};
use crate::viewer::Viewer;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => config::default_path()?,
    };
    let config = Config::load(&path)?;
    let tz = config.timezone()?;
    info!(path = %path.display(), teams = config.team_names.len(), "config loaded");

    let client = OpsGenieClient::new(
        &config.ops_genie.api_key,
        config.api_url(),
        cli.call_timeout(),
    )
    .context("failed to create OpsGenie client")?;
    let viewer = Viewer::new(client, cli.roster_options(), cli.weeks, cli.alerts);

    let reports = viewer
        .report_all(&config.team_names, chrono::Utc::now())
        .await;

    let renderer: Box<dyn Renderer> = match cli.output {
        Output::Text => Box::new(TextRenderer::new(tz)),
        Output::Json => Box::new(JsonRenderer),
    };
    let mut stdout = io::stdout().lock();
    renderer
        .render(&reports, &mut stdout)
        .context("failed to write output")?;
    stdout.flush()?;

    if reports.iter().any(viewer::TeamReport::is_failed) {
        return Ok(ExitCode::from(2));
    }
    Ok(ExitCode::SUCCESS)
}
