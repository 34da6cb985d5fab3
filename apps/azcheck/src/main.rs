//! azcheck - authorization checks against a Permguard PDP
//!
//! Exits with 0 when access is permitted, 1 when it is denied and 2 when the
//! check could not be performed.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::process::ExitCode;

use anyhow::{Context, Result};
use azclient_grpc::AzClient;
use azclient_sdk::AuthorizationResponse;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cli;
mod config;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    match run(cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("azcheck: {e:#}");
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> Result<bool> {
    let mut config = config::load(cli.config.as_deref())?;
    let overrides = config::endpoint_override(&config, cli.host, cli.port);
    config.apply(overrides);

    let request = match cli.command {
        Command::Json { file } => cli::read_request(&file)?,
        Command::Atomic(args) => args.into_request(),
    };

    let client = AzClient::from_config(config);
    let response = client
        .check(&request)
        .await
        .into_result()
        .context("authorization check failed")?;

    for line in render(&response) {
        println!("{line}");
    }
    Ok(response.decision)
}

fn render(response: &AuthorizationResponse) -> Vec<String> {
    let headline = if response.decision {
        "Authorization Permitted"
    } else {
        "Authorization Denied"
    };
    let mut lines = vec![headline.to_owned()];

    for (position, evaluation) in response.evaluations.iter().enumerate() {
        let verdict = match evaluation.decision {
            Some(true) => "permitted",
            Some(false) => "denied",
            None => "undecided",
        };
        let id = evaluation.request_id.as_deref().unwrap_or_default();
        lines.push(format!("  evaluation {} [{id}]: {verdict}", position + 1));
    }

    for (audience, reason) in response.reasons() {
        lines.push(format!(
            "  {audience} reason: {} {}",
            reason.code.as_deref().unwrap_or("-"),
            reason.message.as_deref().unwrap_or_default()
        ));
    }
    lines
}
