use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use azclient_sdk::AuthorizationRequest;
use azclient_sdk::builders::{AzAtomicRequestBuilder, PrincipalBuilder};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

/// azcheck - authorization checks against a Permguard PDP
#[derive(Parser, Debug)]
#[command(name = "azcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to a YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// PDP host, overrides the configuration
    #[arg(long)]
    pub host: Option<String>,

    /// PDP port, overrides the configuration
    #[arg(long)]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Send a request read from a JSON file
    Json {
        /// Request file
        file: PathBuf,
    },

    /// Build a single-evaluation request from flags
    Atomic(AtomicArgs),
}

/// Flags of the `atomic` command. Property values are parsed as JSON and
/// fall back to plain strings.
#[derive(Args, Debug)]
pub struct AtomicArgs {
    #[arg(long)]
    pub zone_id: i64,

    #[arg(long)]
    pub policy_store_id: String,

    /// Subject id
    #[arg(long)]
    pub subject: String,

    /// Subject kind (user, workload, attribute)
    #[arg(long)]
    pub subject_type: Option<String>,

    /// Identity provider of the subject
    #[arg(long)]
    pub subject_source: Option<String>,

    #[arg(long)]
    pub resource_type: String,

    #[arg(long)]
    pub resource_id: Option<String>,

    /// Action name
    #[arg(long)]
    pub action: String,

    /// Principal id, defaults to none
    #[arg(long)]
    pub principal: Option<String>,

    #[arg(long)]
    pub request_id: Option<String>,

    /// Subject property as key=value (repeatable)
    #[arg(long = "subject-property", value_parser = parse_property)]
    pub subject_properties: Vec<(String, Value)>,

    /// Resource property as key=value (repeatable)
    #[arg(long = "resource-property", value_parser = parse_property)]
    pub resource_properties: Vec<(String, Value)>,

    /// Action property as key=value (repeatable)
    #[arg(long = "action-property", value_parser = parse_property)]
    pub action_properties: Vec<(String, Value)>,

    /// Context entry as key=value (repeatable)
    #[arg(long = "context", value_parser = parse_property)]
    pub context: Vec<(String, Value)>,
}

impl AtomicArgs {
    pub fn into_request(self) -> AuthorizationRequest {
        let mut builder = AzAtomicRequestBuilder::new(
            self.zone_id,
            self.policy_store_id,
            self.subject,
            self.resource_type,
            self.action,
        );

        if let Some(request_id) = self.request_id {
            builder = builder.with_request_id(request_id);
        }
        if let Some(principal) = self.principal {
            builder = builder.with_principal(PrincipalBuilder::new(principal).build());
        }
        if let Some(kind) = self.subject_type {
            builder = builder.with_subject_type(kind);
        }
        if let Some(source) = self.subject_source {
            builder = builder.with_subject_source(source);
        }
        if let Some(id) = self.resource_id {
            builder = builder.with_resource_id(id);
        }
        for (key, value) in self.subject_properties {
            builder = builder.with_subject_property(key, value);
        }
        for (key, value) in self.resource_properties {
            builder = builder.with_resource_property(key, value);
        }
        for (key, value) in self.action_properties {
            builder = builder.with_action_property(key, value);
        }
        for (key, value) in self.context {
            builder = builder.with_context_property(key, value);
        }

        builder.build()
    }
}

fn parse_property(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))?;
    if key.is_empty() {
        return Err(format!("empty key in `{raw}`"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_owned()));
    Ok((key.to_owned(), value))
}

/// Reads an authorization request from a JSON file.
pub fn read_request(path: &Path) -> Result<AuthorizationRequest> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read request file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid authorization request in {}", path.display()))
}
