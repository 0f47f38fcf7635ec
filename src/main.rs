// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pdns_simple::{
    config::ClientOptions,
    constants::{
        DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_SERVER_ID, ENV_API_KEY, ENV_API_URL, ENV_SERVER_ID,
        ENV_TIMEOUT_SECS, TOKIO_WORKER_THREADS,
    },
    pdns::{types::ZoneKind, PowerDnsClient},
    records::{RecordFilter, SimpleRecord},
    setup::SetupOptions,
    simple_client::SimpleClient,
};
use serde::Serialize;
use tracing::{debug, info};

/// Manage PowerDNS records one value at a time
#[derive(Debug, Parser)]
#[command(name = "pdns-simple", version, about)]
struct Cli {
    /// PowerDNS API URL (scheme optional)
    #[arg(long, env = ENV_API_URL)]
    api_url: String,

    /// PowerDNS API key
    #[arg(long, env = ENV_API_KEY, hide_env_values = true)]
    api_key: String,

    /// PowerDNS server id
    #[arg(long, env = ENV_SERVER_ID, default_value = DEFAULT_SERVER_ID)]
    server_id: String,

    /// HTTP request timeout in seconds
    #[arg(long, env = ENV_TIMEOUT_SECS, default_value_t = DEFAULT_HTTP_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Zone management
    #[command(subcommand)]
    Zones(ZonesCommand),

    /// Record management
    #[command(subcommand)]
    Records(RecordsCommand),

    /// Bootstrap a zone from a YAML file
    Setup {
        /// Setup options file
        file: PathBuf,
    },
}

#[derive(Debug, Subcommand)]
enum ZonesCommand {
    /// List zones
    List,

    /// Create a zone
    Create {
        zone: String,
        /// Zone kind (native, master, slave, forwarded)
        #[arg(long, default_value = "native")]
        kind: ZoneKind,
    },

    /// Delete a zone and all of its records
    Delete { zone: String },
}

#[derive(Debug, Subcommand)]
enum RecordsCommand {
    /// List every record of a zone
    List { zone: String },

    /// Find records by type and optional name
    Find {
        zone: String,
        #[arg(value_name = "TYPE")]
        record_type: String,
        #[arg(long)]
        name: Option<String>,
    },

    /// Add values to a record set
    Add(RecordArgs),

    /// Replace a record set
    Set(RecordArgs),

    /// Remove values, or the whole record set when no content is given
    Remove {
        zone: String,
        #[arg(long = "type")]
        record_type: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, num_args = 1..)]
        content: Vec<String>,
    },
}

#[derive(Debug, Args)]
struct RecordArgs {
    zone: String,
    #[arg(long = "type")]
    record_type: String,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    ttl: Option<u32>,
    #[arg(long, required = true, num_args = 1..)]
    content: Vec<String>,
    #[arg(long, num_args = 1..)]
    comment: Vec<String>,
}

impl RecordArgs {
    fn into_parts(self) -> (String, SimpleRecord) {
        let record = SimpleRecord {
            name: self.name,
            record_type: self.record_type,
            ttl: self.ttl,
            content: self.content,
            comment: self.comment,
        };
        (self.zone, record)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Build Tokio runtime with custom thread names
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(TOKIO_WORKER_THREADS)
        .thread_name("pdns-simple")
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cli))
}

fn init_logging() {
    // Respects RUST_LOG (default: info) and RUST_LOG_FORMAT (json|text).
    // Logs go to stderr so command output on stdout stays machine readable.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_thread_names(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_thread_names(true)
                .with_target(false)
                .with_ansi(true)
                .compact()
                .init();
        }
    }
}

async fn async_main(cli: Cli) -> Result<()> {
    init_logging();

    let options = ClientOptions::new(&cli.api_url, &cli.api_key)
        .with_server_id(&cli.server_id)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let endpoint = PowerDnsClient::new(&options).context("invalid PowerDNS connection options")?;
    debug!(url = %endpoint.base_url(), server_id = %endpoint.server_id(), "PowerDNS client created");

    let client = SimpleClient::new(endpoint);

    match cli.command {
        Command::Zones(ZonesCommand::List) => print_json(&client.get_domains().await?)?,
        Command::Zones(ZonesCommand::Create { zone, kind }) => {
            print_json(&client.create_domain(&zone, kind).await?)?;
        }
        Command::Zones(ZonesCommand::Delete { zone }) => {
            client.delete_domain(&zone).await?;
            info!(zone = %zone, "Zone deleted");
        }
        Command::Records(RecordsCommand::List { zone }) => {
            print_json(&client.get_records(&zone).await?)?;
        }
        Command::Records(RecordsCommand::Find {
            zone,
            record_type,
            name,
        }) => {
            print_json(
                &client
                    .find_records(&zone, &record_type, name.as_deref())
                    .await?,
            )?;
        }
        Command::Records(RecordsCommand::Add(args)) => {
            let (zone, record) = args.into_parts();
            client.add_record(&zone, record).await?;
        }
        Command::Records(RecordsCommand::Set(args)) => {
            let (zone, record) = args.into_parts();
            client.set_record(&zone, record).await?;
        }
        Command::Records(RecordsCommand::Remove {
            zone,
            record_type,
            name,
            content,
        }) => {
            let mut filter = RecordFilter::new(record_type).with_content(content);
            filter.name = name;
            client.remove_record(&zone, filter).await?;
        }
        Command::Setup { file } => {
            let setup = SetupOptions::from_yaml_file(&file)?;
            client.setup_domain(&setup).await?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
