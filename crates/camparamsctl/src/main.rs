use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use camparamsctl::cmd_dump;
use camparamsctl::cmd_format;
use camparamsctl::cmd_get::{self, ValueKind};
use camparamsctl::cmd_remove;
use camparamsctl::cmd_set;
use camparamsctl::common;

#[derive(Parser, Debug)]
#[command(name = "camparamsctl", version, about = "Camera parameter string CLI")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    /// Output JSON where applicable
    #[arg(long)]
    json: bool,
    /// Flattened parameter string (`k1=v1;k2=v2`)
    #[arg(long, global = true, conflicts_with = "input")]
    params: Option<String>,
    /// Read the flattened parameter string from a file instead of stdin
    #[arg(long, global = true)]
    input: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// List every entry
    Dump,
    /// Read a parameter, decoded as the given kind
    Get {
        #[arg(long)]
        key: String,
        #[arg(long, value_enum, default_value_t = ValueKind::String)]
        kind: ValueKind,
    },
    /// Write a parameter and print the new flattened string
    Set {
        #[arg(long)]
        key: String,
        #[arg(long, allow_hyphen_values = true)]
        value: String,
    },
    /// Delete a parameter and print the new flattened string
    Remove {
        #[arg(long)]
        key: String,
    },
    /// Look up the HAL code of a preview format name
    FormatCode {
        #[arg(long)]
        name: String,
    },
}

fn main() -> Result<()> {
    let Cli {
        verbose,
        json,
        params,
        input,
        cmd,
    } = Cli::parse();

    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| level.into()),
        ))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let load = || common::read_params(params.as_deref(), input.as_deref());

    match cmd {
        Cmd::Dump => cmd_dump::run(&load()?, json)?,
        Cmd::Get { key, kind } => cmd_get::run(&load()?, &key, kind, json)?,
        Cmd::Set { key, value } => cmd_set::run(load()?, &key, &value, json)?,
        Cmd::Remove { key } => cmd_remove::run(load()?, &key)?,
        Cmd::FormatCode { name } => cmd_format::run(&name, json)?,
    };

    Ok(())
}
