use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};
use camparams_core::CameraParameters;
use serde::Serialize;
use tracing::debug;

/// Load the flattened parameter string from `--params`, `--input` or stdin.
pub fn read_params(params: Option<&str>, input: Option<&Path>) -> Result<CameraParameters> {
    let text = match (params, input) {
        (Some(_), Some(_)) => bail!("specify either --params or --input, not both"),
        (Some(text), None) => text.to_string(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("read parameters from {}", path.display()))?,
        (None, None) => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("read parameters from stdin")?;
            text
        }
    };
    let params = parse_params(&text);
    debug!(entries = params.len(), "loaded parameters");
    Ok(params)
}

/// Parse flattened text, ignoring the line terminator editors and shells
/// append.
pub fn parse_params(text: &str) -> CameraParameters {
    let text = text.strip_suffix('\n').unwrap_or(text);
    let text = text.strip_suffix('\r').unwrap_or(text);
    let mut params = CameraParameters::new();
    params.unflatten(text);
    params
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serialise JSON output")
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", to_json(value)?);
    Ok(())
}
