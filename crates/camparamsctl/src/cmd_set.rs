use anyhow::{Context, Result};
use camparams_core::CameraParameters;
use serde::Serialize;
use tracing::info;

use crate::common;

#[derive(Serialize)]
struct SetResponse<'a> {
    key: &'a str,
    value: &'a str,
    params: String,
}

pub fn render(params: &mut CameraParameters, key: &str, value: &str, json: bool) -> Result<String> {
    params
        .try_set(key, value)
        .with_context(|| format!("write parameter {key}"))?;
    let flattened = params.flatten();
    if json {
        common::to_json(&SetResponse {
            key,
            value,
            params: flattened,
        })
    } else {
        Ok(flattened)
    }
}

pub fn run(mut params: CameraParameters, key: &str, value: &str, json: bool) -> Result<()> {
    info!(key, value, "setting parameter");
    println!("{}", render(&mut params, key, value, json)?);
    Ok(())
}
