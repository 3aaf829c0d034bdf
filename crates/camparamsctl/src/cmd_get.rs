use anyhow::Result;
use camparams_core::{CameraParameters, Size};
use clap::ValueEnum;
use serde::Serialize;
use tracing::info;

use crate::common;

/// How the stored text of a parameter is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    String,
    Int,
    Float,
    Size,
    Sizes,
    Formats,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
enum Decoded {
    Text(Option<String>),
    Int(i32),
    Float(f32),
    Size(Size),
    Sizes(Vec<Size>),
    Formats(Vec<i32>),
}

#[derive(Serialize)]
struct ParamValue<'a> {
    key: &'a str,
    value: Decoded,
}

fn decode(params: &CameraParameters, key: &str, kind: ValueKind) -> Decoded {
    match kind {
        ValueKind::String => Decoded::Text(params.get(key).map(str::to_string)),
        ValueKind::Int => Decoded::Int(params.get_int(key)),
        ValueKind::Float => Decoded::Float(params.get_float(key)),
        ValueKind::Size => Decoded::Size(params.size_for(key)),
        ValueKind::Sizes => Decoded::Sizes(params.sizes_for(key)),
        ValueKind::Formats => Decoded::Formats(params.preview_formats_for(key)),
    }
}

pub fn render(params: &CameraParameters, key: &str, kind: ValueKind, json: bool) -> Result<String> {
    let value = decode(params, key, kind);
    if json {
        return common::to_json(&ParamValue { key, value });
    }
    let text = match value {
        Decoded::Text(text) => text.unwrap_or_default(),
        Decoded::Int(value) => value.to_string(),
        Decoded::Float(value) => value.to_string(),
        Decoded::Size(size) => size.to_string(),
        Decoded::Sizes(sizes) => sizes
            .iter()
            .map(Size::to_string)
            .collect::<Vec<_>>()
            .join("\n"),
        Decoded::Formats(codes) => codes
            .iter()
            .map(|code| format!("0x{code:x} {}", halfmt::HalPixelFormat::from_code(*code)))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    Ok(text)
}

pub fn run(params: &CameraParameters, key: &str, kind: ValueKind, json: bool) -> Result<()> {
    info!(key, ?kind, "reading parameter");
    println!("{}", render(params, key, kind, json)?);
    Ok(())
}
