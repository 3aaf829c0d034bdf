use anyhow::Result;
use camparams_core::CameraParameters;
use halfmt::{HalPixelFormat, UNKNOWN_FORMAT_CODE};
use serde::Serialize;
use tracing::warn;

use crate::common;

#[derive(Serialize)]
struct FormatCode<'a> {
    name: &'a str,
    code: i32,
    format: Option<HalPixelFormat>,
}

pub fn render(name: &str, json: bool) -> Result<String> {
    let code = CameraParameters::preview_format_to_enum(Some(name));
    let format = (code != UNKNOWN_FORMAT_CODE).then(|| HalPixelFormat::from_code(code));
    if format.is_none() {
        warn!(name, "unknown preview format");
    }
    if json {
        return common::to_json(&FormatCode { name, code, format });
    }
    Ok(match format {
        Some(format) => format!("{code} {format}"),
        None => code.to_string(),
    })
}

pub fn run(name: &str, json: bool) -> Result<()> {
    println!("{}", render(name, json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_names() {
        assert_eq!(render("yuv420sp", false).unwrap(), "17 YCrCb_420_SP");
        assert_eq!(render("bayer-rggb", false).unwrap(), "32 RAW16");
        assert_eq!(render("nonsense", false).unwrap(), "-1");
    }

    #[test]
    fn json_carries_enum_variant() {
        let value: serde_json::Value =
            serde_json::from_str(&render("rgb565", true).unwrap()).unwrap();
        assert_eq!(value["code"], 4);
        assert_eq!(value["format"], "Rgb565");
    }
}
