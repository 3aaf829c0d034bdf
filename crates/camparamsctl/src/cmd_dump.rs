use std::io::{self, Write};

use anyhow::{Context, Result};
use camparams_core::CameraParameters;

use crate::common;

pub fn run(params: &CameraParameters, json: bool) -> Result<()> {
    if json {
        return common::print_json(params);
    }
    let mut out = io::stdout().lock();
    params.write_dump(&mut out).context("write dump")?;
    out.flush().context("flush stdout")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_dump_is_an_ordered_object() {
        let params: CameraParameters = "zoom=2;effect=mono".parse().unwrap();
        let json = common::to_json(&params).expect("json");
        assert_eq!(json, "{\n  \"zoom\": \"2\",\n  \"effect\": \"mono\"\n}");
    }
}
