use anyhow::Result;
use camparams_core::CameraParameters;
use tracing::info;

pub fn render(params: &mut CameraParameters, key: &str) -> String {
    if !params.contains_key(key) {
        info!(key, "parameter not present");
    }
    params.remove(key);
    params.flatten()
}

pub fn run(mut params: CameraParameters, key: &str) -> Result<()> {
    println!("{}", render(&mut params, key));
    Ok(())
}
