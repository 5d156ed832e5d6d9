use crate::result::CommonResult;
use lovelace_schema::LovelaceConfig;
use std::path::Path;

/// Read and parse a dashboard document from disk
pub fn read_dashboard(path: &Path) -> CommonResult<LovelaceConfig> {
    let source = std::fs::read_to_string(path)?;
    Ok(LovelaceConfig::from_json(&source)?)
}

/// Serialize a dashboard document and write it to disk
pub fn write_dashboard(path: &Path, config: &LovelaceConfig, pretty: bool) -> CommonResult<()> {
    let mut json = config.to_json(pretty)?;
    json.push('\n');
    std::fs::write(path, json)?;
    Ok(())
}
