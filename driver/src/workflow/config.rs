use anyhow::Context;
use dhtfcore::areas::GeneratorConfig;
use dhtfcore::results::SweepConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Both tools' settings; any section or field left out keeps its default.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub sweep: SweepConfig,
    pub generator: GeneratorConfig,
}

impl ToolsConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading tools config {}", path_ref.display()))?;
        let config: ToolsConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing tools config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
