use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::catalog::Catalog;
use crate::content::{bundled, Document};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqlrefConfig {
    /// Include the guides compiled into the binary
    #[serde(default = "default_bundled")]
    pub bundled: bool,
    /// Extra guides merged after the bundled ones, relative to the config file
    #[serde(default)]
    pub documents: Vec<PathBuf>,
    pub search_limit: Option<usize>,
    pub port: Option<u16>,
}

fn default_bundled() -> bool {
    true
}

impl Default for SqlrefConfig {
    fn default() -> Self {
        Self {
            bundled: true,
            documents: Vec::new(),
            search_limit: None,
            port: None,
        }
    }
}

pub const DEFAULT_PORT: u16 = 7878;

pub fn default_config_path() -> PathBuf {
    PathBuf::from("sqlref.toml")
}

/// A loaded config together with the directory its relative paths resolve against
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: SqlrefConfig,
    pub base_dir: PathBuf,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<LoadedConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: SqlrefConfig = toml::from_str(&contents)?;
    let base_dir = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(LoadedConfig { config, base_dir }))
}

pub fn write_config(path: &Path, config: &SqlrefConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}

impl LoadedConfig {
    /// Documents to load, in merge priority order
    pub fn documents(&self) -> anyhow::Result<Vec<Document>> {
        let mut docs = if self.config.bundled {
            bundled::documents()
        } else {
            Vec::new()
        };

        for path in &self.config.documents {
            let resolved = if path.is_relative() {
                self.base_dir.join(path)
            } else {
                path.clone()
            };
            let doc = Document::from_path(&resolved)
                .map_err(|e| anyhow::anyhow!("cannot read {}: {}", resolved.display(), e))?;
            docs.push(doc);
        }

        if docs.is_empty() {
            anyhow::bail!("no content documents configured (bundled = false and no documents listed)");
        }
        Ok(docs)
    }

    /// Build the catalog described by this config
    pub fn build_catalog(&self) -> anyhow::Result<Catalog> {
        let docs = self.documents()?;
        Ok(Catalog::from_documents(&docs)?)
    }
}
