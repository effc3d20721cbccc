//! Manifest parsing and batch conversion
//!
//! Parses vmod.toml and converts every listed model.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::convert::{ConvertStats, ExportOptions, VariantChoice, convert_obj};
use vmod_common::VMOD_EXT;

/// Root manifest structure
#[derive(Debug, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub models: BTreeMap<String, ModelEntry>,
    /// Directory relative paths are resolved against (the manifest's own)
    #[serde(skip)]
    pub root: PathBuf,
}

#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output directory; models are written next to their source if unset
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ModelEntry {
    Simple(PathBuf),
    Detailed {
        path: PathBuf,
        #[serde(default)]
        variant: VariantChoice,
    },
}

impl ModelEntry {
    pub fn path(&self) -> &Path {
        match self {
            ModelEntry::Simple(p) => p,
            ModelEntry::Detailed { path, .. } => path,
        }
    }

    pub fn options(&self) -> ExportOptions {
        match self {
            ModelEntry::Simple(_) => ExportOptions::default(),
            ModelEntry::Detailed { variant, .. } => ExportOptions { variant: *variant },
        }
    }
}

impl Manifest {
    /// Source path of an entry, resolved against the manifest directory
    pub fn source_path(&self, entry: &ModelEntry) -> PathBuf {
        self.root.join(entry.path())
    }

    /// Output path for a named entry
    pub fn output_path(&self, name: &str, entry: &ModelEntry, dir: Option<&Path>) -> PathBuf {
        let file_name = format!("{}.{}", name, VMOD_EXT);
        match dir.or(self.output.dir.as_deref()) {
            Some(dir) => self.root.join(dir).join(file_name),
            None => self.source_path(entry).with_file_name(file_name),
        }
    }
}

/// Parse manifest text; relative paths resolve against `root`
pub fn parse_manifest(content: &str, root: &Path) -> Result<Manifest> {
    let mut manifest: Manifest = toml::from_str(content).context("Failed to parse manifest")?;
    manifest.root = root.to_path_buf();
    Ok(manifest)
}

/// Load and parse a manifest file
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest: {:?}", path))?;
    let root = path.parent().unwrap_or(Path::new(""));
    parse_manifest(&content, root).with_context(|| format!("Invalid manifest: {:?}", path))
}

/// Validate a manifest without building
pub fn validate(manifest: &Manifest) -> Result<()> {
    for (name, entry) in &manifest.models {
        let source = manifest.source_path(entry);
        if !source.exists() {
            anyhow::bail!("Model '{}' source not found: {:?}", name, source);
        }
    }
    Ok(())
}

/// Convert all models from a manifest, in name order
pub fn build_all(manifest: &Manifest, output_override: Option<&Path>) -> Result<Vec<ConvertStats>> {
    validate(manifest)?;

    let mut stats = Vec::with_capacity(manifest.models.len());
    for (name, entry) in &manifest.models {
        let input = manifest.source_path(entry);
        let output = manifest.output_path(name, entry, output_override);
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
        }

        tracing::info!("Converting model: {} -> {:?}", name, output);
        let result = convert_obj(&input, &output, &entry.options())
            .with_context(|| format!("Model '{}' failed", name))?;
        stats.push(result);
    }

    Ok(stats)
}
