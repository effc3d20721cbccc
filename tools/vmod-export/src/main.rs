//! vmod-export - VMOD model export tool
//!
//! Converts Wavefront OBJ models (with MTL materials and textures) to the
//! VMOD binary model format (.vmod)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

// Use modules from library
use vmod_common::{COLOR_COMPONENTS, NORMAL_COMPONENTS, TEX_COORD_COMPONENTS};
use vmod_export::{ExportOptions, VariantChoice, VmodModel, VmodVariant, convert, manifest};

#[derive(Parser)]
#[command(name = "vmod-export")]
#[command(about = "VMOD model export tool")]
#[command(version)]
struct Cli {
    /// Input model file (.obj), or a .vmod file with --inspect
    #[arg(required_unless_present = "manifest")]
    input: Option<PathBuf>,

    /// Output .vmod file (default: input path with .vmod extension),
    /// or the output directory with --manifest
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Section written after the normals
    #[arg(long, value_enum, default_value_t = VariantChoice::Auto)]
    variant: VariantChoice,

    /// Convert every model listed in a vmod.toml manifest
    #[arg(long, conflicts_with = "input")]
    manifest: Option<PathBuf>,

    /// Decode an existing .vmod file and print a summary
    #[arg(long, requires = "input")]
    inspect: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Some(manifest_path) = &cli.manifest {
        tracing::info!("Building models from {:?}", manifest_path);
        let config = manifest::load_manifest(manifest_path)?;
        let stats = manifest::build_all(&config, cli.output.as_deref())?;
        tracing::info!("Build complete! {} model(s) converted", stats.len());
        return Ok(());
    }

    // clap guarantees an input when no manifest is given
    let Some(input) = cli.input else {
        anyhow::bail!("No input file given");
    };

    if cli.inspect {
        return inspect(&input, cli.variant);
    }

    let output = cli
        .output
        .unwrap_or_else(|| convert::output_path_for(&input));
    tracing::info!("Converting {:?} -> {:?}", input, output);

    let options = ExportOptions {
        variant: cli.variant,
    };
    convert::convert_obj(&input, &output, &options)?;
    tracing::info!("Done!");

    Ok(())
}

/// Decode a .vmod file and log its section sizes
fn inspect(path: &Path, variant: VariantChoice) -> Result<()> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;

    // The variant is not stored in the file
    let variant = match variant {
        VariantChoice::Textured => VmodVariant::Textured,
        VariantChoice::Auto | VariantChoice::Colored => VmodVariant::Colored,
    };
    let model = VmodModel::decode(&bytes, variant)
        .with_context(|| format!("Failed to decode {:?} as {:?} VMOD", path, variant))?;

    tracing::info!("{:?}: {} bytes, {:?} variant", path, bytes.len(), variant);
    tracing::info!("  positions:  {} vertices", model.vertex_count());
    tracing::info!("  tex coords: {} vertices", model.tex_coords.len() / TEX_COORD_COMPONENTS);
    tracing::info!("  normals:    {} vertices", model.normals.len() / NORMAL_COMPONENTS);
    match variant {
        VmodVariant::Textured => {
            tracing::info!("  textures:   {}", model.textures().len());
            for (i, texture) in model.textures().iter().enumerate() {
                tracing::info!(
                    "    [{}] {}x{}x{} ({} words)",
                    i,
                    texture.header.width,
                    texture.header.height,
                    texture.header.channels,
                    texture.words.len()
                );
            }
        }
        VmodVariant::Colored => {
            tracing::info!("  colors:     {} vertices", model.colors().len() / COLOR_COMPONENTS);
        }
    }
    tracing::info!("  triangles:  {}", model.triangle_count());

    Ok(())
}
