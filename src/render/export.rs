//! PNG export of rendered previews

use crate::fabric::config::{FabricConfiguration, PatternMode};
use crate::io::configuration::EXPORT_TOOL_NAME;
use crate::io::error::{FabricError, Result};
use crate::render::surface::ImageSurface;
use std::path::{Path, PathBuf};

/// Suggested file name `"{tool}_{pattern}_{weave_id}.png"`
pub fn export_file_name(tool: &str, pattern: PatternMode, weave_id: &str) -> String {
    format!("{tool}_{pattern}_{weave_id}.png")
}

/// Write the surface to `output_path` as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The surface is empty
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_png(surface: &ImageSurface, output_path: &Path) -> Result<()> {
    if surface.width() == 0 || surface.height() == 0 {
        return Err(FabricError::InvalidConfiguration {
            parameter: "surface",
            value: format!("{}x{}", surface.width(), surface.height()),
            reason: "nothing has been rendered".to_string(),
        });
    }

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| FabricError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    surface
        .image()
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| FabricError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

/// Export into `directory` under the suggested name for `config`
///
/// # Errors
///
/// Returns an error under the same conditions as [`export_png`]
pub fn export_preview(
    surface: &ImageSurface,
    directory: &Path,
    config: &FabricConfiguration,
) -> Result<PathBuf> {
    let path = directory.join(export_file_name(
        EXPORT_TOOL_NAME,
        config.pattern,
        &config.weave_id,
    ));
    export_png(surface, &path)?;
    Ok(path)
}
