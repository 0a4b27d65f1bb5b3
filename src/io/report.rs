//! Text and JSON rendering of analysis results and catalog listings

use crate::analysis::FabricAnalysis;
use crate::catalog::weave::{WeaveDefinition, WeaveSummary};
use crate::catalog::yarn::YarnSpec;
use crate::io::error::{FabricError, Result, WithContext};
use std::fmt::Write;
use std::path::Path;

/// Human-readable multi-line report
pub fn render_text(analysis: &FabricAnalysis) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_text(&mut out, analysis);
    out
}

fn write_text(out: &mut String, analysis: &FabricAnalysis) -> std::fmt::Result {
    writeln!(out, "Weave: {}", analysis.weave_id)?;

    match &analysis.weight {
        Some(weight) => writeln!(
            out,
            "Weight: {} g/m² ({} oz/yd²), {}",
            weight.gsm, weight.ounce_equivalent, weight.band
        )?,
        None => writeln!(out, "Weight: unavailable (weave or warp yarn not found)")?,
    }

    writeln!(
        out,
        "\nOverall risk: {} [{}]",
        analysis.risks.overall,
        analysis.risks.overall.color()
    )?;
    writeln!(out, "{}", analysis.risks.summary)?;
    for finding in &analysis.risks.findings {
        writeln!(
            out,
            "  {} {} [{}] {}",
            finding.category.icon(),
            finding.category.name(),
            finding.level,
            finding.title
        )?;
        writeln!(out, "     {}", finding.description)?;
        for recommendation in &finding.recommendations {
            writeln!(out, "     - {recommendation}")?;
        }
    }

    writeln!(out, "\nSelling points:")?;
    for point in &analysis.selling.points {
        writeln!(
            out,
            "  [{}] {}: {}",
            point.family.label(),
            point.title,
            point.description
        )?;
    }
    let keywords: Vec<&str> = analysis
        .selling
        .keywords
        .iter()
        .map(String::as_str)
        .collect();
    writeln!(out, "Keywords: {}", keywords.join(", "))?;
    writeln!(out, "Copy: {}", analysis.selling.copy)?;
    Ok(())
}

/// Pretty-printed JSON document
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn to_json(analysis: &FabricAnalysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}

/// Write the JSON document to `path`, creating parent directories
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file written
pub fn write_json(analysis: &FabricAnalysis, path: &Path) -> Result<()> {
    let json = to_json(analysis).with_path(path)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| FabricError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    std::fs::write(path, json).map_err(|e| FabricError::FileSystem {
        path: path.to_path_buf(),
        operation: "write report",
        source: e,
    })
}

/// One line per weave: id, name, family, repeat, warp face share, weight
/// modifier, difficulty
pub fn weave_listing(weaves: &[&WeaveDefinition]) -> String {
    weaves
        .iter()
        .map(|weave| {
            format!(
                "{:<18} {} ({}) [{}] {}x{} warp {:.0}% gsm×{} difficulty {}",
                weave.id,
                weave.name,
                weave.name_en,
                weave.category.label(),
                weave.repeat_x,
                weave.repeat_y,
                weave.warp_face_ratio() * 100.0,
                weave.gsm_modifier,
                weave.production_difficulty
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per yarn: id, name, composition, count, price level
pub fn yarn_listing(yarns: &[&YarnSpec]) -> String {
    yarns
        .iter()
        .map(|yarn| {
            format!(
                "{:<24} {} [{}] {} Ne {:.0} price {}",
                yarn.id(),
                yarn.name(),
                yarn.category(),
                yarn.composition_label(),
                yarn.count().ne(),
                yarn.price_level()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Weave summaries as a JSON array, matrices included
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn weaves_json(weaves: &[&WeaveDefinition]) -> Result<String> {
    let summaries: Vec<WeaveSummary> = weaves
        .iter()
        .map(|weave| WeaveSummary::from(*weave))
        .collect();
    Ok(serde_json::to_string_pretty(&summaries)?)
}

/// Yarn records as a JSON array
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn yarns_json(yarns: &[&YarnSpec]) -> Result<String> {
    Ok(serde_json::to_string_pretty(yarns)?)
}
