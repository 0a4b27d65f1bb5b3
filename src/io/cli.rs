//! Command-line front end: builds configurations, enforces input ranges and
//! drives rendering, analysis, catalog listing and batch processing

use crate::analysis::analyze;
use crate::catalog::Catalog;
use crate::catalog::weave::{WeaveCategory, WeaveDefinition, WeaveTrait};
use crate::catalog::yarn::{YarnCategory, YarnSpec};
use crate::fabric::color::{Palette, Rgb};
use crate::fabric::config::{FabricConfiguration, PatternMode, YarnRef};
use crate::io::configuration::{
    DEFAULT_DEVICE_SCALE, DEFAULT_PREVIEW_HEIGHT, DEFAULT_PREVIEW_WIDTH, DEFAULT_SEED,
    DENSITY_RANGE, MAX_COLORS_PER_SIDE, PITCH_RANGE, REPORT_SUFFIX, ZOOM_RANGE, ZOOM_STEP,
};
use crate::io::error::{FabricError, Result, WithContext, invalid_parameter, unresolved};
use crate::io::progress::{ProgressManager, Stage};
use crate::io::report;
use crate::render::compositor::render_fabric;
use crate::render::export::{export_png, export_preview};
use crate::render::surface::{ImageSurface, ScaledSurface};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Command-line arguments for the colorway preview tool
#[derive(Parser, Debug)]
#[command(name = "weavelab")]
#[command(
    author,
    version,
    about = "Preview woven colorways and estimate weight, production risk and selling points"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output and non-error logs
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a colorway preview to PNG
    Render(RenderArgs),
    /// Print weight, risk and selling point analysis
    Analyze(AnalyzeArgs),
    /// List catalog weaves or yarns
    Catalog(CatalogArgs),
    /// Render and analyze every configuration file in a set of paths
    Batch(BatchArgs),
}

/// Flags describing one colorway; each overrides the configuration file
#[derive(Args, Debug, Clone, Default)]
pub struct FabricArgs {
    /// JSON configuration file to start from
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Color layout
    #[arg(short, long, value_enum)]
    pub pattern: Option<PatternMode>,

    /// Stripe width in pixels (8-80)
    #[arg(long, value_parser = parse_pitch)]
    pub pitch: Option<f64>,

    /// Zoom factor (0.5-3.0, step 0.1)
    #[arg(long, value_parser = parse_zoom)]
    pub zoom: Option<f64>,

    /// Warp colors as comma-separated hex values
    #[arg(long, value_delimiter = ',', value_name = "HEX")]
    pub warp: Vec<Rgb>,

    /// Weft colors as comma-separated hex values
    #[arg(long, value_delimiter = ',', value_name = "HEX")]
    pub weft: Vec<Rgb>,

    /// Replace one warp color, as `INDEX=HEX` (repeatable)
    #[arg(long, value_parser = parse_recolor, value_name = "INDEX=HEX")]
    pub recolor_warp: Vec<(usize, Rgb)>,

    /// Replace one weft color, as `INDEX=HEX` (repeatable)
    #[arg(long, value_parser = parse_recolor, value_name = "INDEX=HEX")]
    pub recolor_weft: Vec<(usize, Rgb)>,

    /// Remove the warp color at this index (repeatable, applied in order)
    #[arg(long, value_name = "INDEX")]
    pub drop_warp: Vec<usize>,

    /// Remove the weft color at this index (repeatable, applied in order)
    #[arg(long, value_name = "INDEX")]
    pub drop_weft: Vec<usize>,

    /// Append this many random preset swatches to the warp colors
    #[arg(long, default_value_t = 0)]
    pub random_warp: usize,

    /// Append this many random preset swatches to the weft colors
    #[arg(long, default_value_t = 0)]
    pub random_weft: usize,

    /// Seed for random swatches
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Warp ends per inch (40-200)
    #[arg(long, value_parser = parse_density)]
    pub epi: Option<f64>,

    /// Weft picks per inch (40-200)
    #[arg(long, value_parser = parse_density)]
    pub ppi: Option<f64>,

    /// Weave id
    #[arg(short, long)]
    pub weave: Option<String>,

    /// Warp yarn id
    #[arg(long)]
    pub warp_yarn: Option<String>,

    /// Weft yarn id; defaults to the warp yarn
    #[arg(long)]
    pub weft_yarn: Option<String>,
}

/// Output size flags shared by rendering commands
#[derive(Args, Debug, Clone)]
pub struct CanvasArgs {
    /// Preview width in logical pixels
    #[arg(long, default_value_t = DEFAULT_PREVIEW_WIDTH)]
    pub width: u32,

    /// Preview height in logical pixels
    #[arg(long, default_value_t = DEFAULT_PREVIEW_HEIGHT)]
    pub height: u32,

    /// Device pixel ratio applied to the output
    #[arg(long, default_value_t = DEFAULT_DEVICE_SCALE)]
    pub scale: f64,

    /// Directory receiving the output files
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

/// Arguments of `render`
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Colorway
    #[command(flatten)]
    pub fabric: FabricArgs,

    /// Output size
    #[command(flatten)]
    pub canvas: CanvasArgs,

    /// Also write the JSON analysis report next to the image
    #[arg(long)]
    pub report: bool,
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Arguments of `analyze`
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Colorway
    #[command(flatten)]
    pub fabric: FabricArgs,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Which catalog table to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogKind {
    /// Weave structures
    Weaves,
    /// Yarns
    Yarns,
}

/// Arguments of `catalog`
#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Table to list
    #[arg(value_enum)]
    pub kind: CatalogKind,

    /// Only entries of this category id
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only weaves with an end use containing this text
    #[arg(short, long)]
    pub application: Option<String>,

    /// Only weaves scoring at least this on a trait, as `trait=value`
    #[arg(short, long, value_parser = parse_threshold)]
    pub min: Vec<(WeaveTrait, u8)>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Arguments of `batch`
#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Configuration files or directories of `.json` files
    #[arg(value_name = "TARGET", required = true)]
    pub targets: Vec<PathBuf>,

    /// Output size
    #[command(flatten)]
    pub canvas: CanvasArgs,

    /// Process configurations even if their preview exists
    #[arg(short, long)]
    pub no_skip: bool,
}

fn parse_in_range(value: &str, range: &RangeInclusive<f64>) -> std::result::Result<f64, String> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("'{value}' is not a number: {e}"))?;
    if range.contains(&parsed) {
        Ok(parsed)
    } else {
        Err(format!(
            "{parsed} is outside {}-{}",
            range.start(),
            range.end()
        ))
    }
}

/// Parse a pitch within the accepted range
///
/// # Errors
///
/// Returns a message if the value is not a number in range
pub fn parse_pitch(value: &str) -> std::result::Result<f64, String> {
    parse_in_range(value, &PITCH_RANGE)
}

/// Parse a zoom within the accepted range, snapped to the slider step
///
/// # Errors
///
/// Returns a message if the value is not a number in range
pub fn parse_zoom(value: &str) -> std::result::Result<f64, String> {
    let zoom = parse_in_range(value, &ZOOM_RANGE)?;
    Ok(((zoom / ZOOM_STEP).round() * ZOOM_STEP).clamp(*ZOOM_RANGE.start(), *ZOOM_RANGE.end()))
}

/// Parse an EPI or PPI within the accepted range
///
/// # Errors
///
/// Returns a message if the value is not a number in range
pub fn parse_density(value: &str) -> std::result::Result<f64, String> {
    parse_in_range(value, &DENSITY_RANGE)
}

/// Parse a `trait=value` weave threshold
///
/// # Errors
///
/// Returns a message if the trait is unknown or the value is not 0-5
pub fn parse_threshold(value: &str) -> std::result::Result<(WeaveTrait, u8), String> {
    let (name, minimum) = value
        .split_once('=')
        .ok_or_else(|| format!("expected trait=value, got '{value}'"))?;
    let trait_ = WeaveTrait::from_id(name.trim())
        .ok_or_else(|| format!("unknown trait '{name}'"))?;
    let minimum: u8 = minimum
        .trim()
        .parse()
        .map_err(|e| format!("'{minimum}' is not a score: {e}"))?;
    if minimum > 5 {
        return Err(format!("score {minimum} is above 5"));
    }
    Ok((trait_, minimum))
}

/// Parse a swatch edit given as `index=hex`
///
/// # Errors
///
/// Returns a message when the separator, index or color is malformed
pub fn parse_recolor(value: &str) -> std::result::Result<(usize, Rgb), String> {
    let (index, color) = value
        .split_once('=')
        .ok_or_else(|| format!("expected index=hex, got '{value}'"))?;
    let index: usize = index
        .trim()
        .parse()
        .map_err(|e| format!("'{index}' is not an index: {e}"))?;
    let color: Rgb = color.parse().map_err(|e: FabricError| e.to_string())?;
    Ok((index, color))
}

/// Apply swatch replacements, then removals, to one side's palette
///
/// # Errors
///
/// Returns an error when an index is out of range or a removal would leave
/// the palette empty
pub fn edit_palette(
    palette: &mut Palette,
    parameter: &'static str,
    recolor: &[(usize, Rgb)],
    drop: &[usize],
) -> Result<()> {
    for &(index, color) in recolor {
        if !palette.set(index, color) {
            return Err(invalid_parameter(
                parameter,
                &index,
                &format!("palette has {} colors", palette.len()),
            ));
        }
    }
    for &index in drop {
        if palette.remove(index).is_none() {
            return Err(invalid_parameter(
                parameter,
                &index,
                &"out of range or the last remaining color",
            ));
        }
    }
    Ok(())
}

/// Check a configuration against the ranges the front end accepts
///
/// # Errors
///
/// Returns an error naming the first value outside its range
pub fn check_input_ranges(config: &FabricConfiguration) -> Result<()> {
    let checks: [(&'static str, f64, &RangeInclusive<f64>); 4] = [
        ("pitch", config.pitch, &PITCH_RANGE),
        ("zoom", config.zoom, &ZOOM_RANGE),
        ("epi", config.epi, &DENSITY_RANGE),
        ("ppi", config.ppi, &DENSITY_RANGE),
    ];
    for (parameter, value, range) in checks {
        if !range.contains(&value) {
            return Err(invalid_parameter(
                parameter,
                &value,
                &format!("must be within {}-{}", range.start(), range.end()),
            ));
        }
    }
    for (parameter, palette) in [
        ("warp_colors", &config.warp_colors),
        ("weft_colors", &config.weft_colors),
    ] {
        if palette.len() > MAX_COLORS_PER_SIDE {
            return Err(invalid_parameter(
                parameter,
                &palette.len(),
                &format!("at most {MAX_COLORS_PER_SIDE} colors per side"),
            ));
        }
    }
    Ok(())
}

/// Read a JSON configuration file
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not describe a valid
/// configuration
pub fn load_configuration(path: &Path) -> Result<FabricConfiguration> {
    let json = std::fs::read_to_string(path).map_err(|e| FabricError::FileSystem {
        path: path.to_path_buf(),
        operation: "read configuration",
        source: e,
    })?;
    FabricConfiguration::from_json(&json).with_path(path)
}

impl FabricArgs {
    /// Build the configuration: file (or defaults), then flags, then swatch
    /// edits, then random swatches
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is unreadable or invalid, or
    /// the result falls outside the accepted input ranges
    pub fn build(&self) -> Result<FabricConfiguration> {
        let mut config = match &self.config {
            Some(path) => load_configuration(path)?,
            None => FabricConfiguration::default(),
        };

        if let Some(pattern) = self.pattern {
            config.pattern = pattern;
        }
        if let Some(pitch) = self.pitch {
            config.pitch = pitch;
        }
        if let Some(zoom) = self.zoom {
            config.zoom = zoom;
        }
        if !self.warp.is_empty() {
            config.warp_colors = Palette::new(self.warp.clone())?;
        }
        if !self.weft.is_empty() {
            config.weft_colors = Palette::new(self.weft.clone())?;
        }
        if let Some(epi) = self.epi {
            config.epi = epi;
        }
        if let Some(ppi) = self.ppi {
            config.ppi = ppi;
        }
        if let Some(weave) = &self.weave {
            config.weave_id.clone_from(weave);
        }
        if let Some(yarn) = &self.warp_yarn {
            config.warp_yarn = YarnRef::Catalog(yarn.clone());
        }
        if let Some(yarn) = &self.weft_yarn {
            config.weft_yarn = Some(YarnRef::Catalog(yarn.clone()));
        }

        edit_palette(
            &mut config.warp_colors,
            "warp_colors",
            &self.recolor_warp,
            &self.drop_warp,
        )?;
        edit_palette(
            &mut config.weft_colors,
            "weft_colors",
            &self.recolor_weft,
            &self.drop_weft,
        )?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        for _ in 0..self.random_warp {
            if config.warp_colors.push_random_swatch(&mut rng).is_none() {
                break;
            }
        }
        for _ in 0..self.random_weft {
            if config.weft_colors.push_random_swatch(&mut rng).is_none() {
                break;
            }
        }

        config.validate()?;
        check_input_ranges(&config)?;
        Ok(config)
    }
}

/// Render `config` at the canvas size, scaled by the device ratio
///
/// # Errors
///
/// Returns [`FabricError::UnresolvedReference`] if the weave is not in the catalog
pub fn render_surface(
    config: &FabricConfiguration,
    catalog: &Catalog,
    canvas: &CanvasArgs,
) -> Result<ImageSurface> {
    let weave = catalog.require_weave(&config.weave_id)?;
    let mut surface = ScaledSurface::new(ImageSurface::new(), canvas.scale);
    render_fabric(&mut surface, canvas.width, canvas.height, weave, config);
    Ok(surface.into_inner())
}

fn filter_weaves<'a>(
    catalog: &'a Catalog,
    args: &CatalogArgs,
) -> Result<Vec<&'a WeaveDefinition>> {
    let mut weaves = match &args.category {
        Some(id) => {
            let category =
                WeaveCategory::from_id(id).ok_or_else(|| unresolved("weave category", id))?;
            catalog.weaves_in(category)
        }
        None => catalog.weaves().iter().collect(),
    };
    if !args.min.is_empty() {
        let meeting = catalog.weaves_meeting(&args.min);
        weaves.retain(|weave| meeting.iter().any(|m| m.id == weave.id));
    }
    if let Some(application) = &args.application {
        let matching = catalog.weaves_for_application(application);
        weaves.retain(|weave| matching.iter().any(|m| m.id == weave.id));
    }
    Ok(weaves)
}

fn filter_yarns<'a>(catalog: &'a Catalog, args: &CatalogArgs) -> Result<Vec<&'a YarnSpec>> {
    match &args.category {
        Some(id) => {
            let category =
                YarnCategory::from_id(id).ok_or_else(|| unresolved("yarn category", id))?;
            Ok(catalog.yarns_in(category))
        }
        None => Ok(catalog.yarns().iter().collect()),
    }
}

/// Dispatches subcommands against the built-in catalog
pub struct CommandRunner {
    cli: Cli,
    catalog: &'static Catalog,
    progress_manager: Option<ProgressManager>,
}

impl CommandRunner {
    /// Create a runner for parsed arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = (!cli.quiet).then(ProgressManager::new);
        Self {
            cli,
            catalog: Catalog::builtin(),
            progress_manager,
        }
    }

    /// Run the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, a reference cannot be
    /// resolved, or output cannot be written
    pub fn run(&mut self) -> Result<()> {
        match &self.cli.command {
            Command::Render(args) => self.render(args),
            Command::Analyze(args) => self.analyze(args),
            Command::Catalog(args) => self.list(args),
            Command::Batch(args) => {
                let args = args.clone();
                self.batch(&args)
            }
        }
    }

    fn render(&self, args: &RenderArgs) -> Result<()> {
        let config = args.fabric.build()?;
        let surface = render_surface(&config, self.catalog, &args.canvas)?;
        let image_path = export_preview(&surface, &args.canvas.output, &config)?;
        tracing::info!(path = %image_path.display(), "preview written");

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", image_path.display())?;

        if args.report {
            let json_path = report_path(&image_path, &args.canvas.output);
            report::write_json(&analyze(&config, self.catalog), &json_path)?;
            writeln!(stdout, "{}", json_path.display())?;
        }
        Ok(())
    }

    fn analyze(&self, args: &AnalyzeArgs) -> Result<()> {
        let config = args.fabric.build()?;
        let analysis = analyze(&config, self.catalog);
        if analysis.weight.is_none() {
            tracing::warn!(
                weave = %config.weave_id,
                yarn = %config.warp_yarn.id(),
                "weave or warp yarn not found"
            );
        }

        let text = match args.format {
            OutputFormat::Text => report::render_text(&analysis),
            OutputFormat::Json => report::to_json(&analysis)?,
        };
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}")?;
        Ok(())
    }

    fn list(&self, args: &CatalogArgs) -> Result<()> {
        let text = match args.kind {
            CatalogKind::Weaves => {
                let weaves = filter_weaves(self.catalog, args)?;
                if args.json {
                    report::weaves_json(&weaves)?
                } else {
                    report::weave_listing(&weaves)
                }
            }
            CatalogKind::Yarns => {
                let yarns = filter_yarns(self.catalog, args)?;
                if args.json {
                    report::yarns_json(&yarns)?
                } else {
                    report::yarn_listing(&yarns)
                }
            }
        };
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{text}")?;
        Ok(())
    }

    fn batch(&mut self, args: &BatchArgs) -> Result<()> {
        let files = collect_configurations(&args.targets)?;
        let files: Vec<PathBuf> = files
            .into_iter()
            .filter(|path| args.no_skip || !preview_path(path, &args.canvas.output).exists())
            .collect();
        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }
        for (index, file) in files.iter().enumerate() {
            self.process_configuration(index, file, &args.canvas)?;
        }
        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        tracing::info!(count = files.len(), "batch complete");
        Ok(())
    }

    fn process_configuration(
        &mut self,
        index: usize,
        path: &Path,
        canvas: &CanvasArgs,
    ) -> Result<()> {
        let name = output_stem(path);
        let advance = |stage: Stage, manager: &mut Option<ProgressManager>| {
            if let Some(pm) = manager {
                pm.advance(index, &name, stage);
            }
        };

        advance(Stage::Render, &mut self.progress_manager);
        let config = load_configuration(path)?;
        check_input_ranges(&config).with_path(path)?;
        let surface = render_surface(&config, self.catalog, canvas)?;

        advance(Stage::Analyze, &mut self.progress_manager);
        let analysis = analyze(&config, self.catalog);

        advance(Stage::Export, &mut self.progress_manager);
        export_png(&surface, &preview_path(path, &canvas.output))?;
        report::write_json(&analysis, &report_path(path, &canvas.output))?;

        advance(Stage::Done, &mut self.progress_manager);
        Ok(())
    }
}

/// Expand files and directories into a sorted list of `.json` files
///
/// # Errors
///
/// Returns an error if a target does not exist, is a non-JSON file, or a
/// directory cannot be read
pub fn collect_configurations(targets: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let is_json = |path: &Path| path.extension().and_then(|s| s.to_str()) == Some("json");
    let mut files = Vec::new();

    for target in targets {
        if target.is_file() {
            if !is_json(target) {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"configuration files must be .json",
                ));
            }
            files.push(target.clone());
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| FabricError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;
            for entry in entries {
                let path = entry.with_path(target)?.path();
                if path.is_file() && is_json(&path) {
                    files.push(path);
                }
            }
        } else {
            return Err(invalid_parameter(
                "target",
                &target.display(),
                &"no such file or directory",
            ));
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn output_stem(config_path: &Path) -> String {
    config_path
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// Preview path of a batch configuration inside `output`
pub fn preview_path(config_path: &Path, output: &Path) -> PathBuf {
    output.join(format!("{}.png", output_stem(config_path)))
}

/// Report path of a batch configuration inside `output`
pub fn report_path(config_path: &Path, output: &Path) -> PathBuf {
    output.join(format!("{}{REPORT_SUFFIX}", output_stem(config_path)))
}
