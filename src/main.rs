use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use labelkit::designer::overlays::container_size;
use labelkit::designer::{
    box_composite_svg, default_metrics, load_label, scene_to_svg, BoxLabelSimulation,
    LabelRenderer, SymbolRenderer,
};
use labelkit::{
    ensure_dimension, format_mm, generate_wizard_label, init_logging, standard_layout, Config,
    LabelConfig, ProjectMetadata, Surface, WizardInput,
};

/// Renders a label to SVG.
#[derive(Parser, Debug)]
#[command(
    name = "labelkit",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_DATE"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Label file to render
    #[arg(required_unless_present_any = ["wizard", "standard"])]
    input: Option<PathBuf>,

    /// Render the wizard label instead of a file
    #[arg(long, conflicts_with = "standard")]
    wizard: bool,

    /// Render the standard layout instead of a file
    #[arg(long)]
    standard: bool,

    /// Project metadata JSON used for fields and pre-fill
    #[arg(long, value_name = "FILE")]
    metadata: Option<PathBuf>,

    /// Surface to render for
    #[arg(long, value_enum, default_value_t = SurfaceArg::Preview)]
    surface: SurfaceArg,

    /// Photo behind the overlay surface
    #[arg(long, value_name = "URI")]
    box_image: Option<String>,

    /// Overlay photo width in pixels
    #[arg(long, value_name = "PX", default_value_t = 600.0)]
    width: f64,

    /// Settings file (JSON or TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the SVG here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum SurfaceArg {
    Editor,
    Preview,
    Overlay,
}

impl From<SurfaceArg> for Surface {
    fn from(arg: SurfaceArg) -> Self {
        match arg {
            SurfaceArg::Editor => Surface::Editor,
            SurfaceArg::Preview => Surface::Preview,
            SurfaceArg::Overlay => Surface::Overlay,
        }
    }
}

fn load_metadata(path: Option<&Path>) -> Result<ProjectMetadata> {
    let Some(path) = path else {
        return Ok(ProjectMetadata::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read metadata {}", path.display()))?;
    serde_json::from_str(&content).context("Failed to parse metadata")
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load settings {}", path.display())),
        None => Ok(Config::default_path()
            .map(|path| Config::load_or_default(&path))
            .unwrap_or_default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let config = load_config(cli.config.as_deref())?;
    let metadata = load_metadata(cli.metadata.as_deref())?;

    let label: LabelConfig = if cli.wizard {
        let mut input = WizardInput::new(&config.wizard);
        input.prefill(&metadata);
        generate_wizard_label(&input)
    } else if cli.standard {
        standard_layout(&metadata)
    } else {
        let Some(path) = &cli.input else {
            bail!("No label given");
        };
        load_label(path)?
    };
    ensure_dimension("label width", label.width_mm)?;
    ensure_dimension("label height", label.height_mm)?;

    let surface = Surface::from(cli.surface);
    let pixels_per_mm = surface.pixels_per_mm(&config.editor);
    let symbols = SymbolRenderer::new(&config.barcode);
    let mut renderer = LabelRenderer::with_symbol_renderer(default_metrics(), symbols);
    let scene = renderer.render(&label, &metadata, pixels_per_mm);
    tracing::info!(
        "Rendered {} elements on a {} x {} mm label at {} px/mm for {:?}",
        scene.nodes.len(),
        format_mm(label.width_mm),
        format_mm(label.height_mm),
        pixels_per_mm,
        surface
    );

    let svg = match surface {
        Surface::Editor | Surface::Preview => scene_to_svg(&scene, None),
        Surface::Overlay => {
            let mut sim = BoxLabelSimulation::new(config.overlay.clone());
            sim.set_image(cli.box_image.clone());
            let aspect = sim.aspect_ratio.unwrap_or(4.0 / 3.0);
            let width = ensure_dimension("photo width", cli.width)?;
            box_composite_svg(&sim, &scene, container_size(aspect, width))
        }
    };

    match &cli.output {
        Some(path) => std::fs::write(path, svg)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{svg}"),
    }
    Ok(())
}
