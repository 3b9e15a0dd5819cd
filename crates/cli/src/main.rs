use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;
use std::sync::Arc;

use clap::Parser;

use obscura_core::effects::domain::effect_config::{EffectConfig, EffectKind, Intensity};
use obscura_core::imaging::domain::image_writer::ImageWriter;
use obscura_core::imaging::infrastructure::http_image_reader::HttpImageReader;
use obscura_core::imaging::infrastructure::image_file_writer::ImageFileWriter;
use obscura_core::imaging::infrastructure::reader_factory::create_reader;
use obscura_core::pipeline::render_session::{DemoConfig, RenderSession};
use obscura_core::regions::domain::region_provider::RegionProvider;
use obscura_core::regions::infrastructure::fitted_region_provider::FittedRegionProvider;
use obscura_core::regions::infrastructure::fixed_region_provider::{
    FixedRegionProvider, RegionTable,
};
use obscura_core::shared::constants::{
    DEFAULT_INTENSITY, DEFAULT_SUBJECT, DEMO_IMAGE_URL, IMAGE_EXTENSIONS,
};

/// Obscure rectangular image regions with blur, pixelate or motion smear.
#[derive(Parser)]
#[command(name = "obscura")]
struct Cli {
    /// Input image: a file path, an http(s) URL, or `demo` for the demo photo.
    input: String,

    /// Output image file.
    output: PathBuf,

    /// Effect: blur, pixelate or motion.
    #[arg(long, default_value = "blur")]
    effect: String,

    /// Effect intensity (0-100).
    #[arg(long, default_value_t = DEFAULT_INTENSITY as u32)]
    intensity: u32,

    /// Subject whose regions are obscured.
    #[arg(long, default_value = DEFAULT_SUBJECT)]
    subject: String,

    /// JSON region table (defaults to the built-in demo table).
    #[arg(long)]
    regions: Option<PathBuf>,

    /// Rescale regions from the table's reference size to the input size.
    #[arg(long)]
    fit_regions: bool,

    /// Draw the diagnostic outline around each region.
    #[arg(long)]
    outline: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = validate(&cli)?;

    let provider = build_provider(cli.regions.as_deref(), cli.fit_regions)?;
    let mut session = RenderSession::new(provider, config);

    let location = resolve_location(&cli.input);
    let reader = create_reader(location);
    session.load(reader.as_ref(), location)?;

    let output = session.output().ok_or("Nothing was rendered")?;
    ImageFileWriter::new().write(&cli.output, output)?;

    if let Some(report) = session.last_report() {
        log::info!(
            "Rendered {} regions ({} clamped, {} skipped, {} failed)",
            report.rendered,
            report.clamped,
            report.skipped,
            report.failed
        );
    }
    log::info!("Output written to {}", cli.output.display());
    Ok(())
}

fn build_provider(
    regions: Option<&Path>,
    fit: bool,
) -> Result<Box<dyn RegionProvider>, Box<dyn std::error::Error>> {
    let table = match regions {
        Some(path) => {
            log::info!("Loading region table {}", path.display());
            RegionTable::from_json_file(path)?
        }
        None => RegionTable::demo(),
    };
    let reference_size = table.reference_size;
    let fixed: Box<dyn RegionProvider> = Box::new(FixedRegionProvider::new(Arc::new(table)));

    if !fit {
        return Ok(fixed);
    }
    let size = reference_size.ok_or("--fit-regions needs a region table with reference_size")?;
    Ok(Box::new(FittedRegionProvider::new(fixed, size)?))
}

fn validate(cli: &Cli) -> Result<DemoConfig, Box<dyn std::error::Error>> {
    let location = resolve_location(&cli.input);
    if !HttpImageReader::handles(location) && !Path::new(location).exists() {
        return Err(format!("Input file not found: {location}").into());
    }
    if !is_image(&cli.output) {
        return Err(format!(
            "Output must be an image file ({}), got {}",
            IMAGE_EXTENSIONS.join(", "),
            cli.output.display()
        )
        .into());
    }
    if let Some(path) = &cli.regions {
        if !path.exists() {
            return Err(format!("Region table not found: {}", path.display()).into());
        }
    }
    if cli.subject.trim().is_empty() {
        return Err("Subject must not be empty".into());
    }

    let kind = EffectKind::from_str(&cli.effect)?;
    let intensity = Intensity::new(cli.intensity)?;
    Ok(DemoConfig {
        effect: EffectConfig::new(kind, intensity),
        subject: cli.subject.clone(),
        outline: cli.outline,
    })
}

fn resolve_location(input: &str) -> &str {
    if input.eq_ignore_ascii_case("demo") {
        DEMO_IMAGE_URL
    } else {
        input
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
