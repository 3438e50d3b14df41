mod demo;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use sheen_engine::coords::DrawConstants;
use sheen_engine::kernel::{DerivativeMode, Texture};
use sheen_engine::logging::{init_logging, LoggingConfig};
use sheen_engine::raster::{RasterConfig, SoftwareRenderer};

/// How the rasterizer estimates the distance field's screen-space derivative.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Derivative {
    /// Symmetric difference over neighbouring pixels.
    Central,
    /// One-sided difference, like coarse GPU derivatives.
    Forward,
    /// Zero derivative: hard, aliased edges.
    Hard,
}

impl From<Derivative> for DerivativeMode {
    fn from(d: Derivative) -> Self {
        match d {
            Derivative::Central => DerivativeMode::Central,
            Derivative::Forward => DerivativeMode::Forward,
            Derivative::Hard => DerivativeMode::Constant(0.0),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "sheen-studio", about = "Render the sheen demo scene to a PNG")]
struct Cli {
    /// Output width in pixels
    #[arg(long, default_value_t = 640)]
    width: u32,

    /// Output height in pixels
    #[arg(long, default_value_t = 400)]
    height: u32,

    /// PNG file to write
    #[arg(long, short, default_value = "sheen.png")]
    output: PathBuf,

    /// Derivative strategy for anti-aliasing
    #[arg(long, value_enum, default_value_t = Derivative::Central)]
    derivative: Derivative,

    /// Shade on the calling thread only
    #[arg(long)]
    single_threaded: bool,

    /// Log filter (env_logger syntax); overrides RUST_LOG
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::default();
    if let Some(filter) = cli.log.as_deref() {
        logging = logging.with_filter(filter);
    }
    init_logging(logging);

    let constants = DrawConstants::checked(cli.width, cli.height).context("invalid output size")?;
    let config = RasterConfig {
        derivative: cli.derivative.into(),
        parallel: !cli.single_threaded,
        clear: demo::BACKGROUND,
        ..RasterConfig::default()
    };
    let renderer = SoftwareRenderer::new(constants, config)?;

    let scene = demo::build(cli.width as f32, cli.height as f32).context("building demo scene")?;
    let checker = demo::checkerboard();
    let textures: [&dyn Texture; 1] = [&checker];

    let started = Instant::now();
    let frame = renderer.render_new(&scene, &textures).context("rendering demo scene")?;
    log::info!(
        "rendered {} command(s) at {}x{} in {:.1?}",
        scene.commands().len(),
        cli.width,
        cli.height,
        started.elapsed()
    );

    frame
        .save(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    log::info!("wrote {}", cli.output.display());

    Ok(())
}
