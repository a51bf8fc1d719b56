use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use halftone::rendering::Background;
use halftone::{BlockSize, ConfigError, Halftoner, Overrides, Settings};

#[derive(Parser)]
#[command(name = "halftone")]
#[command(about = "Convert an image into a halftone dot grid (PNG and SVG)")]
struct Cli {
    /// Source image file
    file: PathBuf,

    /// Block size in source pixels (default 8)
    blocksize: Option<usize>,

    /// Maximum dot size: 0 = inscribed circle, 1 = circumscribed circle
    #[arg(long)]
    darkness_factor: Option<f64>,

    /// Raster supersampling multiplier used for anti-aliasing
    #[arg(long)]
    scaling_factor: Option<u32>,

    /// PNG background
    #[arg(long, value_enum)]
    background: Option<Background>,

    /// Output directory (created if missing)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Re-compress the PNG with oxipng
    #[arg(long, overrides_with = "no_optimize")]
    optimize: bool,

    /// Skip oxipng even if the settings file enables it
    #[arg(long, overrides_with = "optimize")]
    no_optimize: bool,

    /// YAML settings file
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// `None` leaves the settings file value in place.
    fn optimize_override(&self) -> Option<bool> {
        match (self.optimize, self.no_optimize) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "halftone=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let blocksize = match cli.blocksize {
        Some(size) => BlockSize::new(size).ok_or(ConfigError::ZeroBlockSize)?,
        None => {
            println!(
                "no blocksize specified, assuming default blocksize {}",
                BlockSize::DEFAULT
            );
            BlockSize::DEFAULT
        }
    };

    let settings = Settings::load_or_default(cli.config.as_deref())?.apply(Overrides {
        darkness_factor: cli.darkness_factor,
        scaling_factor: cli.scaling_factor,
        background: cli.background,
        out_dir: cli.out_dir.clone(),
        optimize: cli.optimize_override(),
    });

    let halftoner = Halftoner::new(settings)?;
    let paths = halftoner.run(&cli.file, blocksize)?;

    println!("Rendered {}", paths.png.display());
    println!("Rendered {}", paths.svg.display());

    Ok(())
}
