use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use palette_lut_rs::{palettes, ColorLut, RgbPalette};

#[derive(Parser, Debug)]
#[command(version, about = "Builds a 64x64 nearest-color lookup image from a palette")]
struct Args {
    /// JSON palette file: a list of "#RRGGBB"/"#RGB" strings, or an object
    /// with a "colors" list
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Built-in palette to use when no file is given
    #[arg(short, long, default_value = "sweetie-16")]
    builtin: String,

    /// Where to write the lookup image
    #[arg(short, long, default_value = "palette.png")]
    out: PathBuf,

    /// Also write the second-choice companion image used for dithering
    #[arg(long)]
    dither_out: Option<PathBuf>,

    /// List the built-in palettes and exit
    #[arg(long)]
    list: bool
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.list {
        for named in palettes::ALL {
            println!("{} ({} colors)", named.name, named.colors.len());
        }
        return Ok(());
    }

    let palette = match &args.palette {
        Some(path) => RgbPalette::from_file(path)
            .with_context(|| format!("loading palette from {}", path.display()))?,
        None => {
            let named = palettes::by_name(&args.builtin)
                .with_context(|| format!("no built-in palette named {:?}; try --list", args.builtin))?;
            RgbPalette::from_hex(named.colors)?
        }
    };

    tracing::info!(colors = palette.len(), "building lookup table");
    let lut = ColorLut::build(palette)?;

    lut.to_image()
        .save(&args.out)
        .with_context(|| format!("writing {}", args.out.display()))?;
    tracing::info!(path = %args.out.display(), "wrote lookup image");

    if let Some(path) = &args.dither_out {
        lut.dither_companion()
            .to_image()
            .save(path)
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote dither companion");
    }

    Ok(())
}
