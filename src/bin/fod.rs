use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fod", version, about = "Render today's fact-of-the-day slide as a PNG")]
struct Cli {
    /// Font used for the title and fact text.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Directory of transparent decorative PNGs.
    #[arg(long)]
    images: Option<PathBuf>,

    /// Directory the slide is written into (created if missing).
    #[arg(long)]
    out: Option<PathBuf>,
}

impl Cli {
    fn paths(self) -> fod::Paths {
        let defaults = fod::Paths::default();
        fod::Paths {
            font: self.font.unwrap_or(defaults.font),
            images: self.images.unwrap_or(defaults.images),
            output: self.out.unwrap_or(defaults.output),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let paths = Cli::parse().paths();
    let cfg = fod::SlideConfig::default();
    let date = fod::SlideDate::today();

    let mut source = fod::HttpFactSource::default_endpoint(&cfg).context("create fact source")?;
    let slide = fod::generate_slide(&mut source, date, &paths, &cfg, &mut rand::rng())
        .with_context(|| format!("generate slide for {}", date.display()))?;

    tracing::debug!(
        background = ?slide.background,
        image = %slide.image.display(),
        font_size = slide.layout.font_size,
        origin = ?slide.layout.origin,
        "slide composed"
    );
    println!("{}", slide.summary());
    Ok(())
}
