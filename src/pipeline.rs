use std::path::PathBuf;

use rand::Rng;

use crate::assets::font::FontAsset;
use crate::assets::images::{DecorativeImage, ImageLibrary};
use crate::foundation::config::{Paths, SlideConfig};
use crate::foundation::date::SlideDate;
use crate::foundation::error::{FodError, FodResult};
use crate::layout::fit::{FactLayout, fit_fact, fit_title};
use crate::render::color::background_color;
use crate::render::cpu::{SlideContent, compose_slide};
use crate::render::output::save_slide;
use crate::source::fact::FactSource;

/// Outcome of a full slide run.
#[derive(Clone, Debug)]
pub struct GeneratedSlide {
    pub path: PathBuf,
    pub date: SlideDate,
    /// Layout actually drawn, including the fact it was made from.
    pub layout: FactLayout,
    pub background: [u8; 3],
    pub image: PathBuf,
}

impl GeneratedSlide {
    /// One-line summary, e.g. `FOD 10/18/26: Whales are cool.`
    pub fn summary(&self) -> String {
        format!("{} {}", self.date.title(), self.layout.fact)
    }
}

/// Fetch, lay out, draw and save one slide.
///
/// Missing fonts, empty image directories and unwritable outputs are errors; unfit facts and
/// unlucky color draws are not.
#[tracing::instrument(
    skip_all,
    fields(date = %date.display(), images = %paths.images.display())
)]
pub fn generate_slide<S, R>(
    source: &mut S,
    date: SlideDate,
    paths: &Paths,
    cfg: &SlideConfig,
    rng: &mut R,
) -> FodResult<GeneratedSlide>
where
    S: FactSource,
    R: Rng + ?Sized,
{
    let mut font = FontAsset::load(&paths.font)?;
    let library = ImageLibrary::scan(&paths.images)?;

    let background = background_color(rng, cfg);
    let image_path = library
        .choose(rng)
        .ok_or_else(|| FodError::NoImages(library.dir().to_path_buf()))?
        .to_path_buf();
    let image = DecorativeImage::load(&image_path, cfg.image_box)?;
    tracing::debug!(
        image = %image_path.display(),
        w = image.width,
        h = image.height,
        "image chosen"
    );

    let title = fit_title(&date.title(), &mut font, cfg);
    let layout = fit_fact(source, &mut font, cfg);

    let content = SlideContent {
        background,
        image: &image,
        side: date.image_side(),
        title: &title,
        fact: &layout,
    };
    let frame = compose_slide(&content, &mut font, cfg)?;
    let path = save_slide(&frame, &paths.output, &date.file_name())?;

    Ok(GeneratedSlide {
        path,
        date,
        layout,
        background,
        image: image_path,
    })
}
