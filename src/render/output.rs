use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::{FodError, FodResult};
use crate::render::cpu::{SlideFrame, premul_rgba_to_rgb};

/// Write `frame` as an RGB PNG named `file_name` inside `dir`, creating `dir` if needed.
#[tracing::instrument(skip(frame))]
pub fn save_slide(frame: &SlideFrame, dir: &Path, file_name: &str) -> FodResult<PathBuf> {
    let expected = (frame.width as usize) * (frame.height as usize) * 4;
    if frame.data.len() != expected {
        return Err(FodError::render(format!(
            "frame has {} bytes, expected {expected}",
            frame.data.len()
        )));
    }

    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;

    let rgb = if frame.premultiplied {
        premul_rgba_to_rgb(&frame.data)
    } else {
        frame
            .data
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect()
    };

    let path = dir.join(file_name);
    image::save_buffer_with_format(
        &path,
        &rgb,
        frame.width,
        frame.height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )?;

    tracing::info!(path = %path.display(), "slide saved");
    Ok(path)
}
